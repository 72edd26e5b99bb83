//! The intake state machine — transitions, draft buffering, validation.
//!
//! The machine is synchronous and deterministic. Transitions are two-phase:
//! `request_advance`/`request_retreat` validate and mark the transition as
//! in flight, and a later `settle()` call performs the commit/load sequence.
//! Timing (the settle delay between the two phases) belongs to the caller;
//! see [`super::flow::IntakeFlow`].

use crate::error::Rejection;

use super::prompts::placeholder_hints;
use super::record::{Field, ProjectRecord, is_valid_email};
use super::step::Step;

/// The intake wizard state machine.
///
/// Owns the current step, the per-step draft buffer, the accumulated
/// [`ProjectRecord`], the in-flight transition marker, and the cosmetic
/// placeholder rotation index.
#[derive(Debug, Clone, Default)]
pub struct WizardMachine {
    step: Step,
    draft: String,
    record: ProjectRecord,
    /// Target step of the transition currently in flight, if any.
    pending: Option<Step>,
    placeholder_index: usize,
}

impl WizardMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn record(&self) -> &ProjectRecord {
        &self.record
    }

    /// Whether a transition is in flight (further requests are rejected).
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn placeholder_index(&self) -> usize {
        self.placeholder_index
    }

    /// The hint currently rotated in for the current step, if it has one.
    pub fn current_placeholder(&self) -> Option<&'static str> {
        placeholder_hints(self.step)
            .get(self.placeholder_index)
            .copied()
    }

    /// Request a forward transition.
    ///
    /// Validates the draft for the step being left, then marks the
    /// transition as in flight and returns the target step. The state
    /// itself does not change until [`settle`](Self::settle).
    pub fn request_advance(&mut self) -> Result<Step, Rejection> {
        if self.pending.is_some() {
            return Err(Rejection::TransitionInFlight);
        }

        match self.step {
            Step::Intro | Step::Goal | Step::Scope | Step::Existing => {
                if self.draft.trim().is_empty() {
                    return Err(Rejection::EmptyDraft);
                }
            }
            Step::Contact => {
                if !is_valid_email(&self.draft) {
                    return Err(Rejection::InvalidEmail);
                }
            }
            // Fields were already validated individually; this is the
            // submit action.
            Step::Recap => {}
            Step::Success => return Err(Rejection::FlowComplete),
        }

        let target = self.step.next().ok_or(Rejection::FlowComplete)?;
        self.pending = Some(target);
        Ok(target)
    }

    /// Request a backward transition to the linear predecessor.
    ///
    /// Unlike advance, the draft is not validated: the user may retreat
    /// with an incomplete or invalid draft, which is committed verbatim.
    pub fn request_retreat(&mut self) -> Result<Step, Rejection> {
        if self.pending.is_some() {
            return Err(Rejection::TransitionInFlight);
        }
        if self.step.is_terminal() {
            return Err(Rejection::FlowComplete);
        }
        let target = self.step.prev().ok_or(Rejection::AtFirstStep)?;
        self.pending = Some(target);
        Ok(target)
    }

    /// Complete the in-flight transition: commit the draft into the record
    /// field of the step being left, load the target step's draft, reset
    /// the placeholder rotation, and move to the target.
    ///
    /// Returns the new current step, or `None` if no transition was in
    /// flight. Atomic from the caller's perspective.
    pub fn settle(&mut self) -> Option<Step> {
        let target = self.pending.take()?;

        // Commit — skipped when leaving recap/success, which have no
        // single draft field.
        if let Some(field) = self.step.field() {
            self.record.set(field, self.draft.clone());
        }

        // Load the target step's draft from the record.
        self.draft = match target.field() {
            Some(field) => self.record.get(field).to_string(),
            None => String::new(),
        };

        self.placeholder_index = 0;
        self.step = target;
        Some(target)
    }

    /// Overwrite the draft buffer. Always permitted; validation happens
    /// only at advance time. During a settle window the last write before
    /// the commit wins.
    pub fn set_draft_input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Directly overwrite a record field — the recap view's edit path.
    ///
    /// No validation is re-run: a recap edit can re-introduce an invalid
    /// email and still be submitted. Documented behavior, kept as is.
    pub fn set_recap_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
    }

    /// Advance the placeholder rotation for the current step.
    ///
    /// No-op on steps without at least two candidate hints, so the index
    /// never rotates against a stale or empty list.
    pub fn rotate_placeholder(&mut self) {
        let hints = placeholder_hints(self.step);
        if hints.len() > 1 {
            self.placeholder_index = (self.placeholder_index + 1) % hints.len();
        }
    }
}
