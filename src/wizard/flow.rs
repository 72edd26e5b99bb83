//! IntakeFlow — drives the machine's deferred transitions and timers.
//!
//! The machine itself is synchronous; this coordinator owns the timing:
//! the settle delay between a transition request and its commit, the
//! placeholder rotation interval, and the one-shot handoff to the
//! submission sink when the flow completes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::config::WizardConfig;
use crate::error::Rejection;
use crate::submit::{SubmissionSink, SubmittedRequest};

use super::machine::WizardMachine;
use super::prompts::{placeholder_hints, question_label, section_header};
use super::record::{Field, ProjectRecord};
use super::step::Step;

/// Render snapshot handed to the rendering collaborator.
#[derive(Debug, Clone)]
pub struct StepView {
    pub step: Step,
    pub header: Option<&'static str>,
    pub question: Option<&'static str>,
    pub draft: String,
    pub placeholder: Option<&'static str>,
    pub record: ProjectRecord,
    pub is_transitioning: bool,
}

type TaskSlot = Arc<RwLock<Option<JoinHandle<()>>>>;

/// Coordinates one intake session: machine state, settle-delay tasks,
/// placeholder rotation, and submission.
///
/// Created fresh when the intake flow is entered and discarded (via
/// [`shutdown`](Self::shutdown)) when it is left or completes.
pub struct IntakeFlow {
    config: WizardConfig,
    machine: Arc<RwLock<WizardMachine>>,
    sink: Arc<dyn SubmissionSink>,
    /// Rotation timer for the current step, if it has several hints.
    rotation: TaskSlot,
    /// The in-flight settle task, if a transition was accepted.
    settle: TaskSlot,
}

impl IntakeFlow {
    pub fn new(config: WizardConfig, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            config,
            machine: Arc::new(RwLock::new(WizardMachine::new())),
            sink,
            rotation: Arc::new(RwLock::new(None)),
            settle: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Start the rotation timer for the entry step.
    pub async fn start(&self) {
        Self::restart_rotation(
            Arc::clone(&self.machine),
            Arc::clone(&self.rotation),
            self.config.placeholder_interval,
        )
        .await;
    }

    /// Request a forward transition.
    ///
    /// On acceptance the commit is deferred by the configured settle
    /// delay; until it lands, further requests are rejected.
    pub async fn advance(&self) -> Result<Step, Rejection> {
        let target = self.machine.write().await.request_advance()?;
        tracing::debug!(target = %target, "advance accepted");
        self.schedule_settle().await;
        Ok(target)
    }

    /// Request a backward transition to the predecessor step.
    pub async fn retreat(&self) -> Result<Step, Rejection> {
        let target = self.machine.write().await.request_retreat()?;
        tracing::debug!(target = %target, "retreat accepted");
        self.schedule_settle().await;
        Ok(target)
    }

    /// Overwrite the draft buffer (unguarded, callable any time).
    pub async fn set_draft_input(&self, text: impl Into<String>) {
        self.machine.write().await.set_draft_input(text);
    }

    /// Directly edit a record field from the recap view (unguarded).
    pub async fn set_recap_field(&self, field: Field, value: impl Into<String>) {
        self.machine.write().await.set_recap_field(field, value);
    }

    pub async fn current_step(&self) -> Step {
        self.machine.read().await.current_step()
    }

    pub async fn is_transitioning(&self) -> bool {
        self.machine.read().await.is_transitioning()
    }

    /// Block until no transition is in flight.
    pub async fn wait_until_settled(&self) {
        loop {
            if !self.is_transitioning().await {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Snapshot everything a renderer needs for the current step.
    pub async fn view(&self) -> StepView {
        let machine = self.machine.read().await;
        let step = machine.current_step();
        StepView {
            step,
            header: section_header(step),
            question: question_label(step),
            draft: machine.draft().to_string(),
            placeholder: machine.current_placeholder(),
            record: machine.record().clone(),
            is_transitioning: machine.is_transitioning(),
        }
    }

    /// Tear down timers. The flow must not be used afterwards.
    pub async fn shutdown(&self) {
        for slot in [&self.rotation, &self.settle] {
            if let Some(handle) = slot.write().await.take() {
                handle.abort();
            }
        }
    }

    /// Spawn the deferred second phase of an accepted transition.
    async fn schedule_settle(&self) {
        let machine = Arc::clone(&self.machine);
        let sink = Arc::clone(&self.sink);
        let rotation = Arc::clone(&self.rotation);
        let settle_delay = self.config.settle_delay;
        let rotate_interval = self.config.placeholder_interval;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(settle_delay).await;

            let (settled, record) = {
                let mut machine = machine.write().await;
                let settled = machine.settle();
                (settled, machine.record().clone())
            };
            let Some(step) = settled else { return };
            tracing::debug!(step = %step, "step settled");

            // Only the recap → success transition reaches the terminal
            // step, so this fires at most once per flow.
            if step == Step::Success {
                let request = SubmittedRequest::new(record);
                let id = request.id;
                if let Err(e) = sink.submit(request).await {
                    tracing::warn!(
                        "Submission via sink {} failed for request {}: {}",
                        sink.name(),
                        id,
                        e
                    );
                }
            }

            Self::restart_rotation(machine, rotation, rotate_interval).await;
        });

        // At most one transition is in flight, so the previous settle
        // task has already finished by the time a new one is accepted.
        *self.settle.write().await = Some(handle);
    }

    /// Tear down the rotation timer and start a fresh one if the current
    /// step rotates.
    async fn restart_rotation(
        machine: Arc<RwLock<WizardMachine>>,
        slot: TaskSlot,
        interval: Duration,
    ) {
        let mut guard = slot.write().await;
        if let Some(handle) = guard.take() {
            handle.abort();
        }

        let step = machine.read().await.current_step();
        if placeholder_hints(step).len() <= 1 {
            return;
        }

        let rotating = Arc::clone(&machine);
        *guard = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // interval fires immediately; skip that tick so the first
            // rotation happens one full interval after the step change
            ticker.tick().await;
            loop {
                ticker.tick().await;
                rotating.write().await.rotate_placeholder();
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::LoggingSink;

    fn quick_flow() -> IntakeFlow {
        let config = WizardConfig {
            settle_delay: Duration::from_millis(10),
            placeholder_interval: Duration::from_millis(20),
        };
        IntakeFlow::new(config, Arc::new(LoggingSink))
    }

    #[tokio::test]
    async fn view_exposes_step_content() {
        let flow = quick_flow();
        let view = flow.view().await;
        assert_eq!(view.step, Step::Intro);
        assert_eq!(view.question, Some("I'm working in"));
        assert_eq!(view.header, Some("How can we help"));
        assert_eq!(view.placeholder, Some("technology"));
        assert!(!view.is_transitioning);
    }

    #[tokio::test]
    async fn advance_settles_after_delay() {
        let flow = quick_flow();
        flow.set_draft_input("technology").await;
        flow.advance().await.unwrap();

        assert!(flow.is_transitioning().await);
        assert_eq!(flow.current_step().await, Step::Intro);

        flow.wait_until_settled().await;
        assert_eq!(flow.current_step().await, Step::Goal);
        flow.shutdown().await;
    }

    #[tokio::test]
    async fn placeholder_rotates_on_interval() {
        let flow = quick_flow();
        flow.start().await;

        let before = flow.view().await.placeholder;
        tokio::time::sleep(Duration::from_millis(90)).await;
        let after = flow.view().await.placeholder;
        assert_ne!(before, after, "hint should have rotated");

        flow.shutdown().await;
    }
}
