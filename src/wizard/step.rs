//! Intake steps — the ordered stages of the project intake flow.

use serde::{Deserialize, Serialize};

use super::record::Field;

/// The steps of the intake wizard.
///
/// Progresses linearly: Intro → Goal → Scope → Existing → Contact →
/// Recap → Success. `Intro` is the entry step; `Success` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Intro,
    Goal,
    Scope,
    Existing,
    Contact,
    Recap,
    Success,
}

impl Step {
    /// All steps in flow order.
    pub const ALL: [Step; 7] = [
        Step::Intro,
        Step::Goal,
        Step::Scope,
        Step::Existing,
        Step::Contact,
        Step::Recap,
        Step::Success,
    ];

    /// The next step in the linear progression, if any.
    pub fn next(&self) -> Option<Step> {
        let idx = Self::ALL.iter().position(|s| s == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    /// The previous step in the linear progression, if any.
    pub fn prev(&self) -> Option<Step> {
        let idx = Self::ALL.iter().position(|s| s == self)?;
        idx.checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Whether this step is terminal (the flow is done).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The record field this step's draft commits to.
    ///
    /// `Recap` edits the record directly and `Success` collects nothing,
    /// so neither maps to a field.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Intro => Some(Field::Industry),
            Self::Goal => Some(Field::Goal),
            Self::Scope => Some(Field::Scope),
            Self::Existing => Some(Field::ExistingStatus),
            Self::Contact => Some(Field::ContactEmail),
            Self::Recap | Self::Success => None,
        }
    }

    /// Whether the step buffers a single draft value.
    pub fn has_draft(&self) -> bool {
        self.field().is_some()
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Intro
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intro => "intro",
            Self::Goal => "goal",
            Self::Scope => "scope",
            Self::Existing => "existing",
            Self::Contact => "contact",
            Self::Recap => "recap",
            Self::Success => "success",
        };
        write!(f, "{s}")
    }
}
