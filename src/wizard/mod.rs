//! Intake wizard — the multi-step "start a project" flow.
//!
//! The wizard walks a prospective client through a linear set of
//! questions, buffering one draft answer per step and committing it into
//! a [`record::ProjectRecord`] on each transition. The recap step exposes
//! the whole record for in-place edits; leaving it submits the finalized
//! record and lands on the terminal success step.

pub mod flow;
pub mod machine;
pub mod prompts;
pub mod record;
pub mod step;

pub use flow::{IntakeFlow, StepView};
pub use machine::WizardMachine;
pub use record::{Field, ProjectRecord, is_valid_email};
pub use step::Step;
