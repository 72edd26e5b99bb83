//! Error types for the intake wizard.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Submission collaborator errors.
///
/// The flow treats submission as best-effort: these are logged, never fatal.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission sink {name} failed: {reason}")]
    SinkFailed { name: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why the machine refused a transition request.
///
/// A rejection never mutates state — from the machine's perspective the
/// operation simply did not happen. Renderers may use the reason to show
/// a hint, or ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("A transition is already in flight")]
    TransitionInFlight,

    #[error("The current step cannot be left blank")]
    EmptyDraft,

    #[error("The contact email is not a valid address")]
    InvalidEmail,

    #[error("There is no step before the first one")]
    AtFirstStep,

    #[error("The flow is complete; no further transitions")]
    FlowComplete,
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
