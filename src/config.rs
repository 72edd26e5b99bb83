//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Wizard timing configuration.
///
/// Both values are design-level, not hard timing contracts: the settle
/// delay reserves an exit/entry animation window, the rotation interval
/// paces the cosmetic placeholder hints.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Pause between a transition being accepted and it taking effect.
    pub settle_delay: Duration,
    /// How often the placeholder hint rotates on steps with several hints.
    pub placeholder_interval: Duration,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(600), // matches the step animation
            placeholder_interval: Duration::from_secs(2),
        }
    }
}

impl WizardConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Reads `INTAKE_SETTLE_MS` and `INTAKE_ROTATE_MS`. A variable that is
    /// set but not a number is an error rather than a silent default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ms) = parse_ms_var("INTAKE_SETTLE_MS")? {
            config.settle_delay = ms;
        }
        if let Some(ms) = parse_ms_var("INTAKE_ROTATE_MS")? {
            config.placeholder_interval = ms;
        }

        Ok(config)
    }
}

fn parse_ms_var(key: &str) -> Result<Option<Duration>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => {
            let ms: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("expected milliseconds, got {raw:?}"),
            })?;
            Ok(Some(Duration::from_millis(ms)))
        }
        Err(_) => Ok(None),
    }
}
