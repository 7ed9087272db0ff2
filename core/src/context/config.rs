//! Skull timer configuration
//!
//! Re-exports the shared config type from skulltimer-types and provides
//! confy-backed persistence for it.

pub use skulltimer_types::SkullTimerConfig;

use tracing::warn;

use super::error::ConfigError;

const APP_NAME: &str = "skulltimer";
const CONFIG_NAME: &str = "config";

/// Extension trait for SkullTimerConfig persistence
pub trait SkullTimerConfigExt: Sized {
    /// Load from disk, falling back to defaults if the file is unreadable
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
}

impl SkullTimerConfigExt for SkullTimerConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Using default skull timer configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }
}
