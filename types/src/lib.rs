//! Shared configuration types for the skull timer
//!
//! This crate contains the serializable configuration shared between the
//! event engine (skulltimer-core) and the replay binary.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Skull Timer Config
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted skull timer configuration.
///
/// Note: Persistence (load/save) is provided by skulltimer-core through
/// `SkullTimerConfigExt`, which owns the confy dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkullTimerConfig {
    /// Remaining skull duration in whole seconds, written when the timer is
    /// stopped with persistence (logout, world hop) and read once at login.
    #[serde(default)]
    pub remaining_secs: u64,

    /// Start a timer when the local player lands an unprovoked hit.
    #[serde(default = "default_true")]
    pub pvp_detection: bool,

    /// React to skull-granting equipment in the watched slots.
    #[serde(default = "default_true")]
    pub equipment_detection: bool,

    /// React to teleports into the hazardous zone.
    #[serde(default = "default_true")]
    pub zone_detection: bool,

    /// React to NPC-granted skull chat messages.
    #[serde(default = "default_true")]
    pub chat_detection: bool,
}

impl Default for SkullTimerConfig {
    fn default() -> Self {
        Self {
            remaining_secs: 0,
            pvp_detection: true,
            equipment_detection: true,
            zone_detection: true,
            chat_detection: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: SkullTimerConfig = toml::from_str("remaining_secs = 42").unwrap();
        assert_eq!(config.remaining_secs, 42);
        assert!(config.pvp_detection);
        assert!(config.equipment_detection);
        assert!(config.zone_detection);
        assert!(config.chat_detection);
    }

    #[test]
    fn empty_document_is_default() {
        let config: SkullTimerConfig = toml::from_str("").unwrap();
        assert_eq!(config, SkullTimerConfig::default());
    }

    #[test]
    fn toggles_round_trip_through_toml() {
        let config = SkullTimerConfig {
            remaining_secs: 600,
            pvp_detection: false,
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        let back: SkullTimerConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
