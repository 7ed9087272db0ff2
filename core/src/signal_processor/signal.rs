use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What granted a skull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkSource {
    /// Unprovoked attack on another player
    Pvp,
    /// Skull item equipped or removed
    Equipment,
    /// Teleported into the hazardous zone
    Zone,
    /// NPC granted a skull (chat message)
    Chat,
    /// Time carried over from the previous session
    Restored,
}

/// Timer decisions emitted by the EventProcessor.
/// Detectors decide; the timer manager is the only thing that acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkSignal {
    /// Start a countdown. With `extend`, an active timer is never shortened.
    Start {
        source: MarkSource,
        duration: Duration,
        extend: bool,
    },
    /// Cancel the countdown, optionally saving its remaining time
    Stop { persist: bool },
    /// Resume the countdown saved by the previous session
    Restore,
}
