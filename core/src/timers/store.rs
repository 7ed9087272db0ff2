//! Persistence of the remaining skull duration across sessions.

use std::time::Duration;

use tracing::warn;

use skulltimer_types::SkullTimerConfig;

use crate::context::SkullTimerConfigExt;

/// Where the remaining duration is kept between sessions
pub trait DurationStore: Send {
    fn remaining(&self) -> Duration;
    fn set_remaining(&mut self, remaining: Duration);
}

/// In-memory store (tests, replays that must not touch the user's config)
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    remaining: Duration,
}

impl MemoryStore {
    pub fn new(remaining: Duration) -> Self {
        Self { remaining }
    }
}

impl DurationStore for MemoryStore {
    fn remaining(&self) -> Duration {
        self.remaining
    }

    fn set_remaining(&mut self, remaining: Duration) {
        self.remaining = remaining;
    }
}

/// Store backed by the confy config file. Whole seconds only.
#[derive(Debug, Clone)]
pub struct ConfyStore {
    config: SkullTimerConfig,
}

impl ConfyStore {
    pub fn new(config: SkullTimerConfig) -> Self {
        Self { config }
    }
}

impl DurationStore for ConfyStore {
    fn remaining(&self) -> Duration {
        Duration::from_secs(self.config.remaining_secs)
    }

    fn set_remaining(&mut self, remaining: Duration) {
        let secs = remaining.as_secs();
        if secs == self.config.remaining_secs {
            return;
        }
        self.config.remaining_secs = secs;
        if let Err(e) = self.config.save() {
            warn!(error = %e, remaining_secs = secs, "Failed to persist skull duration");
        }
    }
}
