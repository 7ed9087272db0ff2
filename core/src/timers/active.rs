//! The active skull countdown (runtime state)
//!
//! # Lifecycle
//!
//! 1. A skull source fires → `SkullTimer` created by the manager
//! 2. The renderer polls `remaining` every tick
//! 3. Timer expires, is replaced, or is stopped → dropped

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::signal_processor::MarkSource;

/// A running skull countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkullTimer {
    /// What started this countdown
    pub source: MarkSource,

    // ─── Timing (game time) ─────────────────────────────────────────────────
    /// When the timer was started
    pub started_at: NaiveDateTime,

    /// When the timer will expire
    pub expires_at: NaiveDateTime,

    /// Total duration
    pub duration: Duration,
}

impl SkullTimer {
    /// Returns `None` if the expiry is not representable as a game time.
    pub fn new(source: MarkSource, now: NaiveDateTime, duration: Duration) -> Option<Self> {
        let expires_at = chrono::Duration::from_std(duration)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))?;
        Some(Self {
            source,
            started_at: now,
            expires_at,
            duration,
        })
    }

    /// Check if the timer has expired
    pub fn has_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.expires_at
    }

    /// Time left, zero once expired
    pub fn remaining(&self, now: NaiveDateTime) -> Duration {
        self.expires_at
            .signed_duration_since(now)
            .to_std()
            .unwrap_or_default()
    }
}
