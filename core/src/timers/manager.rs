//! Skull timer lifecycle
//!
//! Owns the single active countdown. Every skull source funnels into
//! `start`/`stop`; expiry is polled once per game tick.

use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::signal_processor::{MarkSignal, MarkSource, SignalHandler};

use super::{DurationStore, MemoryStore, SkullTimer};

/// Owns the one active skull countdown and its persisted remainder.
pub struct TimerManager {
    active: Option<SkullTimer>,
    store: Box<dyn DurationStore>,
}

impl std::fmt::Debug for TimerManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerManager")
            .field("active", &self.active)
            .field("persisted", &self.store.remaining())
            .finish()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }
}

impl TimerManager {
    pub fn new(store: Box<dyn DurationStore>) -> Self {
        Self {
            active: None,
            store,
        }
    }

    pub fn active_timer(&self) -> Option<&SkullTimer> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Remaining time on the active countdown, if any
    pub fn remaining(&self, now: NaiveDateTime) -> Option<Duration> {
        self.active.as_ref().map(|t| t.remaining(now))
    }

    /// Remaining time last written to the store
    pub fn persisted_remaining(&self) -> Duration {
        self.store.remaining()
    }

    /// Start a countdown of `duration`.
    ///
    /// With `extend`, a running countdown is never shortened: the new timer
    /// runs for the longer of `duration` and what is left. Otherwise the
    /// running countdown is replaced. A zero duration, or one too long to
    /// place on the game clock, does nothing.
    pub fn start(
        &mut self,
        source: MarkSource,
        duration: Duration,
        extend: bool,
        now: NaiveDateTime,
    ) {
        if duration.is_zero() {
            return;
        }

        let duration = match &self.active {
            Some(current) if extend => duration.max(current.remaining(now)),
            _ => duration,
        };

        let Some(timer) = SkullTimer::new(source, now, duration) else {
            warn!(?source, secs = duration.as_secs(), "Skull duration out of range, ignoring");
            return;
        };

        if self.active.is_some() {
            self.stop(false, now);
        }

        info!(?source, secs = duration.as_secs(), extend, "Skull timer started");
        self.active = Some(timer);
    }

    /// Cancel the countdown.
    ///
    /// With `persist`, the remaining time (zero if nothing is running) is
    /// saved for the next login; otherwise the saved time is cleared.
    pub fn stop(&mut self, persist: bool, now: NaiveDateTime) {
        let remaining = if persist {
            self.remaining(now).unwrap_or_default()
        } else {
            Duration::ZERO
        };

        if let Some(timer) = self.active.take() {
            debug!(
                source = ?timer.source,
                persist,
                remaining_secs = remaining.as_secs(),
                "Skull timer stopped"
            );
        }
        self.store.set_remaining(remaining);
    }

    /// Resume the countdown saved by the previous session
    pub fn restore(&mut self, now: NaiveDateTime) {
        let remaining = self.store.remaining();
        if remaining.is_zero() {
            return;
        }
        info!(secs = remaining.as_secs(), "Restoring skull timer");
        self.start(MarkSource::Restored, remaining, false, now);
    }

    /// Expire the countdown if its end time has been reached
    pub fn tick(&mut self, now: NaiveDateTime) {
        if self.active.as_ref().is_some_and(|t| t.has_expired(now)) {
            info!("Skull timer expired");
            self.stop(false, now);
        }
    }
}

impl SignalHandler for TimerManager {
    fn handle_signal(&mut self, signal: &MarkSignal, now: NaiveDateTime) {
        match *signal {
            MarkSignal::Start {
                source,
                duration,
                extend,
            } => self.start(source, duration, extend, now),
            MarkSignal::Stop { persist } => self.stop(persist, now),
            MarkSignal::Restore => self.restore(now),
        }
    }

    fn on_tick(&mut self, now: NaiveDateTime) {
        self.tick(now);
    }
}
