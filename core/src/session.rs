//! A tracked player's session: event processing plus the skull timer,
//! behind one entry point.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDateTime;

use skulltimer_types::SkullTimerConfig;

use crate::signal_processor::{EventProcessor, GameEvent, MarkSignal, SignalHandler};
use crate::timers::{DurationStore, SkullTimer, TimerManager};

#[derive(Debug, Default)]
pub struct SkullSession {
    processor: EventProcessor,
    timers: TimerManager,
}

/// Session shared between event dispatch workers. Every handler runs under
/// the one lock so events are applied in tick order.
pub type SharedSession = Arc<Mutex<SkullSession>>;

impl SkullSession {
    pub fn new(config: &SkullTimerConfig, store: Box<dyn DurationStore>) -> Self {
        Self {
            processor: EventProcessor::with_config(config),
            timers: TimerManager::new(store),
        }
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn processor(&self) -> &EventProcessor {
        &self.processor
    }

    pub fn timers(&self) -> &TimerManager {
        &self.timers
    }

    /// Timer or indefinite skull item
    pub fn is_marked(&self) -> bool {
        self.timers.is_active() || self.processor.equipment().wears_indefinite()
    }

    /// Handle one event at game time `now`.
    /// Returns the timer decisions it produced (already applied).
    pub fn handle(&mut self, event: &GameEvent, now: NaiveDateTime) -> Vec<MarkSignal> {
        let marked = self.is_marked();
        let signals = self.processor.process_event(event, marked);
        self.timers.handle_signals(&signals, now);

        if matches!(event, GameEvent::GameTick { .. }) {
            self.timers.on_tick(now);
        }
        signals
    }

    /// Remaining countdown for the renderer
    pub fn remaining(&self, now: NaiveDateTime) -> Option<Duration> {
        self.timers.remaining(now)
    }

    pub fn active_timer(&self) -> Option<&SkullTimer> {
        self.timers.active_timer()
    }
}

/// Handle an event on a shared session. A poisoned lock is recovered, since
/// every handler leaves the session consistent between statements.
pub fn dispatch(session: &SharedSession, event: &GameEvent, now: NaiveDateTime) -> Vec<MarkSignal> {
    let mut guard = session
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.handle(event, now)
}
