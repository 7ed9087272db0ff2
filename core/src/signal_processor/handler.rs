use chrono::NaiveDateTime;

use super::signal::MarkSignal;

/// Trait for systems that react to mark signals.
/// Implemented by the timer manager; overlays can implement it to mirror state.
pub trait SignalHandler {
    /// Handle a single signal at game time `now`.
    fn handle_signal(&mut self, signal: &MarkSignal, now: NaiveDateTime);

    /// Handle multiple signals (default implementation calls handle_signal for each)
    fn handle_signals(&mut self, signals: &[MarkSignal], now: NaiveDateTime) {
        for signal in signals {
            self.handle_signal(signal, now);
        }
    }

    /// Called once per game tick after the tick's signals were handled
    fn on_tick(&mut self, _now: NaiveDateTime) {}
}
