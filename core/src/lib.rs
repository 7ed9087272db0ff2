pub mod combat;
pub mod context;
pub mod equipment;
pub mod game_data;
pub mod session;
pub mod signal_processor;
pub mod timers;
pub mod zone;

// Re-exports for convenience
pub use combat::{AttackCategory, CombatStatus, CombatTracker, HitDelay, classify};
pub use context::{ConfigError, SkullTimerConfig, SkullTimerConfigExt};
pub use equipment::EquipmentMarkDetector;
pub use game_data::{WeaponRef, WorldPoint};
pub use session::{SharedSession, SkullSession, dispatch};
pub use signal_processor::{EventProcessor, GameEvent, MarkSignal, MarkSource, SignalHandler};
pub use timers::{ConfyStore, DurationStore, MemoryStore, SkullTimer, TimerManager};
pub use zone::ZoneMarkDetector;
