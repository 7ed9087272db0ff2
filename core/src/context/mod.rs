mod config;
mod error;
mod interner;

pub use config::{SkullTimerConfig, SkullTimerConfigExt};
pub use error::ConfigError;
pub use interner::{IStr, intern, interner, resolve};
