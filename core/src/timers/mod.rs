//! Timer system
//!
//! This module provides:
//! - **Active timer**: the one running skull countdown
//! - **Manager**: signal handler that owns the countdown's lifecycle
//! - **Store**: persistence of the remaining time across sessions
//!
//! # Merge policy
//!
//! Only one countdown exists at a time. A new `start` settles the old one
//! first; with `extend` the new countdown keeps whichever is longer.

mod active;
mod manager;
mod store;


pub use active::SkullTimer;
pub use manager::TimerManager;
pub use store::{ConfyStore, DurationStore, MemoryStore};
