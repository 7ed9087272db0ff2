//! PvP combat attribution
//!
//! This module provides:
//! - **Classification**: weapon/animation → attack category and hit delay
//! - **Status**: lifecycle of opponents the local player has hit
//! - **Tracker**: decides whether a hit by the local player was unprovoked

mod attack;
mod status;
mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use attack::{Attack, AttackCategory, HitDelay, classify};
pub use status::CombatStatus;
pub use tracker::{
    CombatTracker, EngagementSignal, ExpectedHit, OUT_OF_COMBAT_TICKS, OpponentRecord,
    TargetEntry,
};
