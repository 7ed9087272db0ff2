//! Static game data: weapon and animation tables, skull items, zone bounds
//! and the fixed durations skull sources grant.

mod animations;
mod chat;
mod equipment;
mod weapons;
mod world;

use std::time::Duration;

pub use animations::{
    SPELL_ANIMATION_SETS, is_excluded_animation, shield_special_delay, spell_delay,
};
pub use chat::chat_skull_duration;
pub use equipment::{AMULET_SLOT, CAPE_SLOT, SkullGrant, WATCHED_SLOTS, skull_grant};
pub use weapons::{WeaponInfo, WeaponRef, generic_category, lookup_weapon};
pub use world::{HAZARD_ZONE, WorldPoint, ZoneBounds};

/// Skull granted for attacking another player unprovoked
pub const PVP_SKULL_DURATION: Duration = Duration::from_secs(20 * 60);

/// Skull granted when a finite skull item is worn or an indefinite one removed
pub const EQUIPMENT_SKULL_DURATION: Duration = Duration::from_secs(20 * 60);

/// Skull granted for teleporting into the hazardous zone
pub const ZONE_SKULL_DURATION: Duration = Duration::from_secs(10 * 60);

/// Real-world length of one game tick
pub const TICK_DURATION: Duration = Duration::from_millis(600);
