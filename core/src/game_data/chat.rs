//! Chat messages sent when an NPC skulls the player.

use std::time::Duration;

use phf::phf_map;

/// Message text (exact) to skull duration in seconds
static SKULL_MESSAGES: phf::Map<&'static str, u64> = phf_map! {
    // Emblem Trader, "skull" option
    "Your PK skull will now last for the full 20 minutes." => 20 * 60,
    // Emblem Trader, "short skull" option
    "Your PK skull will now last for 10 minutes." => 10 * 60,
};

/// Skull duration granted by `message`, if it is one of the skull messages
pub fn chat_skull_duration(message: &str) -> Option<Duration> {
    SKULL_MESSAGES
        .get(message)
        .map(|secs| Duration::from_secs(*secs))
}
