//! Skull-granting equipment.

use phf::phf_map;

/// Equipment container index of the cape slot
pub const CAPE_SLOT: usize = 1;
/// Equipment container index of the amulet slot
pub const AMULET_SLOT: usize = 2;

/// Slots whose contents can grant a skull
pub const WATCHED_SLOTS: [usize; 2] = [CAPE_SLOT, AMULET_SLOT];

/// How an item affects the wearer's skull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkullGrant {
    #[default]
    None,
    /// Grants a fixed-length skull when equipped
    Finite,
    /// Keeps the wearer skulled for as long as it is worn
    Indefinite,
}

static SKULL_ITEMS: phf::Map<i32, SkullGrant> = phf_map! {
    22557i32 => SkullGrant::Indefinite, // Amulet of avarice
    23351i32 => SkullGrant::Finite,     // Cape of skulls
};

/// Classify the contents of an equipment slot
pub fn skull_grant(item_id: Option<i32>) -> SkullGrant {
    item_id
        .and_then(|id| SKULL_ITEMS.get(&id).copied())
        .unwrap_or_default()
}
