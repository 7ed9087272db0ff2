//! Animation tables: non-attack animations and spell casts.

use phf::{phf_set, Set};

use crate::combat::HitDelay;

/// Idle and block animations. These never count as an attack.
static EXCLUDED_ANIMATIONS: Set<i32> = phf_set! {
    -1i32,   // Idle
    808i32,  // Stand
    388i32,  // Shield block
    397i32,  // Block (unarmed)
    420i32,  // Block (crossbow)
    424i32,  // Block
    1156i32, // Defender block
    1659i32, // Whip block
    4177i32, // Staff block
};

/// Standard spellbook combat spells
static STANDARD_SPELLS: Set<i32> = phf_set! {
    711i32,  // Strike / bolt
    724i32,  // Crumble undead
    727i32,  // Blast / wave
    811i32,  // God spells
    1161i32, // Bind / snare / entangle
    1162i32, // Strike (staff)
    7855i32, // Surge
};

/// Ancient magicks
static ANCIENT_SPELLS: Set<i32> = phf_set! {
    1978i32, // Rush / blitz
    1979i32, // Burst / barrage
};

/// Built-in spells of powered staves
static POWERED_STAFF_SPELLS: Set<i32> = phf_set! {
    1167i32, // Trident / sanguinesti
    9493i32, // Tumeken's shadow
};

/// Arceuus grasp and demonbane spells land on a fixed delay
static ARCEUUS_SPELLS: Set<i32> = phf_set! {
    8972i32, // Grasp
    8974i32, // Grasp (dark)
    8975i32, // Grasp (greater)
    8977i32, // Demonbane
};

/// Spell animation sets and the hit delay each resolves to
pub static SPELL_ANIMATION_SETS: [(&Set<i32>, HitDelay); 4] = [
    (&STANDARD_SPELLS, HitDelay::MagicStandard),
    (&ANCIENT_SPELLS, HitDelay::MagicStandard),
    (&POWERED_STAFF_SPELLS, HitDelay::MagicStandard),
    (&ARCEUUS_SPELLS, HitDelay::Fixed(2)),
];

/// Shield special attacks (dragonfire and wyvern shields)
static SHIELD_SPECIALS: Set<i32> = phf_set! {
    6696i32, // Dragonfire shield / ward
    7700i32, // Ancient wyvern shield
};

pub fn is_excluded_animation(animation: i32) -> bool {
    EXCLUDED_ANIMATIONS.contains(&animation)
}

/// Hit delay of a spell cast, if `animation` is a known spell
pub fn spell_delay(animation: i32) -> Option<HitDelay> {
    SPELL_ANIMATION_SETS
        .iter()
        .find(|(set, _)| set.contains(&animation))
        .map(|(_, delay)| *delay)
}

/// Hit delay of a shield special attack, if `animation` is one
pub fn shield_special_delay(animation: i32) -> Option<HitDelay> {
    SHIELD_SPECIALS
        .contains(&animation)
        .then_some(HitDelay::ShieldSpecial)
}
