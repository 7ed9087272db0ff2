//! Attack classification
//!
//! Maps an opponent's weapon and animation to an attack category and the
//! number of ticks until its hitsplat should appear.
//!
//! Resolution order:
//! 1. Excluded (idle/block) animations short-circuit to "not an attack"
//! 2. Exact weapon lookup (standard or special delay by animation)
//! 3. Spell animation sets
//! 4. Shield special animations
//! 5. Weapon name keywords

use crate::game_data::{
    WeaponRef, generic_category, is_excluded_animation, lookup_weapon, shield_special_delay,
    spell_delay,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackCategory {
    Melee,
    Ranged,
    Magic,
    Other,
}

impl AttackCategory {
    /// Delay used when only the category is known
    pub fn standard_delay(self) -> HitDelay {
        match self {
            AttackCategory::Melee | AttackCategory::Other => HitDelay::MeleeStandard,
            AttackCategory::Ranged => HitDelay::RangedStandard,
            AttackCategory::Magic => HitDelay::MagicStandard,
        }
    }
}

/// Ticks between an attack animation and its hitsplat, as a function of
/// the tile distance between attacker and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitDelay {
    /// Lands on the animation tick
    MeleeStandard,
    /// Melee specials that land one tick late
    MeleeDelayed,
    /// `1 + (3 + d/6)`
    RangedStandard,
    /// `1 + d/6`
    RangedThrown,
    /// 2 ticks within 4 tiles, 3 beyond
    CloseRange,
    /// `1 + (1 + d/3)`
    MagicStandard,
    /// `2 + (1 + d/3)`
    MagicEmpowered,
    /// `2 + (4 + d/6)`
    ShieldSpecial,
    Fixed(u32),
}

impl HitDelay {
    pub fn ticks(self, distance: u32) -> u32 {
        match self {
            HitDelay::MeleeStandard => 0,
            HitDelay::MeleeDelayed => 1,
            HitDelay::RangedStandard => 1 + (3 + distance / 6),
            HitDelay::RangedThrown => 1 + distance / 6,
            HitDelay::CloseRange => {
                if distance <= 4 {
                    2
                } else {
                    3
                }
            }
            HitDelay::MagicStandard => 1 + (1 + distance / 3),
            HitDelay::MagicEmpowered => 2 + (1 + distance / 3),
            HitDelay::ShieldSpecial => 2 + (4 + distance / 6),
            HitDelay::Fixed(ticks) => ticks,
        }
    }
}

/// A classified attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    pub category: AttackCategory,
    pub delay: HitDelay,
}

impl Attack {
    pub fn new(category: AttackCategory, delay: HitDelay) -> Self {
        Self { category, delay }
    }
}

/// Classify an animation played by an opponent wielding `weapon`.
///
/// Returns `None` for non-attack animations and for anything no table
/// recognizes.
pub fn classify(weapon: Option<&WeaponRef>, animation: i32) -> Option<Attack> {
    if is_excluded_animation(animation) {
        return None;
    }

    if let Some(info) = weapon.and_then(|w| lookup_weapon(w.id)) {
        return Some(Attack::new(info.category, info.delay_for(animation)));
    }

    if let Some(delay) = spell_delay(animation) {
        return Some(Attack::new(AttackCategory::Magic, delay));
    }

    if let Some(delay) = shield_special_delay(animation) {
        return Some(Attack::new(AttackCategory::Other, delay));
    }

    weapon
        .and_then(|w| generic_category(&w.name))
        .map(|category| Attack::new(category, category.standard_delay()))
}
