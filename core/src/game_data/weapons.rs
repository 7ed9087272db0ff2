//! Weapon lookup table and the name-keyword fallback.
//!
//! Concrete weapons carry both their standard and special-attack hit delay.
//! Anything not in the table is classified by keywords in its display name.

use phf::phf_map;

use crate::combat::{AttackCategory, HitDelay};

/// Weapon wielded by an opponent, as reported by the client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeaponRef {
    pub id: i32,
    pub name: String,
}

impl WeaponRef {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Static data for a weapon with known hit delays
#[derive(Debug, Clone, Copy)]
pub struct WeaponInfo {
    pub category: AttackCategory,
    pub standard: HitDelay,
    pub special: HitDelay,
    /// Animation played by the special attack, if the weapon has one
    pub special_animation: Option<i32>,
}

impl WeaponInfo {
    const fn new(
        category: AttackCategory,
        standard: HitDelay,
        special: HitDelay,
        special_animation: Option<i32>,
    ) -> Self {
        Self {
            category,
            standard,
            special,
            special_animation,
        }
    }

    /// Hit delay for an attack played with `animation`
    pub fn delay_for(&self, animation: i32) -> HitDelay {
        if self.special_animation == Some(animation) {
            self.special
        } else {
            self.standard
        }
    }
}

/// Get weapon info for an item ID
pub fn lookup_weapon(item_id: i32) -> Option<&'static WeaponInfo> {
    WEAPONS.get(&item_id)
}

use AttackCategory::{Magic, Melee, Ranged};
use HitDelay::*;

/// Weapons with known hit delays, indexed by item ID
pub static WEAPONS: phf::Map<i32, WeaponInfo> = phf_map! {
    // ═══════════════════════════════════════════════════════════════════════════
    // Melee
    // ═══════════════════════════════════════════════════════════════════════════
    13652i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, Some(7514)), // Dragon claws
    4153i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, Some(1667)), // Granite maul
    24225i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, Some(1667)), // Granite maul (or)
    11802i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, Some(7644)), // Armadyl godsword
    1215i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, Some(1062)), // Dragon dagger
    5698i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, Some(1062)), // Dragon dagger(p++)
    22622i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, Some(7515)), // Vesta's longsword
    13576i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, Some(1378)), // Dragon warhammer
    21003i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, None), // Elder maul
    22324i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, None), // Ghrazi rapier
    4151i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeStandard, None), // Abyssal whip
    // Specials that land a tick after the swing
    11838i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeDelayed, Some(1132)), // Saradomin sword
    27690i32 => WeaponInfo::new(Melee, MeleeStandard, MeleeDelayed, Some(11275)), // Voidwaker

    // ═══════════════════════════════════════════════════════════════════════════
    // Ranged
    // ═══════════════════════════════════════════════════════════════════════════
    11785i32 => WeaponInfo::new(Ranged, RangedStandard, CloseRange, Some(4230)), // Armadyl crossbow
    21902i32 => WeaponInfo::new(Ranged, RangedStandard, CloseRange, Some(4230)), // Dragon crossbow
    19481i32 => WeaponInfo::new(Ranged, RangedStandard, Fixed(3), Some(7222)), // Heavy ballista
    19478i32 => WeaponInfo::new(Ranged, RangedStandard, Fixed(3), Some(7222)), // Light ballista
    20997i32 => WeaponInfo::new(Ranged, RangedStandard, RangedStandard, None), // Twisted bow
    12926i32 => WeaponInfo::new(Ranged, RangedThrown, Fixed(2), Some(5061)), // Toxic blowpipe
    22804i32 => WeaponInfo::new(Ranged, RangedThrown, CloseRange, Some(8291)), // Dragon knife
    22812i32 => WeaponInfo::new(Ranged, RangedThrown, CloseRange, Some(8291)), // Dragon knife(p++)
    11230i32 => WeaponInfo::new(Ranged, RangedThrown, RangedThrown, None), // Dragon dart
    19484i32 => WeaponInfo::new(Ranged, RangedThrown, RangedThrown, None), // Dragon javelin

    // ═══════════════════════════════════════════════════════════════════════════
    // Magic
    // ═══════════════════════════════════════════════════════════════════════════
    24424i32 => WeaponInfo::new(Magic, MagicStandard, MagicEmpowered, Some(8532)), // Volatile nightmare staff
    24423i32 => WeaponInfo::new(Magic, MagicStandard, MagicStandard, None), // Harmonised nightmare staff
    22647i32 => WeaponInfo::new(Magic, MagicStandard, MagicStandard, None), // Zuriel's staff
    27665i32 => WeaponInfo::new(Magic, MagicStandard, Fixed(2), Some(9961)), // Accursed sceptre
    12904i32 => WeaponInfo::new(Magic, MagicStandard, MagicStandard, None), // Toxic staff of the dead
};

// ─────────────────────────────────────────────────────────────────────────────
// Name keyword fallback
// ─────────────────────────────────────────────────────────────────────────────

const MELEE_KEYWORDS: &[&str] = &[
    "scimitar", "sword", "dagger", "axe", "mace", "maul", "whip", "claws", "halberd", "spear",
    "hasta", "rapier", "hammer", "scythe", "bludgeon", "blade", "katana", "flail",
];

const RANGED_KEYWORDS: &[&str] = &[
    "bow", "ballista", "blowpipe", "dart", "knife", "javelin", "thrownaxe", "chinchompa",
];

const MAGIC_KEYWORDS: &[&str] = &["staff", "wand", "trident", "sceptre", "sanguinesti", "kodai"];

/// Keyword groups in scan order. A name matching several groups resolves to
/// the first group scanned.
const KEYWORD_GROUPS: [(AttackCategory, &[&str]); 3] = [
    (Melee, MELEE_KEYWORDS),
    (Ranged, RANGED_KEYWORDS),
    (Magic, MAGIC_KEYWORDS),
];

/// Classify a weapon by keywords in its display name (case-insensitive)
pub fn generic_category(weapon_name: &str) -> Option<AttackCategory> {
    if weapon_name.is_empty() {
        return None;
    }
    let name = weapon_name.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(category, _)| *category)
}
