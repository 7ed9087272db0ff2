//! Tests for CombatTracker attribution and target state
//!
//! Verifies that:
//! - Unprovoked hits request a PvP timer exactly once
//! - Same-tick animation + interaction promotes an opponent to attacker
//! - Expected hits are matched to hitsplats on the local player
//! - Despawn/death/logout drive the target status machine

use std::time::Duration;

use crate::context::{IStr, intern};
use crate::game_data::{PVP_SKULL_DURATION, WeaponRef};
use crate::signal_processor::{MarkSignal, MarkSource};

use super::{CombatStatus, CombatTracker, EngagementSignal, OUT_OF_COMBAT_TICKS};

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn me() -> IStr {
    intern("Local Player")
}

fn pvp(extend: bool) -> Option<MarkSignal> {
    Some(MarkSignal::Start {
        source: MarkSource::Pvp,
        duration: PVP_SKULL_DURATION,
        extend,
    })
}

/// Assert the attacker/target exclusivity invariant for `opponent`
fn assert_exclusive(tracker: &CombatTracker, opponent: IStr) {
    assert!(
        !(tracker.attacker_tick(opponent).is_some() && tracker.target(opponent).is_some()),
        "opponent is both attacker and target"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Unprovoked hits
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_fresh_target_triggers_pvp_timer_once() {
    let mut tracker = CombatTracker::default();
    let bob = intern("Bob");

    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 10, false), pvp(false));
    assert_eq!(tracker.target_status(bob), Some(CombatStatus::Default));

    // Continued hits on the same target do nothing
    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 12, true), None);
    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 14, true), None);
    assert_eq!(tracker.target(bob).unwrap().last_hit_tick, 14);
}

#[test]
fn test_unset_or_self_opponent_is_noop() {
    let mut tracker = CombatTracker::default();
    assert_eq!(tracker.on_target_hitsplat(None, me(), 10, false), None);
    assert_eq!(tracker.on_target_hitsplat(Some(me()), me(), 10, false), None);
    assert_eq!(tracker.target(me()), None);
    assert_eq!(tracker.last_hitsplat_tick(), None);
}

#[test]
fn test_hitting_attacker_does_not_trigger() {
    let mut tracker = CombatTracker::default();
    let pker = intern("Pker");

    tracker.on_animation_or_interaction_change(pker, 5, EngagementSignal::Interaction);
    tracker.on_animation_or_interaction_change(pker, 5, EngagementSignal::Animation);
    assert_eq!(tracker.attacker_tick(pker), Some(5));

    assert_eq!(tracker.on_target_hitsplat(Some(pker), me(), 6, false), None);
    assert_eq!(tracker.target(pker), None);
    assert_exclusive(&tracker, pker);
}

#[test]
fn test_pvp_detection_disabled_still_records_target() {
    let mut tracker = CombatTracker::new(false);
    let bob = intern("Bob");

    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 10, false), None);
    assert_eq!(tracker.target_status(bob), Some(CombatStatus::Default));

    // Re-enabled mid-session: Bob is already a target, no retroactive timer
    tracker.set_pvp_detection(true);
    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 11, false), None);

    let alice = intern("Alice");
    assert_eq!(tracker.on_target_hitsplat(Some(alice), me(), 12, false), pvp(false));
}

// ═══════════════════════════════════════════════════════════════════════════
// Retaliation tie-break
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_same_tick_signals_promote_to_attacker() {
    let mut tracker = CombatTracker::default();
    let pker = intern("Same Tick");

    tracker.on_animation_or_interaction_change(pker, 20, EngagementSignal::Interaction);
    assert_eq!(tracker.attacker_tick(pker), None);
    tracker.on_animation_or_interaction_change(pker, 20, EngagementSignal::Animation);

    assert_eq!(tracker.attacker_tick(pker), Some(20));
    assert!(tracker.opponent_record(pker).is_none());
}

#[test]
fn test_different_tick_signals_do_not_promote() {
    let mut tracker = CombatTracker::default();
    let walker = intern("Walker");

    tracker.on_animation_or_interaction_change(walker, 20, EngagementSignal::Interaction);
    tracker.on_animation_or_interaction_change(walker, 21, EngagementSignal::Animation);

    assert_eq!(tracker.attacker_tick(walker), None);
    let record = tracker.opponent_record(walker).unwrap();
    assert_eq!(record.last_interaction_tick, Some(20));
    assert_eq!(record.last_animation_tick, Some(21));

    // So hitting them is unprovoked
    assert_eq!(tracker.on_target_hitsplat(Some(walker), me(), 22, false), pvp(false));
    assert_exclusive(&tracker, walker);
}

#[test]
fn test_attacker_refreshed_by_later_signals() {
    let mut tracker = CombatTracker::default();
    let pker = intern("Refresher");

    tracker.on_animation_or_interaction_change(pker, 1, EngagementSignal::Animation);
    tracker.on_animation_or_interaction_change(pker, 1, EngagementSignal::Interaction);
    tracker.on_animation_or_interaction_change(pker, 9, EngagementSignal::Animation);

    assert_eq!(tracker.attacker_tick(pker), Some(9));
}

#[test]
fn test_signals_ignored_for_existing_target() {
    let mut tracker = CombatTracker::default();
    let bob = intern("Target Bob");

    tracker.on_target_hitsplat(Some(bob), me(), 3, false);
    tracker.on_animation_or_interaction_change(bob, 4, EngagementSignal::Interaction);
    tracker.on_animation_or_interaction_change(bob, 4, EngagementSignal::Animation);

    assert_eq!(tracker.attacker_tick(bob), None);
    assert!(tracker.opponent_record(bob).is_none());
    assert_exclusive(&tracker, bob);
}

#[test]
fn test_interaction_release_clears_pending_tick() {
    let mut tracker = CombatTracker::default();
    let fickle = intern("Fickle");

    tracker.on_player_interaction_change(fickle, true, 30);
    tracker.on_player_interaction_change(fickle, false, 30);
    tracker.on_animation_or_interaction_change(fickle, 30, EngagementSignal::Animation);

    assert_eq!(tracker.attacker_tick(fickle), None);
}

// ═══════════════════════════════════════════════════════════════════════════
// Expected hits
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_expected_hit_attributes_attacker() {
    let mut tracker = CombatTracker::default();
    let ranger = intern("Ranger");
    let bow = WeaponRef::new(20997, "Twisted bow");

    // Distance 6: 1 + (3 + 1) = 5 ticks
    tracker.on_opponent_animation(ranger, 426, Some(&bow), 6, 100);
    assert_eq!(tracker.expected_hits().len(), 1);
    assert_eq!(tracker.expected_hits()[0].tick, 105);

    tracker.on_local_hitsplat(104);
    assert_eq!(tracker.attacker_tick(ranger), None);
    assert_eq!(tracker.expected_hits().len(), 1);

    tracker.on_local_hitsplat(105);
    assert_eq!(tracker.attacker_tick(ranger), Some(105));
    assert!(tracker.expected_hits().is_empty());
}

#[test]
fn test_expected_hit_on_target_marks_retaliation() {
    let mut tracker = CombatTracker::default();
    let bob = intern("Retaliator");
    let claws = WeaponRef::new(13652, "Dragon claws");

    tracker.on_target_hitsplat(Some(bob), me(), 50, false);
    tracker.on_opponent_animation(bob, 7514, Some(&claws), 1, 51);
    tracker.on_local_hitsplat(51);

    assert_eq!(tracker.target_status(bob), Some(CombatStatus::Retaliated));
    assert_eq!(tracker.attacker_tick(bob), None);
}

#[test]
fn test_missed_expected_hit_is_discarded() {
    let mut tracker = CombatTracker::default();
    let mage = intern("Mage");

    // Ice barrage at distance 3: 1 + (1 + 1) = 3 ticks
    tracker.on_opponent_animation(mage, 1979, None, 3, 10);
    assert_eq!(tracker.expected_hits()[0].tick, 13);

    tracker.on_tick(13);
    assert_eq!(tracker.expected_hits().len(), 1);
    tracker.on_tick(14);
    assert!(tracker.expected_hits().is_empty());

    tracker.on_local_hitsplat(14);
    assert_eq!(tracker.attacker_tick(mage), None);
}

#[test]
fn test_excluded_animation_is_ignored() {
    let mut tracker = CombatTracker::default();
    let idle = intern("Idler");

    tracker.on_opponent_animation(idle, 424, None, 1, 10);
    assert!(tracker.expected_hits().is_empty());
    assert!(tracker.opponent_record(idle).is_none());
}

#[test]
fn test_unclassified_animation_still_records_signal() {
    let mut tracker = CombatTracker::default();
    let dancer = intern("Dancer");

    tracker.on_opponent_animation(dancer, 866, None, 1, 10);
    assert!(tracker.expected_hits().is_empty());
    assert_eq!(tracker.opponent_record(dancer).unwrap().last_animation_tick, Some(10));
}

// ═══════════════════════════════════════════════════════════════════════════
// Status machine
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_despawn_and_death_transitions() {
    let mut tracker = CombatTracker::default();
    let plain = intern("Plain");
    let angry = intern("Angry");
    let claws = WeaponRef::new(13652, "Dragon claws");

    tracker.on_target_hitsplat(Some(plain), me(), 1, false);
    tracker.on_target_hitsplat(Some(angry), me(), 1, false);
    tracker.on_opponent_animation(angry, 390, Some(&claws), 1, 2);
    tracker.on_local_hitsplat(2);
    assert_eq!(tracker.target_status(angry), Some(CombatStatus::Retaliated));

    tracker.on_opponent_despawn(plain, false);
    tracker.on_opponent_despawn(angry, false);
    assert_eq!(tracker.target_status(plain), Some(CombatStatus::Unknown));
    assert_eq!(tracker.target_status(angry), Some(CombatStatus::RetaliatedUnknown));

    tracker.on_opponent_death(plain);
    tracker.on_opponent_death(angry);
    assert_eq!(tracker.target_status(plain), Some(CombatStatus::Dead));
    assert_eq!(tracker.target_status(angry), Some(CombatStatus::Dead));
}

#[test]
fn test_unknown_target_rehit_extends_when_marked() {
    let mut tracker = CombatTracker::default();
    let bob = intern("Returner");

    tracker.on_target_hitsplat(Some(bob), me(), 1, false);
    tracker.on_opponent_despawn(bob, false);

    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 40, true), pvp(true));
    assert_eq!(tracker.target_status(bob), Some(CombatStatus::Default));
}

#[test]
fn test_unknown_target_rehit_without_mark_is_quiet() {
    let mut tracker = CombatTracker::default();
    let bob = intern("Quiet Returner");

    tracker.on_target_hitsplat(Some(bob), me(), 1, false);
    tracker.on_opponent_despawn(bob, false);

    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 40, false), None);
    assert_eq!(tracker.target_status(bob), Some(CombatStatus::Default));
}

#[test]
fn test_dead_target_rehit_is_new_engagement() {
    let mut tracker = CombatTracker::default();
    let bob = intern("Respawned");

    tracker.on_target_hitsplat(Some(bob), me(), 1, false);
    tracker.on_opponent_death(bob);

    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 200, true), pvp(false));
    assert_eq!(tracker.target_status(bob), Some(CombatStatus::Default));
}

#[test]
fn test_logged_out_target_rehit_is_new_engagement() {
    let mut tracker = CombatTracker::default();
    let bob = intern("Logger");

    tracker.on_target_hitsplat(Some(bob), me(), 1, false);
    tracker.on_opponent_despawn(bob, true);
    assert_eq!(tracker.target_status(bob), Some(CombatStatus::LoggedOut));

    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 90, false), pvp(false));
}

// ═══════════════════════════════════════════════════════════════════════════
// Combat window and cleanup
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_out_of_combat_window() {
    let mut tracker = CombatTracker::default();
    assert!(tracker.is_out_of_combat(0));

    tracker.on_local_hitsplat(100);
    assert!(!tracker.is_out_of_combat(100));
    assert!(!tracker.is_out_of_combat(100 + OUT_OF_COMBAT_TICKS - 1));
    assert!(tracker.is_out_of_combat(100 + OUT_OF_COMBAT_TICKS));

    // 17 ticks is roughly ten seconds
    let window = Duration::from_millis(600) * OUT_OF_COMBAT_TICKS;
    assert_eq!(window.as_millis(), 10_200);
}

#[test]
fn test_out_of_combat_tick_drops_unpaired_signals() {
    let mut tracker = CombatTracker::default();
    let lurker = intern("Lurker");

    tracker.on_animation_or_interaction_change(lurker, 3, EngagementSignal::Interaction);
    tracker.on_tick(4);
    assert!(tracker.opponent_record(lurker).is_none());
}

#[test]
fn test_cleanup_clears_everything() {
    let mut tracker = CombatTracker::default();
    let bob = intern("Cleanup Bob");
    let pker = intern("Cleanup Pker");

    tracker.on_target_hitsplat(Some(bob), me(), 1, false);
    tracker.on_animation_or_interaction_change(pker, 1, EngagementSignal::Animation);
    tracker.on_animation_or_interaction_change(pker, 1, EngagementSignal::Interaction);
    tracker.on_opponent_animation(pker, 1979, None, 1, 2);

    tracker.cleanup_records();

    assert_eq!(tracker.target(bob), None);
    assert_eq!(tracker.attacker_tick(pker), None);
    assert!(tracker.expected_hits().is_empty());
    assert!(tracker.is_out_of_combat(2));

    // After cleanup Bob is a fresh target again
    assert_eq!(tracker.on_target_hitsplat(Some(bob), me(), 5, false), pvp(false));
}

#[test]
fn test_expected_hit_tick_saturates() {
    let mut tracker = CombatTracker::default();
    let late = intern("Late Caster");

    tracker.on_opponent_animation(late, 1979, None, 30, u32::MAX - 1);

    assert_eq!(tracker.expected_hits().len(), 1);
    assert_eq!(tracker.expected_hits()[0].tick, u32::MAX);
}
