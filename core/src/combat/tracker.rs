//! Per-opponent combat bookkeeping for the local player.
//!
//! Decides whether a hit the local player lands is unprovoked. An opponent
//! counts as having attacked first (an *attacker*) when either:
//! - they start interacting with the local player on the same tick they play
//!   an attack animation, or
//! - a hitsplat lands on the local player on the tick one of their queued
//!   attacks was expected to land.
//!
//! Opponents the local player hits first become *targets* with a
//! [`CombatStatus`]. An opponent is never both an attacker and a target.

use hashbrown::HashMap;
use tracing::debug;

use crate::context::{IStr, resolve};
use crate::game_data::{PVP_SKULL_DURATION, WeaponRef, is_excluded_animation};
use crate::signal_processor::{MarkSignal, MarkSource};

use super::{AttackCategory, CombatStatus, classify};

/// Ticks without a hitsplat before the local player is out of combat
pub const OUT_OF_COMBAT_TICKS: u32 = 17;

/// Which raw signal an opponent produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementSignal {
    Animation,
    Interaction,
}

/// Unpaired animation/interaction ticks for one opponent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpponentRecord {
    pub last_animation_tick: Option<u32>,
    pub last_interaction_tick: Option<u32>,
}

impl OpponentRecord {
    fn tick_of(&self, signal: EngagementSignal) -> Option<u32> {
        match signal {
            EngagementSignal::Animation => self.last_animation_tick,
            EngagementSignal::Interaction => self.last_interaction_tick,
        }
    }

    fn record(&mut self, signal: EngagementSignal, tick: u32) {
        match signal {
            EngagementSignal::Animation => self.last_animation_tick = Some(tick),
            EngagementSignal::Interaction => self.last_interaction_tick = Some(tick),
        }
    }
}

/// An opponent the local player has hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetEntry {
    pub last_hit_tick: u32,
    pub status: CombatStatus,
}

/// An attack animation waiting for its hitsplat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedHit {
    pub opponent: IStr,
    pub category: AttackCategory,
    pub tick: u32,
}

#[derive(Debug)]
pub struct CombatTracker {
    opponents: HashMap<IStr, OpponentRecord>,
    /// Opponent -> tick of their most recent attack on the local player
    attackers: HashMap<IStr, u32>,
    targets: HashMap<IStr, TargetEntry>,
    expected_hits: Vec<ExpectedHit>,
    last_hitsplat_tick: Option<u32>,
    pvp_detection: bool,
}

impl Default for CombatTracker {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CombatTracker {
    pub fn new(pvp_detection: bool) -> Self {
        Self {
            opponents: HashMap::new(),
            attackers: HashMap::new(),
            targets: HashMap::new(),
            expected_hits: Vec::new(),
            last_hitsplat_tick: None,
            pvp_detection,
        }
    }

    /// Toggle whether unprovoked hits start a timer. Targets are still recorded.
    pub fn set_pvp_detection(&mut self, enabled: bool) {
        self.pvp_detection = enabled;
    }

    // ─── Queries ────────────────────────────────────────────────────────────

    pub fn attacker_tick(&self, opponent: IStr) -> Option<u32> {
        self.attackers.get(&opponent).copied()
    }

    pub fn target(&self, opponent: IStr) -> Option<&TargetEntry> {
        self.targets.get(&opponent)
    }

    pub fn target_status(&self, opponent: IStr) -> Option<CombatStatus> {
        self.targets.get(&opponent).map(|t| t.status)
    }

    pub fn opponent_record(&self, opponent: IStr) -> Option<&OpponentRecord> {
        self.opponents.get(&opponent)
    }

    pub fn expected_hits(&self) -> &[ExpectedHit] {
        &self.expected_hits
    }

    pub fn last_hitsplat_tick(&self) -> Option<u32> {
        self.last_hitsplat_tick
    }

    /// True if no hitsplat landed in the last [`OUT_OF_COMBAT_TICKS`] ticks
    pub fn is_out_of_combat(&self, current_tick: u32) -> bool {
        match self.last_hitsplat_tick {
            None => true,
            Some(last) => current_tick.saturating_sub(last) >= OUT_OF_COMBAT_TICKS,
        }
    }

    // ─── Opponent signals ───────────────────────────────────────────────────

    /// Record an animation or an interaction aimed at the local player.
    ///
    /// Both signals on the same tick promote the opponent to attacker.
    pub fn on_animation_or_interaction_change(
        &mut self,
        opponent: IStr,
        tick: u32,
        signal: EngagementSignal,
    ) {
        if self.targets.contains_key(&opponent) {
            return;
        }

        if let Some(attack_tick) = self.attackers.get_mut(&opponent) {
            *attack_tick = tick;
            return;
        }

        let record = self.opponents.entry(opponent).or_default();
        let opposite = match signal {
            EngagementSignal::Animation => EngagementSignal::Interaction,
            EngagementSignal::Interaction => EngagementSignal::Animation,
        };

        if record.tick_of(opposite) == Some(tick) {
            self.opponents.remove(&opponent);
            self.attackers.insert(opponent, tick);
            debug!(opponent = resolve(opponent), tick, "Opponent engaged local player");
            return;
        }

        record.record(signal, tick);
    }

    /// An opponent's interaction target changed.
    ///
    /// Targeting the local player records an interaction. Turning away
    /// from the local player releases the pending interaction tick.
    pub fn on_player_interaction_change(
        &mut self,
        opponent: IStr,
        targets_local_player: bool,
        tick: u32,
    ) {
        if targets_local_player {
            self.on_animation_or_interaction_change(opponent, tick, EngagementSignal::Interaction);
        } else if let Some(record) = self.opponents.get_mut(&opponent) {
            record.last_interaction_tick = None;
        }
    }

    /// An opponent played an animation `distance` tiles from the local player.
    ///
    /// Attacks are queued so the next hitsplat on the local player can be
    /// attributed to them.
    pub fn on_opponent_animation(
        &mut self,
        opponent: IStr,
        animation: i32,
        weapon: Option<&WeaponRef>,
        distance: u32,
        tick: u32,
    ) {
        if is_excluded_animation(animation) {
            return;
        }

        if let Some(attack) = classify(weapon, animation) {
            let hit_tick = tick.saturating_add(attack.delay.ticks(distance));
            debug!(
                opponent = resolve(opponent),
                animation,
                category = ?attack.category,
                hit_tick,
                "Expecting hit"
            );
            self.expected_hits.push(ExpectedHit {
                opponent,
                category: attack.category,
                tick: hit_tick,
            });
        }

        self.on_animation_or_interaction_change(opponent, tick, EngagementSignal::Animation);
    }

    // ─── Hitsplats ──────────────────────────────────────────────────────────

    /// A hitsplat landed on the local player.
    ///
    /// Attacks expected on this tick are attributed to their opponents;
    /// every queued attack due by now is consumed.
    pub fn on_local_hitsplat(&mut self, tick: u32) {
        self.last_hitsplat_tick = Some(tick);

        let (due, pending): (Vec<_>, Vec<_>) =
            self.expected_hits.drain(..).partition(|hit| hit.tick <= tick);
        self.expected_hits = pending;

        for hit in due.into_iter().filter(|hit| hit.tick == tick) {
            self.attribute_hit(hit.opponent, tick);
        }
    }

    fn attribute_hit(&mut self, opponent: IStr, tick: u32) {
        if let Some(target) = self.targets.get_mut(&opponent) {
            target.status = target.status.on_retaliation();
            return;
        }

        self.opponents.remove(&opponent);
        self.attackers.insert(opponent, tick);
        debug!(opponent = resolve(opponent), tick, "Hit attributed to attacker");
    }

    /// The local player landed a hit on `opponent`.
    ///
    /// Returns the timer request the hit warrants, if any.
    pub fn on_target_hitsplat(
        &mut self,
        opponent: Option<IStr>,
        local_player: IStr,
        tick: u32,
        local_player_marked: bool,
    ) -> Option<MarkSignal> {
        let opponent = opponent?;
        if opponent == local_player {
            return None;
        }

        self.last_hitsplat_tick = Some(tick);

        if self.attackers.contains_key(&opponent) {
            return None;
        }

        let Some(target) = self.targets.get_mut(&opponent) else {
            self.opponents.remove(&opponent);
            self.targets.insert(
                opponent,
                TargetEntry {
                    last_hit_tick: tick,
                    status: CombatStatus::Default,
                },
            );
            debug!(opponent = resolve(opponent), tick, "Unprovoked attack");
            return self.pvp_signal(false);
        };

        let previous = target.status;
        target.last_hit_tick = tick;

        if previous.is_ambiguous() {
            target.status = previous.on_resumed();
            return if local_player_marked {
                self.pvp_signal(true)
            } else {
                None
            };
        }

        if previous.is_ended() {
            target.status = CombatStatus::Default;
            debug!(opponent = resolve(opponent), ?previous, tick, "New engagement");
            return self.pvp_signal(false);
        }

        None
    }

    fn pvp_signal(&self, extend: bool) -> Option<MarkSignal> {
        self.pvp_detection.then_some(MarkSignal::Start {
            source: MarkSource::Pvp,
            duration: PVP_SKULL_DURATION,
            extend,
        })
    }

    // ─── Opponent lifecycle ─────────────────────────────────────────────────

    /// Opponent left view. `logged_out` marks a despawn known to be a logout.
    pub fn on_opponent_despawn(&mut self, opponent: IStr, logged_out: bool) {
        self.opponents.remove(&opponent);
        if let Some(target) = self.targets.get_mut(&opponent) {
            target.status = if logged_out {
                target.status.on_logout()
            } else {
                target.status.on_despawn()
            };
        }
    }

    pub fn on_opponent_death(&mut self, opponent: IStr) {
        self.opponents.remove(&opponent);
        if let Some(target) = self.targets.get_mut(&opponent) {
            target.status = target.status.on_death();
        }
    }

    /// Per-tick housekeeping: drop attacks whose hit tick has passed, and
    /// unpaired signals once out of combat.
    pub fn on_tick(&mut self, tick: u32) {
        self.expected_hits.retain(|hit| hit.tick >= tick);
        if self.is_out_of_combat(tick) {
            self.opponents.clear();
        }
    }

    /// Forget everything. Called on logout, world hop and local death.
    pub fn cleanup_records(&mut self) {
        self.opponents.clear();
        self.attackers.clear();
        self.targets.clear();
        self.expected_hits.clear();
        self.last_hitsplat_tick = None;
    }
}
