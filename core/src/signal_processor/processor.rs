use tracing::{debug, info};

use skulltimer_types::SkullTimerConfig;

use crate::combat::CombatTracker;
use crate::context::{IStr, intern};
use crate::equipment::EquipmentMarkDetector;
use crate::game_data::{WorldPoint, ZONE_SKULL_DURATION, chat_skull_duration};
use crate::zone::ZoneMarkDetector;

use super::event::GameEvent;
use super::signal::{MarkSignal, MarkSource};

/// Which skull sources may start a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Detection {
    equipment: bool,
    zone: bool,
    chat: bool,
}

impl Default for Detection {
    fn default() -> Self {
        Self {
            equipment: true,
            zone: true,
            chat: true,
        }
    }
}

/// Routes raw game events through the combat tracker and the equipment and
/// zone detectors, and returns the timer decisions they make.
///
/// Owns all per-session tracking state; the timer itself lives elsewhere.
#[derive(Debug, Default)]
pub struct EventProcessor {
    local_player: Option<IStr>,
    local_position: Option<WorldPoint>,
    combat: CombatTracker,
    equipment: EquipmentMarkDetector,
    zone: ZoneMarkDetector,
    detection: Detection,
}

/// Interned key for an actor name. Empty names are unidentified.
fn actor_key(name: &str) -> Option<IStr> {
    (!name.is_empty()).then(|| intern(name))
}

impl EventProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &SkullTimerConfig) -> Self {
        let mut processor = Self::new();
        processor.apply_config(config);
        processor
    }

    /// Apply detection toggles. Safe to call mid-session.
    pub fn apply_config(&mut self, config: &SkullTimerConfig) {
        self.combat.set_pvp_detection(config.pvp_detection);
        self.detection = Detection {
            equipment: config.equipment_detection,
            zone: config.zone_detection,
            chat: config.chat_detection,
        };
    }

    pub fn combat(&self) -> &CombatTracker {
        &self.combat
    }

    pub fn equipment(&self) -> &EquipmentMarkDetector {
        &self.equipment
    }

    pub fn local_player(&self) -> Option<IStr> {
        self.local_player
    }

    /// Process an incoming event.
    ///
    /// `local_player_marked` tells the combat tracker whether the local
    /// player currently bears a skull.
    pub fn process_event(
        &mut self,
        event: &GameEvent,
        local_player_marked: bool,
    ) -> Vec<MarkSignal> {
        let mut signals = Vec::new();

        match event {
            GameEvent::GameTick { tick, position } => {
                self.combat.on_tick(*tick);
                if let Some(position) = position {
                    self.local_position = Some(*position);
                    // The teleport flag is consumed even when zone detection is off
                    if self.zone.check_location(position) && self.detection.zone {
                        signals.push(MarkSignal::Start {
                            source: MarkSource::Zone,
                            duration: ZONE_SKULL_DURATION,
                            extend: false,
                        });
                    }
                }
            }

            GameEvent::Hitsplat {
                target,
                by_local_player,
                tick,
            } => {
                let Some(local) = self.local_player else {
                    return signals;
                };
                let target = actor_key(target);
                if *by_local_player {
                    signals.extend(self.combat.on_target_hitsplat(
                        target,
                        local,
                        *tick,
                        local_player_marked,
                    ));
                } else if target == Some(local) {
                    self.combat.on_local_hitsplat(*tick);
                }
            }

            GameEvent::AnimationChanged {
                actor,
                animation,
                weapon,
                position,
                tick,
            } => {
                if let Some(actor) = self.opponent_key(actor) {
                    let distance = self
                        .local_position
                        .map(|local| local.distance_to(position))
                        .unwrap_or(0);
                    self.combat.on_opponent_animation(
                        actor,
                        *animation,
                        weapon.as_ref(),
                        distance,
                        *tick,
                    );
                }
            }

            GameEvent::InteractionChanged {
                source,
                target,
                tick,
            } => {
                if let Some(source) = self.opponent_key(source) {
                    let targets_local = target
                        .as_deref()
                        .and_then(actor_key)
                        .is_some_and(|t| Some(t) == self.local_player);
                    self.combat
                        .on_player_interaction_change(source, targets_local, *tick);
                }
            }

            GameEvent::ActorDespawned { actor, logged_out } => {
                if let Some(actor) = self.opponent_key(actor) {
                    self.combat.on_opponent_despawn(actor, *logged_out);
                }
            }

            GameEvent::ActorDied { actor } => {
                let actor = actor_key(actor);
                if actor.is_some() && actor == self.local_player {
                    info!("Local player died");
                    self.reset_tracking();
                    signals.push(MarkSignal::Stop { persist: false });
                } else if let Some(actor) = actor {
                    self.combat.on_opponent_death(actor);
                }
            }

            GameEvent::EquipmentChanged {
                changed_slots,
                items,
            } => {
                let decision = self.equipment.on_equipment_changed(changed_slots, items);
                if self.detection.equipment {
                    signals.extend(decision);
                }
            }

            GameEvent::Teleported => self.zone.on_teleport(),

            GameEvent::ChatMessage { message } => {
                if self.detection.chat
                    && let Some(duration) = chat_skull_duration(message)
                {
                    debug!(message = message.as_str(), "Skull granted by NPC");
                    signals.push(MarkSignal::Start {
                        source: MarkSource::Chat,
                        duration,
                        extend: false,
                    });
                }
            }

            GameEvent::LoggedIn {
                local_player,
                position,
                equipment,
            } => {
                self.reset_tracking();
                self.local_player = actor_key(local_player);
                self.local_position = *position;
                self.equipment.reset(equipment);

                // The zone and indefinite items replace the saved countdown
                let in_zone = position.is_some_and(|p| self.zone.contains(&p));
                if self.equipment.wears_indefinite() {
                    debug!("Indefinite skull item worn at login, not restoring");
                } else if in_zone && self.detection.zone {
                    debug!("Logged in inside the hazardous zone");
                    signals.push(MarkSignal::Start {
                        source: MarkSource::Zone,
                        duration: ZONE_SKULL_DURATION,
                        extend: false,
                    });
                } else {
                    signals.push(MarkSignal::Restore);
                }
            }

            GameEvent::LoggedOut | GameEvent::WorldHopped => {
                info!(?event, "Leaving world");
                self.reset_tracking();
                self.local_player = None;
                signals.push(MarkSignal::Stop { persist: true });
            }
        }

        signals
    }

    /// Key for an actor other than the local player
    fn opponent_key(&self, name: &str) -> Option<IStr> {
        self.local_player?;
        actor_key(name).filter(|key| Some(*key) != self.local_player)
    }

    fn reset_tracking(&mut self) {
        self.combat.cleanup_records();
        self.zone.reset();
    }
}
