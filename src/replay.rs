//! Drives a [`SkullSession`] from a parsed event script.
//!
//! Game time is derived from the script's tick counter, so a replay is
//! deterministic for a given start time.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::warn;

use skulltimer_core::game_data::TICK_DURATION;
use skulltimer_core::{GameEvent, MarkSource, SkullSession};

use crate::script::ScriptCommand;

/// Slots in the worn-equipment container
const EQUIPMENT_SLOTS: usize = 14;

/// Timer state after a command, reported when it differs from the last one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub tick: u32,
    pub source: Option<MarkSource>,
    pub remaining: Option<Duration>,
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.source, self.remaining) {
            (Some(source), Some(remaining)) => {
                let secs = remaining.as_secs();
                write!(
                    f,
                    "[tick {:>5}] skulled ({:?}) {:02}:{:02}",
                    self.tick,
                    source,
                    secs / 60,
                    secs % 60
                )
            }
            _ => write!(f, "[tick {:>5}] no skull", self.tick),
        }
    }
}

pub struct Replay {
    session: SkullSession,
    start: NaiveDateTime,
    tick: u32,
    local_player: Option<String>,
    equipment: Vec<Option<i32>>,
    /// Source and expiry of the last reported timer
    shown: Option<(MarkSource, NaiveDateTime)>,
}

impl Replay {
    pub fn new(session: SkullSession, start: NaiveDateTime) -> Self {
        Self {
            session,
            start,
            tick: 0,
            local_player: None,
            equipment: vec![None; EQUIPMENT_SLOTS],
            shown: None,
        }
    }

    pub fn session(&self) -> &SkullSession {
        &self.session
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Game time at the current tick
    pub fn now(&self) -> NaiveDateTime {
        let millis = i64::from(self.tick) * TICK_DURATION.as_millis() as i64;
        self.start + chrono::Duration::milliseconds(millis)
    }

    /// Apply one command. Returns the countdown if the timer changed.
    pub fn apply(&mut self, command: &ScriptCommand) -> Option<Countdown> {
        if let Some(event) = self.event_for(command) {
            let now = self.now();
            self.session.handle(&event, now);
        }
        self.countdown_change()
    }

    fn countdown_change(&mut self) -> Option<Countdown> {
        let now = self.now();
        let current = self
            .session
            .active_timer()
            .map(|timer| (timer.source, timer.expires_at));
        if current == self.shown {
            return None;
        }
        self.shown = current;

        Some(Countdown {
            tick: self.tick,
            source: current.map(|(source, _)| source),
            remaining: self.session.remaining(now),
        })
    }

    fn event_for(&mut self, command: &ScriptCommand) -> Option<GameEvent> {
        let tick = self.tick;
        let event = match command {
            ScriptCommand::Tick { tick, position } => {
                if *tick < self.tick {
                    warn!(tick, current = self.tick, "Tick went backwards, ignoring");
                    return None;
                }
                self.tick = *tick;
                GameEvent::GameTick {
                    tick: *tick,
                    position: *position,
                }
            }
            ScriptCommand::HitOut { target } => GameEvent::Hitsplat {
                target: target.clone(),
                by_local_player: true,
                tick,
            },
            ScriptCommand::HitIn => GameEvent::Hitsplat {
                target: self.local_name()?,
                by_local_player: false,
                tick,
            },
            ScriptCommand::Anim {
                actor,
                animation,
                position,
                weapon,
            } => GameEvent::AnimationChanged {
                actor: actor.clone(),
                animation: *animation,
                weapon: weapon.clone(),
                position: *position,
                tick,
            },
            ScriptCommand::Interact { source, target } => GameEvent::InteractionChanged {
                source: source.clone(),
                target: target.clone(),
                tick,
            },
            ScriptCommand::Despawn { actor, logged_out } => GameEvent::ActorDespawned {
                actor: actor.clone(),
                logged_out: *logged_out,
            },
            ScriptCommand::Death { actor } => GameEvent::ActorDied {
                actor: actor.clone(),
            },
            ScriptCommand::Equip { slot, item } => {
                let Some(current) = self.equipment.get_mut(*slot) else {
                    warn!(slot, "No such equipment slot");
                    return None;
                };
                *current = *item;
                GameEvent::EquipmentChanged {
                    changed_slots: vec![*slot],
                    items: self.equipment.clone(),
                }
            }
            ScriptCommand::Teleport => GameEvent::Teleported,
            ScriptCommand::Chat { message } => GameEvent::ChatMessage {
                message: message.clone(),
            },
            ScriptCommand::Login { name, position } => {
                self.local_player = Some(name.clone());
                GameEvent::LoggedIn {
                    local_player: name.clone(),
                    position: *position,
                    equipment: self.equipment.clone(),
                }
            }
            ScriptCommand::Logout => {
                self.local_player = None;
                GameEvent::LoggedOut
            }
            ScriptCommand::Hop => {
                self.local_player = None;
                GameEvent::WorldHopped
            }
            ScriptCommand::Died => GameEvent::ActorDied {
                actor: self.local_name()?,
            },
        };
        Some(event)
    }

    fn local_name(&self) -> Option<String> {
        if self.local_player.is_none() {
            warn!(tick = self.tick, "Command needs a logged in player");
        }
        self.local_player.clone()
    }
}
