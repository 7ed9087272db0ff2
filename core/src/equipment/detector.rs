use tracing::debug;

use crate::game_data::{EQUIPMENT_SKULL_DURATION, SkullGrant, WATCHED_SLOTS, skull_grant};
use crate::signal_processor::{MarkSignal, MarkSource};

/// Last-seen contents of the watched slots, used to compute deltas.
#[derive(Debug, Default)]
pub struct EquipmentMarkDetector {
    /// Indexed like `WATCHED_SLOTS`
    slots: [Option<i32>; WATCHED_SLOTS.len()],
}

fn watched_index(slot: usize) -> Option<usize> {
    WATCHED_SLOTS.iter().position(|s| *s == slot)
}

fn finite_signal() -> MarkSignal {
    MarkSignal::Start {
        source: MarkSource::Equipment,
        duration: EQUIPMENT_SKULL_DURATION,
        extend: false,
    }
}

impl EquipmentMarkDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item last seen in a watched container slot
    pub fn item_in(&self, slot: usize) -> Option<i32> {
        watched_index(slot).and_then(|i| self.slots[i])
    }

    /// Whether any watched slot holds an indefinite skull item
    pub fn wears_indefinite(&self) -> bool {
        self.slots
            .iter()
            .any(|item| skull_grant(*item) == SkullGrant::Indefinite)
    }

    /// Take a snapshot of `items` without emitting anything (login)
    pub fn reset(&mut self, items: &[Option<i32>]) {
        for (i, slot) in WATCHED_SLOTS.iter().enumerate() {
            self.slots[i] = items.get(*slot).copied().flatten();
        }
    }

    /// Equipment changed.
    ///
    /// Changed slots are checked in the given order; the first that warrants
    /// a decision wins. Slot state is refreshed to `items` afterwards either way.
    pub fn on_equipment_changed(
        &mut self,
        changed_slots: &[usize],
        items: &[Option<i32>],
    ) -> Option<MarkSignal> {
        let current_of = |slot: usize| items.get(slot).copied().flatten();
        let indefinite_worn = WATCHED_SLOTS
            .iter()
            .any(|slot| skull_grant(current_of(*slot)) == SkullGrant::Indefinite);

        let mut decision = None;
        for slot in changed_slots {
            let Some(index) = watched_index(*slot) else {
                continue;
            };
            let previous = skull_grant(self.slots[index]);
            let current = skull_grant(current_of(*slot));

            if current == SkullGrant::Indefinite {
                debug!(slot, "Indefinite skull item equipped");
                decision = Some(MarkSignal::Stop { persist: false });
                break;
            }
            if previous == SkullGrant::Indefinite && !indefinite_worn {
                debug!(slot, "Indefinite skull item removed");
                decision = Some(finite_signal());
                break;
            }
            if current == SkullGrant::Finite && !indefinite_worn {
                debug!(slot, "Finite skull item equipped");
                decision = Some(finite_signal());
                break;
            }
        }

        self.reset(items);
        decision
    }
}
