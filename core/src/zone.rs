//! Hazardous zone detection
//!
//! Teleporting into the hazardous zone skulls the player. Walking in does
//! not, so a teleport must have been seen since the last location check.

use tracing::debug;

use crate::game_data::{HAZARD_ZONE, WorldPoint, ZoneBounds};

#[derive(Debug)]
pub struct ZoneMarkDetector {
    bounds: ZoneBounds,
    /// One-shot flag set by the teleport signal
    teleported: bool,
}

impl Default for ZoneMarkDetector {
    fn default() -> Self {
        Self::new(HAZARD_ZONE)
    }
}

impl ZoneMarkDetector {
    pub fn new(bounds: ZoneBounds) -> Self {
        Self {
            bounds,
            teleported: false,
        }
    }

    pub fn on_teleport(&mut self) {
        self.teleported = true;
    }

    pub fn contains(&self, position: &WorldPoint) -> bool {
        self.bounds.contains(position)
    }

    /// Returns true if the player was just teleported into the zone.
    /// The teleport flag is consumed by every check.
    pub fn check_location(&mut self, position: &WorldPoint) -> bool {
        let teleported = std::mem::take(&mut self.teleported);
        let granted = teleported && self.bounds.contains(position);
        if granted {
            debug!(x = position.x, y = position.y, "Teleported into hazardous zone");
        }
        granted
    }

    /// Forget a pending teleport (logout, world hop)
    pub fn reset(&mut self) {
        self.teleported = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSIDE: WorldPoint = WorldPoint::new(3040, 4830, 0);
    const OUTSIDE: WorldPoint = WorldPoint::new(3094, 3491, 0);

    #[test]
    fn walking_in_never_fires() {
        let mut zone = ZoneMarkDetector::default();
        assert!(!zone.check_location(&INSIDE));
        assert!(!zone.check_location(&INSIDE));
    }

    #[test]
    fn teleport_in_fires_once() {
        let mut zone = ZoneMarkDetector::default();
        zone.on_teleport();
        assert!(zone.check_location(&INSIDE));
        assert!(!zone.check_location(&INSIDE));
    }

    #[test]
    fn teleport_elsewhere_consumes_flag() {
        let mut zone = ZoneMarkDetector::default();
        zone.on_teleport();
        assert!(!zone.check_location(&OUTSIDE));
        // Walking in afterwards does not count
        assert!(!zone.check_location(&INSIDE));
    }

    #[test]
    fn wrong_plane_does_not_fire() {
        let mut zone = ZoneMarkDetector::default();
        zone.on_teleport();
        assert!(!zone.check_location(&WorldPoint::new(3040, 4830, 1)));
    }
}
