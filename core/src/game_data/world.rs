//! World coordinates and the hazardous zone bounding volume.

use serde::{Deserialize, Serialize};

/// A tile in the game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldPoint {
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Straight-line distance to `other` in whole tiles (floored).
    ///
    /// Plane is ignored.
    pub fn distance_to(&self, other: &WorldPoint) -> u32 {
        let dx = f64::from(self.x.abs_diff(other.x));
        let dy = f64::from(self.y.abs_diff(other.y));
        (dx * dx + dy * dy).sqrt().floor() as u32
    }
}

/// Axis-aligned box in tile coordinates, inclusive on both ends, on one plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub plane: i32,
}

impl ZoneBounds {
    pub fn contains(&self, point: &WorldPoint) -> bool {
        point.plane == self.plane
            && (self.min_x..=self.max_x).contains(&point.x)
            && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// The Abyss. Being teleported in by the Mage of Zamorak skulls the player.
pub const HAZARD_ZONE: ZoneBounds = ZoneBounds {
    min_x: 3008,
    max_x: 3071,
    min_y: 4800,
    max_y: 4863,
    plane: 0,
};
