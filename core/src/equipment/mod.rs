//! Skull-granting equipment detection
//!
//! Watches the cape and amulet slots. Wearing an indefinite skull item keeps
//! the player skulled with no countdown; removing it, or wearing a finite
//! skull item, starts the equipment countdown.

mod detector;

pub use detector::EquipmentMarkDetector;
