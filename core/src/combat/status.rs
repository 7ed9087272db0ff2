//! Combat status of an opponent the local player has hit.

use serde::{Deserialize, Serialize};

/// Lifecycle of a target entry.
///
/// `Retaliated*` states are only reachable through `Retaliated`.
/// `LoggedOut*` states are only reachable by a despawn flagged as a logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CombatStatus {
    #[default]
    Default,
    /// The target hit the local player back
    Retaliated,
    Dead,
    /// Despawned without dying; may still be around
    Unknown,
    RetaliatedUnknown,
    LoggedOut,
    RetaliatedLoggedOut,
}

impl CombatStatus {
    fn is_retaliated(self) -> bool {
        matches!(
            self,
            CombatStatus::Retaliated
                | CombatStatus::RetaliatedUnknown
                | CombatStatus::RetaliatedLoggedOut
        )
    }

    /// Target left view without dying
    pub fn on_despawn(self) -> Self {
        match self {
            CombatStatus::Dead | CombatStatus::LoggedOut | CombatStatus::RetaliatedLoggedOut => {
                self
            }
            CombatStatus::Retaliated => CombatStatus::RetaliatedUnknown,
            CombatStatus::RetaliatedUnknown => self,
            CombatStatus::Default | CombatStatus::Unknown => CombatStatus::Unknown,
        }
    }

    /// Target logged out
    pub fn on_logout(self) -> Self {
        match self {
            CombatStatus::Dead => self,
            s if s.is_retaliated() => CombatStatus::RetaliatedLoggedOut,
            _ => CombatStatus::LoggedOut,
        }
    }

    pub fn on_death(self) -> Self {
        CombatStatus::Dead
    }

    /// Target's attack landed on the local player
    pub fn on_retaliation(self) -> Self {
        match self {
            CombatStatus::Default => CombatStatus::Retaliated,
            _ => self,
        }
    }

    /// Target seen again after an ambiguous despawn
    pub fn on_resumed(self) -> Self {
        match self {
            CombatStatus::Unknown => CombatStatus::Default,
            CombatStatus::RetaliatedUnknown => CombatStatus::Retaliated,
            _ => self,
        }
    }

    /// Despawned and may come back with their combat history intact
    pub fn is_ambiguous(self) -> bool {
        matches!(self, CombatStatus::Unknown | CombatStatus::RetaliatedUnknown)
    }

    /// Combat history is gone; another hit starts a new engagement
    pub fn is_ended(self) -> bool {
        matches!(
            self,
            CombatStatus::Dead | CombatStatus::LoggedOut | CombatStatus::RetaliatedLoggedOut
        )
    }
}
