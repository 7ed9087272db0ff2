use crate::game_data::{WeaponRef, WorldPoint};

/// Raw events supplied by the game client, one at a time, in tick order.
/// Actors are identified by player name.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Start of a game tick
    GameTick {
        tick: u32,
        /// Local player position, if known this tick
        position: Option<WorldPoint>,
    },

    /// A hitsplat landed on `target`
    Hitsplat {
        target: String,
        /// Set when the local player dealt the hit
        by_local_player: bool,
        tick: u32,
    },

    /// An actor's animation changed
    AnimationChanged {
        actor: String,
        animation: i32,
        /// Weapon the actor is wielding
        weapon: Option<WeaponRef>,
        position: WorldPoint,
        tick: u32,
    },

    /// An actor started or stopped interacting with someone
    InteractionChanged {
        source: String,
        target: Option<String>,
        tick: u32,
    },

    /// An actor left view. `logged_out` is set when the client saw a logout.
    ActorDespawned { actor: String, logged_out: bool },

    ActorDied { actor: String },

    /// Local equipment changed
    EquipmentChanged {
        /// Indices of slots that changed, in client order
        changed_slots: Vec<usize>,
        /// Full container contents by slot index
        items: Vec<Option<i32>>,
    },

    /// The local player was just teleported
    Teleported,

    ChatMessage { message: String },

    LoggedIn {
        local_player: String,
        position: Option<WorldPoint>,
        /// Full equipment contents by slot index
        equipment: Vec<Option<i32>>,
    },

    LoggedOut,

    WorldHopped,
}
