//! State types for the two actors in a melee exchange.

pub mod inventory;
pub mod item;
pub mod monster;
pub mod player;
pub mod resist;
pub mod stats;
pub mod status;

pub use inventory::{Inventory, slot_letter};
pub use item::{Object, ObjectKind, Origin};
pub use monster::{Monster, MonsterLore};
pub use player::{
    EquippedItem, InventoryLoss, LightSource, Player, StatDrainOutcome,
};
pub use resist::{Element, PropertyFlags, ResistLevel, ResistSet};
pub use stats::{StatKind, Stats};
pub use status::{TimedStatus, TimedStatuses};

/// A map coordinate.
///
/// Only the area-collapse effect moves anyone; the engine otherwise
/// treats positions as opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
