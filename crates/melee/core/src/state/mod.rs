//! Mutable actor state consumed and modified by blow resolution.

pub mod types;

pub use types::{
    Element, EquippedItem, Inventory, InventoryLoss, LightSource, Monster, MonsterLore, Object,
    ObjectKind, Origin, Player, Position, PropertyFlags, ResistLevel, ResistSet, StatDrainOutcome,
    StatKind, Stats, TimedStatus, TimedStatuses, slot_letter,
};
