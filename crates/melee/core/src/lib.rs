//! Deterministic melee blow-effect resolution.
//!
//! `melee-core` resolves the consequences of a single successful melee
//! strike against the protagonist: a named effect kind (HURT, POISON,
//! EAT_GOLD, ...) is looked up in the closed effect registry and its
//! handler mutates defender and attacker state, records what the
//! attacker learned, and reports outcome flags back to the turn loop.
//! All randomness flows through an injectable oracle so resolution is
//! reproducible from a seed.
pub mod combat;
pub mod config;
pub mod env;
pub mod melee;
pub mod state;

pub use combat::{adjust_dam_armor, adjust_dam_elemental};
pub use config::GameConfig;
pub use env::{
    BlowMethod, BlowMethodOracle, DiceRoller, Env, MethodFlavor, OracleError, PcgRng, RngOracle,
    compute_seed,
};
pub use melee::{
    AreaHooks, BlowContext, BlowEffect, MessageLog, NoAreaHooks, blow_method_action,
};
pub use state::{
    Element, EquippedItem, Inventory, InventoryLoss, LightSource, Monster, MonsterLore, Object,
    ObjectKind, Origin, Player, Position, PropertyFlags, ResistLevel, ResistSet, StatDrainOutcome,
    StatKind, Stats, TimedStatus, TimedStatuses,
};

#[cfg(test)]
pub(crate) mod testutil;
