//! Defender state and the mutations blow effects apply to it.
//!
//! Mutators here are pure state changes; the melee layer decides which
//! messages the outcomes produce.

use arrayvec::ArrayVec;

use super::inventory::Inventory;
use super::resist::{Element, PropertyFlags, ResistSet};
use super::stats::{StatKind, Stats};
use super::status::{TimedStatus, TimedStatuses};
use super::Position;
use crate::config::GameConfig;
use crate::env::DiceRoller;

/// A wielded light source with remaining fuel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightSource {
    pub fuel: i32,
}

/// A worn or wielded item subject to disenchantment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub name: String,
    /// Net enchantment; disenchantment degrades it one point at a time.
    pub bonus: i32,
}

/// Outcome of one stat-drain attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatDrainOutcome {
    /// A sustain flag absorbed the drain; the defender felt it happen.
    Sustained,
    /// The stat was permanently reduced.
    Reduced,
    /// Already at the floor; nothing observable happened.
    Unchanged,
}

/// One stack's losses from elemental inventory destruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryLoss {
    pub name: String,
    pub destroyed: u16,
    /// Stack size before the destruction.
    pub had: u16,
}

/// The defending protagonist.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub hp: i32,
    pub is_dead: bool,
    /// Attribution string recorded when a blow kills the defender.
    pub died_from: Option<String>,

    pub lev: i32,
    pub exp: i64,
    /// Carried gold.
    pub au: i64,

    pub stats: Stats,
    pub flags: PropertyFlags,
    pub resists: ResistSet,
    pub timed: TimedStatuses,

    /// Saving-throw skill out of 100.
    pub skill_save: i32,
    /// Dexterity-derived theft protection, added to level for theft
    /// saving throws.
    pub dex_safety: i32,

    pub inventory: Inventory,
    pub equipment: ArrayVec<EquippedItem, { GameConfig::MAX_EQUIP_SLOTS }>,
    pub light: Option<LightSource>,

    pub position: Position,
}

impl Player {
    /// Apply damage with death detection.
    ///
    /// `ddesc` attributes the kill; it is recorded only when this hit is
    /// the lethal one. Dead defenders take no further damage.
    pub fn take_hit(&mut self, damage: i32, ddesc: &str) {
        if self.is_dead {
            return;
        }
        self.hp -= damage.max(0);
        if self.hp <= 0 {
            self.is_dead = true;
            self.died_from = Some(ddesc.to_string());
        }
    }

    pub fn has_flag(&self, flag: PropertyFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Increase a timed status, unless a property flag blocks it.
    ///
    /// Returns true if the timer actually changed.
    pub fn inc_timed(&mut self, status: TimedStatus, amount: i32) -> bool {
        if let Some(flag) = status.blocking_flag() {
            if self.flags.contains(flag) {
                return false;
            }
        }
        self.timed.increase(status, amount)
    }

    /// Permanently drain one point of a stat, subject to sustains and
    /// the stat floor.
    pub fn drain_stat(&mut self, stat: StatKind) -> StatDrainOutcome {
        if self.flags.contains(stat.sustain_flag()) {
            StatDrainOutcome::Sustained
        } else if self.stats.reduce(stat) {
            StatDrainOutcome::Reduced
        } else {
            StatDrainOutcome::Unchanged
        }
    }

    pub fn lose_exp(&mut self, amount: i64) {
        self.exp = (self.exp - amount.max(0)).max(0);
    }

    /// Destroy carried objects fragile to `element`.
    ///
    /// Each fragile stack is rolled against `amount` (out of
    /// [`GameConfig::INVEN_DESTROY_CAP`]); an affected stack loses a
    /// random number of units. Returns the per-stack losses for message
    /// formatting.
    pub fn inven_damage(
        &mut self,
        element: Element,
        amount: i32,
        dice: &mut DiceRoller,
    ) -> Vec<InventoryLoss> {
        let mut losses = Vec::new();
        for index in 0..GameConfig::PACK_SIZE {
            let Some(obj) = self.inventory.slot(index) else {
                continue;
            };
            if !obj.is_fragile_to(element) || obj.artifact {
                continue;
            }
            if dice.randint0(GameConfig::INVEN_DESTROY_CAP) >= amount {
                continue;
            }
            let had = obj.number;
            let name = obj.name.clone();
            let destroyed = dice.randint1(had as i32) as u16;
            let destroyed = self.inventory.remove(index, destroyed);
            losses.push(InventoryLoss {
                name,
                destroyed,
                had,
            });
        }
        losses
    }

    /// Drain fuel from the wielded light source.
    ///
    /// Returns true if any fuel was actually drained.
    pub fn drain_light(&mut self, amount: i32) -> bool {
        match &mut self.light {
            Some(light) if light.fuel > 0 => {
                light.fuel = (light.fuel - amount.max(0)).max(0);
                true
            }
            _ => false,
        }
    }

    /// Degrade a random equipped item's enchantment by one point.
    ///
    /// A single random slot is inspected; an empty pick or an item with
    /// no enchantment left means nothing happens. Returns the name of
    /// the degraded item.
    pub fn disenchant_random_slot(&mut self, dice: &mut DiceRoller) -> Option<String> {
        if self.equipment.is_empty() {
            return None;
        }
        let index = dice.randint0(self.equipment.len() as i32) as usize;
        let item = &mut self.equipment[index];
        if item.bonus <= 0 {
            return None;
        }
        item.bonus -= 1;
        Some(item.name.clone())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            hp: 100,
            is_dead: false,
            died_from: None,
            lev: 1,
            exp: 0,
            au: 0,
            stats: Stats::default(),
            flags: PropertyFlags::empty(),
            resists: ResistSet::empty(),
            timed: TimedStatuses::empty(),
            skill_save: 0,
            dex_safety: 0,
            inventory: Inventory::empty(),
            equipment: ArrayVec::new(),
            light: None,
            position: Position::default(),
        }
    }
}
