//! Attacker state and its accumulated knowledge of the defender.

use strum::EnumCount;

use super::item::Object;
use super::resist::{Element, PropertyFlags, ResistLevel};
use super::Position;

/// What the attacker has learned about the defender.
///
/// Learning is driven by resolution outcomes: a blow that probes a
/// property records the observed value here, and the AI layer consults
/// the record when choosing future attacks. Idempotent; re-observing a
/// property just overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterLore {
    /// Properties that have been observed at least once.
    known_flags: PropertyFlags,
    /// Observed values for the known properties.
    flag_values: PropertyFlags,
    /// Observed resistance levels, per element.
    resists: [Option<ResistLevel>; Element::COUNT],
}

impl MonsterLore {
    /// Record an observation of one defender property.
    pub fn learn_flag(&mut self, flag: PropertyFlags, has: bool) {
        self.known_flags.insert(flag);
        if has {
            self.flag_values.insert(flag);
        } else {
            self.flag_values.remove(flag);
        }
    }

    /// Record the defender's resistance level for one element.
    pub fn learn_resist(&mut self, element: Element, level: ResistLevel) {
        self.resists[element as usize] = Some(level);
    }

    pub fn knows_flag(&self, flag: PropertyFlags) -> bool {
        self.known_flags.contains(flag)
    }

    /// Observed value of a known property; None until observed.
    pub fn flag_value(&self, flag: PropertyFlags) -> Option<bool> {
        self.knows_flag(flag)
            .then(|| self.flag_values.contains(flag))
    }

    pub fn known_resist(&self, element: Element) -> Option<ResistLevel> {
        self.resists[element as usize]
    }
}

/// The attacking monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub level: i32,
    pub position: Position,
    pub lore: MonsterLore,
    /// Objects the monster carries, including stolen loot.
    pub held: Vec<Object>,
}

impl Monster {
    pub fn new(name: impl Into<String>, level: i32, hp: i32) -> Self {
        Self {
            name: name.into(),
            hp,
            max_hp: hp,
            level,
            position: Position::default(),
            lore: MonsterLore::default(),
            held: Vec::new(),
        }
    }

    /// Heal up to `amount`, capped at missing hit points.
    ///
    /// Returns the amount actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.max(0).min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    pub fn carry(&mut self, obj: Object) {
        self.held.push(obj);
    }
}
