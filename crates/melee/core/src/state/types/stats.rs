//! Core stats and stat drain.

use strum::EnumCount;

use super::resist::PropertyFlags;

/// The five drainable core attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumCount, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Str,
    Int,
    Wis,
    Dex,
    Con,
}

impl StatKind {
    /// The sustain flag that blocks draining this stat.
    pub fn sustain_flag(self) -> PropertyFlags {
        match self {
            Self::Str => PropertyFlags::SUST_STR,
            Self::Int => PropertyFlags::SUST_INT,
            Self::Wis => PropertyFlags::SUST_WIS,
            Self::Dex => PropertyFlags::SUST_DEX,
            Self::Con => PropertyFlags::SUST_CON,
        }
    }

    /// Adjective used in drain messages ("You feel very weak.").
    pub fn drained_adjective(self) -> &'static str {
        match self {
            Self::Str => "weak",
            Self::Int => "stupid",
            Self::Wis => "naive",
            Self::Dex => "clumsy",
            Self::Con => "sickly",
        }
    }
}

/// Current stat values for one actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    values: [i32; StatKind::COUNT],
}

impl Stats {
    /// Stats never drain below this floor.
    pub const MIN_STAT: i32 = 3;

    pub fn all_at(value: i32) -> Self {
        Self {
            values: [value; StatKind::COUNT],
        }
    }

    pub fn get(&self, stat: StatKind) -> i32 {
        self.values[stat as usize]
    }

    pub fn set(&mut self, stat: StatKind, value: i32) {
        self.values[stat as usize] = value;
    }

    /// Reduce a stat by one point, respecting the floor.
    ///
    /// Returns true if the value actually changed.
    pub fn reduce(&mut self, stat: StatKind) -> bool {
        let value = self.get(stat);
        if value <= Self::MIN_STAT {
            return false;
        }
        self.set(stat, value - 1);
        true
    }
}

impl Default for Stats {
    /// Average values across the board.
    fn default() -> Self {
        Self::all_at(10)
    }
}
