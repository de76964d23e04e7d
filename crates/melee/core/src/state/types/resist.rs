//! Elements, resistance levels, and innate property flags.

use strum::EnumCount;

/// Elements a blow can carry and the defender can resist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumCount, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Acid,
    Elec,
    Fire,
    Cold,
    Pois,
    Disen,
    Chaos,
}

/// Defender's standing toward one element.
///
/// Ordered: vulnerability takes extra damage, resistance reduces it,
/// immunity negates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResistLevel {
    Vulnerable,
    #[default]
    None,
    Resist,
    Immune,
}

/// Per-element resistance levels for one actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistSet {
    levels: [ResistLevel; Element::COUNT],
}

impl ResistSet {
    /// No resistances or vulnerabilities.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder: set one element's level.
    pub fn with(mut self, element: Element, level: ResistLevel) -> Self {
        self.set(element, level);
        self
    }

    pub fn level(&self, element: Element) -> ResistLevel {
        self.levels[element as usize]
    }

    pub fn set(&mut self, element: Element, level: ResistLevel) {
        self.levels[element as usize] = level;
    }

    /// True when the actor at least resists the element.
    pub fn is_resistant(&self, element: Element) -> bool {
        self.level(element) >= ResistLevel::Resist
    }
}

bitflags::bitflags! {
    /// Innate defender properties observable through melee.
    ///
    /// Protections block the matching timed status outright; sustains
    /// block the matching stat drain; the rest gate specific handler
    /// branches.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PropertyFlags: u16 {
        const PROT_BLIND = 1 << 0;
        const PROT_CONF = 1 << 1;
        const PROT_FEAR = 1 << 2;
        const FREE_ACT = 1 << 3;
        const HOLD_LIFE = 1 << 4;
        const SUST_STR = 1 << 5;
        const SUST_INT = 1 << 6;
        const SUST_WIS = 1 << 7;
        const SUST_DEX = 1 << 8;
        const SUST_CON = 1 << 9;
    }
}
