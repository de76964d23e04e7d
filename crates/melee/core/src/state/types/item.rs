//! Carried objects.
//!
//! # Design: Base + Kind Pattern
//!
//! - The base struct holds common fields (name, stack count, level).
//! - The `kind` enum holds category-specific data (charges, coin value).

use super::resist::Element;

/// Where an object came from. Stolen objects are tagged so later
/// death-drop logic does not confuse them with generated treasure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    #[default]
    Acquired,
    Stolen,
}

/// Object category with category-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectKind {
    /// Charge-bearing wand.
    Wand { charges: i32 },
    /// Charge-bearing staff.
    Staff { charges: i32 },
    /// Ordinary food.
    Food,
    /// Edible mushroom.
    Mushroom,
    /// Oil flask (light fuel).
    Flask,
    Scroll,
    Potion,
    /// A pile of coins; `amount` is its value.
    Coins { amount: i32 },
    /// Weapons, armor, and everything else.
    Gear,
}

/// A carried object or stack of objects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Object {
    pub name: String,
    pub kind: ObjectKind,
    /// Stack count; theft and consumption remove one unit at a time.
    pub number: u16,
    /// Object level; deeper items resist charge draining better.
    pub level: i32,
    /// Named artifacts can never be stolen.
    pub artifact: bool,
    pub origin: Origin,
}

impl Object {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            number: 1,
            level: 0,
            artifact: false,
            origin: Origin::default(),
        }
    }

    /// A freshly materialized pile of coins.
    pub fn coins(amount: i32) -> Self {
        Self::new("gold", ObjectKind::Coins { amount })
    }

    pub fn with_number(mut self, number: u16) -> Self {
        self.number = number;
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn as_artifact(mut self) -> Self {
        self.artifact = true;
        self
    }

    pub fn can_have_charges(&self) -> bool {
        matches!(self.kind, ObjectKind::Wand { .. } | ObjectKind::Staff { .. })
    }

    pub fn charges(&self) -> i32 {
        match self.kind {
            ObjectKind::Wand { charges } | ObjectKind::Staff { charges } => charges,
            _ => 0,
        }
    }

    pub fn set_charges(&mut self, new_charges: i32) {
        match &mut self.kind {
            ObjectKind::Wand { charges } | ObjectKind::Staff { charges } => {
                *charges = new_charges;
            }
            _ => {}
        }
    }

    pub fn is_edible(&self) -> bool {
        matches!(self.kind, ObjectKind::Food | ObjectKind::Mushroom)
    }

    /// Whether this object can be destroyed as a side effect of taking
    /// the given element: acid eats scrolls and staves, electricity
    /// destroys wands, fire burns scrolls, staves and food, cold
    /// shatters potions and flasks.
    pub fn is_fragile_to(&self, element: Element) -> bool {
        match element {
            Element::Acid => matches!(self.kind, ObjectKind::Scroll | ObjectKind::Staff { .. }),
            Element::Elec => matches!(self.kind, ObjectKind::Wand { .. }),
            Element::Fire => matches!(
                self.kind,
                ObjectKind::Scroll | ObjectKind::Staff { .. } | ObjectKind::Food
            ),
            Element::Cold => matches!(self.kind, ObjectKind::Potion | ObjectKind::Flask),
            Element::Pois | Element::Disen | Element::Chaos => false,
        }
    }
}
