//! The defender's pack.
//!
//! A fixed array of optional slots: blow handlers pick a random slot
//! index and skip empties, so empty slots must stay addressable rather
//! than compacting away.

use super::item::Object;
use crate::config::GameConfig;

/// Fixed-size pack of optional object slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: [Option<Object>; GameConfig::PACK_SIZE],
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    pub fn slot(&self, index: usize) -> Option<&Object> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.slots.get_mut(index).and_then(|slot| slot.as_mut())
    }

    pub fn set_slot(&mut self, index: usize, obj: Object) {
        self.slots[index] = Some(obj);
    }

    /// Remove one unit from the stack at `index` and return it.
    ///
    /// A stack of one vacates the slot; a larger stack shrinks by one
    /// and yields a single-unit copy.
    pub fn take_one(&mut self, index: usize) -> Option<Object> {
        let slot = self.slots.get_mut(index)?;
        let obj = slot.as_mut()?;
        if obj.number > 1 {
            obj.number -= 1;
            let mut taken = obj.clone();
            taken.number = 1;
            Some(taken)
        } else {
            slot.take()
        }
    }

    /// Remove up to `count` units from the stack at `index`.
    ///
    /// Returns the number of units actually removed.
    pub fn remove(&mut self, index: usize, count: u16) -> u16 {
        let Some(slot) = self.slots.get_mut(index) else {
            return 0;
        };
        let Some(obj) = slot.as_mut() else {
            return 0;
        };
        let removed = count.min(obj.number);
        if removed == obj.number {
            *slot = None;
        } else {
            obj.number -= removed;
        }
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::empty()
    }
}

/// Letter shown for a pack slot in messages ('a' for slot 0).
pub fn slot_letter(index: usize) -> char {
    (b'a' + (index as u8 % 26)) as char
}
