//! Timed status counters for the defender.
//!
//! A timed status is a simple counter of remaining turns; blows increase
//! it and the external turn loop decrements it. This differs from
//! expiry-tick bookkeeping because melee effects are specified as timer
//! increments, and "did the timer actually change" is an observable
//! outcome (it decides whether an effect was obvious).

use strum::EnumCount;

use super::resist::PropertyFlags;
use crate::config::GameConfig;

/// Timed afflictions a blow can inflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumCount, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimedStatus {
    Poisoned,
    Blinded,
    Confused,
    Afraid,
    Paralyzed,
    Hallucinating,
}

impl TimedStatus {
    /// The property flag that blocks this status entirely, if any.
    pub fn blocking_flag(self) -> Option<PropertyFlags> {
        match self {
            Self::Blinded => Some(PropertyFlags::PROT_BLIND),
            Self::Confused => Some(PropertyFlags::PROT_CONF),
            Self::Afraid => Some(PropertyFlags::PROT_FEAR),
            Self::Paralyzed => Some(PropertyFlags::FREE_ACT),
            Self::Poisoned | Self::Hallucinating => None,
        }
    }
}

/// Active timed status counters on the defender.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedStatuses {
    timers: [i32; TimedStatus::COUNT],
}

impl TimedStatuses {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, status: TimedStatus) -> i32 {
        self.timers[status as usize]
    }

    pub fn has(&self, status: TimedStatus) -> bool {
        self.get(status) > 0
    }

    pub fn set(&mut self, status: TimedStatus, turns: i32) {
        self.timers[status as usize] = turns.clamp(0, GameConfig::TIMED_MAX);
    }

    /// Increase a timer, capped at [`GameConfig::TIMED_MAX`].
    ///
    /// Returns true if the timer actually changed.
    pub fn increase(&mut self, status: TimedStatus, amount: i32) -> bool {
        let old = self.get(status);
        let new = (old + amount.max(0)).clamp(0, GameConfig::TIMED_MAX);
        self.timers[status as usize] = new;
        new != old
    }
}
