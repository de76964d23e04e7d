//! Shared test helpers.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::env::RngOracle;

/// RNG oracle that replays a fixed script of raw values.
///
/// `DiceRoller::randint0(n)` reduces the raw value modulo `n`, so a
/// scripted value below `n` comes through verbatim. An exhausted script
/// falls back to zero.
#[derive(Debug)]
pub(crate) struct ScriptedRng {
    values: Mutex<VecDeque<u32>>,
}

impl ScriptedRng {
    pub(crate) fn new(values: &[u32]) -> Self {
        Self {
            values: Mutex::new(values.iter().copied().collect()),
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.values
            .lock()
            .expect("scripted rng poisoned")
            .pop_front()
            .unwrap_or(0)
    }
}
