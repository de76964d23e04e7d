//! Blow resolution context.
//!
//! One [`BlowContext`] is the unit of work for a single strike's effect
//! resolution: the turn loop builds it after a hit lands, hands it to
//! exactly one handler, then reads the outcome flags and drains the
//! message log.

use crate::env::{BlowMethod, DiceRoller};
use crate::state::{Monster, Player, Position};

/// Messages emitted while resolving one blow.
///
/// The engine never prints; the caller drains the log and presents the
/// lines however it likes.
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn msg(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any emitted message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|m| m.contains(needle))
    }

    pub fn drain(&mut self) -> Vec<String> {
        core::mem::take(&mut self.entries)
    }
}

/// World capability for the area collapse a shattering blow triggers.
///
/// The collapse may displace the defender; the handler detects that by
/// comparing positions before and after.
pub trait AreaHooks {
    fn collapse(&mut self, center: Position, radius: i32, player: &mut Player);
}

/// No-op world: nothing collapses, nobody moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAreaHooks;

impl AreaHooks for NoAreaHooks {
    fn collapse(&mut self, _center: Position, _radius: i32, _player: &mut Player) {}
}

/// Context for one blow's effect resolution.
///
/// Passed by exclusive mutable reference into a single handler
/// invocation and discarded after the outcome flags are read back.
pub struct BlowContext<'a> {
    /// The defending protagonist.
    pub player: &'a mut Player,

    /// The attacking monster.
    pub monster: &'a mut Monster,

    /// Delivery method of this blow.
    pub method: &'a BlowMethod,

    /// Damage for this blow; handlers may rescale it.
    pub damage: i32,

    /// Defender's armor value, precomputed by the turn loop.
    pub ac: i32,

    /// Attacker's effective level; scales status durations and drains.
    pub rlev: i32,

    /// Damage-source description for death attribution.
    pub ddesc: &'a str,

    /// Whether the effect's nature became visible to the defender.
    pub obvious: bool,

    /// Whether the attacker should disengage after this blow.
    pub blinked: bool,

    /// Whether remaining blows this turn should be cancelled.
    pub do_break: bool,

    pub dice: DiceRoller<'a>,

    pub area: &'a mut dyn AreaHooks,

    pub log: MessageLog,
}

impl<'a> BlowContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player: &'a mut Player,
        monster: &'a mut Monster,
        method: &'a BlowMethod,
        damage: i32,
        ac: i32,
        rlev: i32,
        ddesc: &'a str,
        dice: DiceRoller<'a>,
        area: &'a mut dyn AreaHooks,
    ) -> Self {
        Self {
            player,
            monster,
            method,
            damage,
            ac,
            rlev,
            ddesc,
            obvious: false,
            blinked: false,
            do_break: false,
            dice,
            area,
            log: MessageLog::new(),
        }
    }
}
