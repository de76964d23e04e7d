//! Opponent learning feedback.
//!
//! Resolution outcomes teach the attacker about the defender: a pure
//! elemental blow reveals the defender's resistance to that element, a
//! status blow reveals whether the matching protection is held. The
//! knowledge lands in the attacker's lore record and steers its AI
//! elsewhere.

use super::context::BlowContext;
use crate::state::{Element, PropertyFlags};

/// Record the defender's resistance level for `element` on the attacker.
pub(crate) fn element(ctx: &mut BlowContext, element: Element) {
    let level = ctx.player.resists.level(element);
    ctx.monster.lore.learn_resist(element, level);
}

/// Record whether the defender holds `flag` on the attacker.
pub(crate) fn flag(ctx: &mut BlowContext, flag: PropertyFlags) {
    let has = ctx.player.flags.contains(flag);
    ctx.monster.lore.learn_flag(flag, has);
}
