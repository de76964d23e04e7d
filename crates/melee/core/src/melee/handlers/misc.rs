//! Plain damage, no-op, and area-effect blows.

use super::super::context::BlowContext;
use crate::combat::adjust_dam_armor;
use crate::config::GameConfig;

/// A strike whose entire point is non-damaging.
pub(crate) fn none(ctx: &mut BlowContext) {
    ctx.obvious = true;
    ctx.damage = 0;
}

/// Pure damage after armor mitigation.
pub(crate) fn hurt(ctx: &mut BlowContext) {
    ctx.obvious = true;

    ctx.damage = adjust_dam_armor(ctx.damage, ctx.ac);

    ctx.player.take_hit(ctx.damage, ctx.ddesc);
}

/// A blow heavy enough to collapse the surrounding area.
///
/// If the collapse displaces the defender, the remaining blows in this
/// turn are cancelled.
pub(crate) fn shatter(ctx: &mut BlowContext) {
    ctx.obvious = true;

    ctx.damage = adjust_dam_armor(ctx.damage, ctx.ac);

    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    if ctx.damage > GameConfig::COLLAPSE_DAMAGE_THRESHOLD {
        let before = ctx.player.position;

        ctx.area.collapse(
            ctx.monster.position,
            GameConfig::COLLAPSE_RADIUS,
            ctx.player,
        );

        if ctx.player.position != before {
            ctx.do_break = true;
        }
    }
}
