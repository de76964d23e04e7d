//! Status-inflicting blow effects.

use super::super::context::BlowContext;
use super::super::learn;
use crate::state::{Element, PropertyFlags, TimedStatus};

/// Generic timed-status primitive.
///
/// Applies raw damage first; a dead defender ends resolution. An
/// optional saving throw (save skill out of 100) negates the status;
/// otherwise the timer is increased and the effect is obvious only if
/// the timer actually changed. Either way the attacker learns whether
/// the defender holds the matching protection.
pub(crate) fn timed(
    ctx: &mut BlowContext,
    status: TimedStatus,
    amount: i32,
    learn_flag: PropertyFlags,
    attempt_save: bool,
    save_msg: Option<&str>,
) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    if attempt_save && ctx.dice.randint0(100) < ctx.player.skill_save {
        if let Some(message) = save_msg {
            ctx.log.msg(message);
        }
        ctx.obvious = true;
    } else if ctx.player.inc_timed(status, amount) {
        ctx.obvious = true;
    }

    learn::flag(ctx, learn_flag);
}

pub(crate) fn blind(ctx: &mut BlowContext) {
    let amount = 10 + ctx.dice.randint1(ctx.rlev);
    timed(
        ctx,
        TimedStatus::Blinded,
        amount,
        PropertyFlags::PROT_BLIND,
        false,
        None,
    );
}

pub(crate) fn confuse(ctx: &mut BlowContext) {
    let amount = 3 + ctx.dice.randint1(ctx.rlev);
    timed(
        ctx,
        TimedStatus::Confused,
        amount,
        PropertyFlags::PROT_CONF,
        false,
        None,
    );
}

pub(crate) fn terrify(ctx: &mut BlowContext) {
    let amount = 3 + ctx.dice.randint1(ctx.rlev);
    timed(
        ctx,
        TimedStatus::Afraid,
        amount,
        PropertyFlags::PROT_FEAR,
        true,
        Some("You stand your ground!"),
    );
}

pub(crate) fn paralyze(ctx: &mut BlowContext) {
    // A zero-damage paralysis blow on an already-paralyzed defender
    // would lock them in place forever; force at least one point.
    if ctx.player.timed.has(TimedStatus::Paralyzed) && ctx.damage < 1 {
        ctx.damage = 1;
    }

    let amount = 3 + ctx.dice.randint1(ctx.rlev);
    timed(
        ctx,
        TimedStatus::Paralyzed,
        amount,
        PropertyFlags::FREE_ACT,
        true,
        Some("You resist the effects!"),
    );
}

/// Hallucination has its own learning target (chaos affinity rather
/// than a protection flag), so it bypasses the generic primitive.
pub(crate) fn hallu(ctx: &mut BlowContext) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    let amount = 3 + ctx.dice.randint1(ctx.rlev / 2);
    if ctx.player.inc_timed(TimedStatus::Hallucinating, amount) {
        ctx.obvious = true;
    }

    learn::element(ctx, Element::Chaos);
}
