//! Theft and consumption effects: gold, items, food, light.

use super::super::context::BlowContext;
use crate::config::GameConfig;
use crate::state::{Object, Origin, TimedStatus, slot_letter};

/// Dexterity/level saving throw against theft.
///
/// A paralyzed defender cannot react and draws no roll.
fn theft_save(ctx: &mut BlowContext) -> bool {
    if ctx.player.timed.has(TimedStatus::Paralyzed) {
        return false;
    }
    ctx.dice.randint0(100) < ctx.player.dex_safety + ctx.player.lev
}

pub(crate) fn eat_gold(ctx: &mut BlowContext) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    ctx.obvious = true;

    if theft_save(ctx) {
        ctx.log.msg("You quickly protect your money pouch!");

        // Occasional blink anyway.
        if ctx.dice.randint0(3) > 0 {
            ctx.blinked = true;
        }
        return;
    }

    let mut gold = ctx.player.au / 10 + ctx.dice.randint1(25) as i64;
    if gold < 2 {
        gold = 2;
    }
    if gold > GameConfig::LARGE_HOARD {
        gold = ctx.player.au / 20 + ctx.dice.randint1(3000) as i64;
    }
    if gold > ctx.player.au {
        gold = ctx.player.au;
    }
    ctx.player.au -= gold;

    if gold <= 0 {
        ctx.log.msg("Nothing was stolen.");
        return;
    }

    ctx.log.msg("Your purse feels lighter.");
    if ctx.player.au > 0 {
        ctx.log.msg(format!("{gold} coins were stolen!"));
    } else {
        ctx.log.msg("All of your coins were stolen!");
    }

    // While we have gold, put it in objects.
    while gold > 0 {
        let amount = gold.min(GameConfig::MAX_COIN_VALUE);

        let mut obj = Object::coins(amount as i32);
        obj.origin = Origin::Stolen;
        ctx.monster.carry(obj);

        gold -= amount;
    }

    ctx.blinked = true;
}

pub(crate) fn eat_item(ctx: &mut BlowContext) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    if theft_save(ctx) {
        ctx.log.msg("You grab hold of your backpack!");
        ctx.blinked = true;
        ctx.obvious = true;
        return;
    }

    for _ in 0..GameConfig::MAX_STEAL_TRIES {
        let index = ctx.dice.randint0(GameConfig::PACK_SIZE as i32) as usize;

        let Some(obj) = ctx.player.inventory.slot(index) else {
            continue;
        };

        // Artifacts cling to their owner.
        if obj.artifact {
            continue;
        }

        let split = obj.number > 1;
        ctx.log.msg(format!(
            "{} {} ({}) was stolen!",
            if split { "One of your" } else { "Your" },
            obj.name,
            slot_letter(index)
        ));

        let Some(mut stolen) = ctx.player.inventory.take_one(index) else {
            continue;
        };
        stolen.origin = Origin::Stolen;
        ctx.monster.carry(stolen);

        ctx.obvious = true;
        ctx.blinked = true;
        break;
    }
}

pub(crate) fn eat_food(ctx: &mut BlowContext) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    for _ in 0..GameConfig::MAX_STEAL_TRIES {
        let index = ctx.dice.randint0(GameConfig::PACK_SIZE as i32) as usize;

        let Some(obj) = ctx.player.inventory.slot(index) else {
            continue;
        };
        if !obj.is_edible() {
            continue;
        }

        if obj.number == 1 {
            ctx.log
                .msg(format!("Your {} ({}) was eaten!", obj.name, slot_letter(index)));
        } else {
            ctx.log.msg(format!(
                "One of your {} ({}) was eaten!",
                obj.name,
                slot_letter(index)
            ));
        }

        // Eaten, not carried off.
        ctx.player.inventory.take_one(index);

        ctx.obvious = true;
        break;
    }
}

pub(crate) fn eat_light(ctx: &mut BlowContext) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    let amount = 250 + ctx.dice.randint1(250);
    if ctx.player.drain_light(amount) {
        if !ctx.player.timed.has(TimedStatus::Blinded) {
            ctx.log.msg("Your light dims.");
        }
        ctx.obvious = true;
    }
}
