//! Drain effects: stats, experience, charges, enchantment.

use super::super::context::BlowContext;
use super::super::learn;
use crate::config::GameConfig;
use crate::state::{Element, PropertyFlags, StatDrainOutcome, StatKind};

/// Drain one stat, emitting the matching message.
///
/// Returns true when the defender observed anything (a sustain firing
/// counts; a stat already at the floor does not).
fn drain_one_stat(ctx: &mut BlowContext, stat: StatKind) -> bool {
    match ctx.player.drain_stat(stat) {
        StatDrainOutcome::Sustained => {
            ctx.log.msg(format!(
                "You feel {} for a moment, but the feeling passes.",
                stat.drained_adjective()
            ));
            true
        }
        StatDrainOutcome::Reduced => {
            ctx.log
                .msg(format!("You feel very {}.", stat.drained_adjective()));
            true
        }
        StatDrainOutcome::Unchanged => false,
    }
}

/// Generic stat-drain primitive.
pub(crate) fn stat(ctx: &mut BlowContext, stat: StatKind) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    if drain_one_stat(ctx, stat) {
        ctx.obvious = true;
    }
}

pub(crate) fn lose_str(ctx: &mut BlowContext) {
    stat(ctx, StatKind::Str);
}

pub(crate) fn lose_int(ctx: &mut BlowContext) {
    stat(ctx, StatKind::Int);
}

pub(crate) fn lose_wis(ctx: &mut BlowContext) {
    stat(ctx, StatKind::Wis);
}

pub(crate) fn lose_dex(ctx: &mut BlowContext) {
    stat(ctx, StatKind::Dex);
}

pub(crate) fn lose_con(ctx: &mut BlowContext) {
    stat(ctx, StatKind::Con);
}

pub(crate) fn lose_all(ctx: &mut BlowContext) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    for stat in [
        StatKind::Str,
        StatKind::Dex,
        StatKind::Con,
        StatKind::Int,
        StatKind::Wis,
    ] {
        if drain_one_stat(ctx, stat) {
            ctx.obvious = true;
        }
    }
}

/// Generic experience-drain primitive.
///
/// `chance` is the percent chance that hold-life fully negates the
/// drain; holders who fail the roll still get away with a tenth of the
/// computed loss.
pub(crate) fn experience(ctx: &mut BlowContext, chance: i32, drain_base: i32) {
    ctx.obvious = true;

    ctx.player.take_hit(ctx.damage, ctx.ddesc);
    learn::flag(ctx, PropertyFlags::HOLD_LIFE);

    if ctx.player.is_dead {
        return;
    }

    let hold_life = ctx.player.has_flag(PropertyFlags::HOLD_LIFE);
    if hold_life && ctx.dice.randint0(100) < chance {
        ctx.log.msg("You keep hold of your life force!");
    } else {
        let drain =
            drain_base as i64 + ctx.player.exp / 100 * GameConfig::LIFE_DRAIN_PERCENT;
        if hold_life {
            ctx.log.msg("You feel your life slipping away!");
            ctx.player.lose_exp(drain / 10);
        } else {
            ctx.log.msg("You feel your life draining away!");
            ctx.player.lose_exp(drain);
        }
    }
}

pub(crate) fn exp_10(ctx: &mut BlowContext) {
    let drain_base = ctx.dice.damroll(10, 6);
    experience(ctx, 95, drain_base);
}

pub(crate) fn exp_20(ctx: &mut BlowContext) {
    let drain_base = ctx.dice.damroll(20, 6);
    experience(ctx, 90, drain_base);
}

pub(crate) fn exp_40(ctx: &mut BlowContext) {
    let drain_base = ctx.dice.damroll(40, 6);
    experience(ctx, 75, drain_base);
}

pub(crate) fn exp_80(ctx: &mut BlowContext) {
    let drain_base = ctx.dice.damroll(80, 6);
    experience(ctx, 50, drain_base);
}

/// Drain charges from a carried wand or staff and feed the attacker.
///
/// Up to ten random slots are inspected; the scan stops after the first
/// slot that yields a nonzero drain. A drainable item with no charges
/// left neither drains nor stops the scan.
pub(crate) fn drain_charges(ctx: &mut BlowContext) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    let rlev = ctx.rlev;
    let mut unpower = 0;

    for _ in 0..GameConfig::MAX_STEAL_TRIES {
        let index = ctx.dice.randint0(GameConfig::PACK_SIZE as i32) as usize;

        let Some(obj) = ctx.player.inventory.slot_mut(index) else {
            continue;
        };

        // Drain charged wands/staves.
        if obj.can_have_charges() && obj.charges() > 0 {
            unpower = rlev / (obj.level + 2) + 1;
            let new_charges = (obj.charges() - unpower).max(0);
            obj.set_charges(new_charges);
        }

        if unpower != 0 {
            ctx.log.msg("Energy drains from your pack!");
            ctx.obvious = true;

            let heal = rlev * unpower;
            ctx.monster.heal(heal);

            // Affect only a single inventory slot.
            break;
        }
    }
}

/// Degrade a random equipped item unless the defender resists
/// disenchantment.
pub(crate) fn disenchant(ctx: &mut BlowContext) {
    ctx.player.take_hit(ctx.damage, ctx.ddesc);

    if ctx.player.is_dead {
        return;
    }

    if !ctx.player.resists.is_resistant(Element::Disen) {
        if let Some(name) = ctx.player.disenchant_random_slot(&mut ctx.dice) {
            ctx.log.msg(format!("Your {name} was disenchanted!"));
            ctx.obvious = true;
        }
    }

    learn::element(ctx, Element::Disen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BlowMethod, DiceRoller};
    use crate::melee::context::NoAreaHooks;
    use crate::state::{
        EquippedItem, Monster, Object, ObjectKind, Player, ResistLevel, ResistSet, Stats,
    };
    use crate::testutil::ScriptedRng;

    fn hit_method() -> BlowMethod {
        BlowMethod::new("HIT", true).with_message("hits you.")
    }

    #[test]
    fn exp_drain_negated_by_hold_life() {
        let mut player = Player {
            hp: 100,
            exp: 1000,
            flags: PropertyFlags::HOLD_LIFE,
            ..Player::default()
        };
        let mut monster = Monster::new("a wight", 12, 30);
        let method = hit_method();
        // Rolls: ten d6 (all 1s), then resist roll 5 (< 95, negated).
        let rng = ScriptedRng::new(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            10,
            0,
            12,
            "a wight",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        exp_10(&mut ctx);

        assert!(ctx.obvious);
        assert!(ctx.log.contains("You keep hold of your life force!"));
        drop(ctx);
        assert_eq!(player.exp, 1000);
        assert_eq!(
            monster.lore.flag_value(PropertyFlags::HOLD_LIFE),
            Some(true)
        );
    }

    #[test]
    fn exp_drain_partial_when_hold_life_fails() {
        let mut player = Player {
            hp: 100,
            exp: 1000,
            flags: PropertyFlags::HOLD_LIFE,
            ..Player::default()
        };
        let mut monster = Monster::new("a wight", 12, 30);
        let method = hit_method();
        // Ten d6 all 1s (base 10), resist roll 99 (>= 95, fails).
        // Full drain = 10 + 1000/100 * 2 = 30; holder loses a tenth.
        let rng = ScriptedRng::new(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 99]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            10,
            0,
            12,
            "a wight",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        exp_10(&mut ctx);

        assert!(ctx.log.contains("You feel your life slipping away!"));
        drop(ctx);
        assert_eq!(player.exp, 1000 - 3);
    }

    #[test]
    fn exp_drain_full_without_hold_life() {
        let mut player = Player {
            hp: 100,
            exp: 1000,
            ..Player::default()
        };
        let mut monster = Monster::new("a wight", 12, 30);
        let method = hit_method();
        let rng = ScriptedRng::new(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            10,
            0,
            12,
            "a wight",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        exp_10(&mut ctx);

        assert!(ctx.log.contains("You feel your life draining away!"));
        drop(ctx);
        assert_eq!(player.exp, 1000 - 30);
        assert_eq!(
            monster.lore.flag_value(PropertyFlags::HOLD_LIFE),
            Some(false)
        );
    }

    #[test]
    fn stat_drain_reduces_and_reports() {
        let mut player = Player {
            hp: 100,
            ..Player::default()
        };
        let mut monster = Monster::new("a disenchanter mold", 10, 25);
        let method = hit_method();
        let rng = ScriptedRng::new(&[]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            5,
            0,
            10,
            "a disenchanter mold",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        lose_str(&mut ctx);

        assert!(ctx.obvious);
        assert!(ctx.log.contains("You feel very weak."));
        drop(ctx);
        assert_eq!(player.stats.get(StatKind::Str), 9);
    }

    #[test]
    fn lose_all_drains_every_stat() {
        let mut player = Player {
            hp: 100,
            flags: PropertyFlags::SUST_DEX,
            ..Player::default()
        };
        let mut monster = Monster::new("a shambling mound", 15, 40);
        let method = hit_method();
        let rng = ScriptedRng::new(&[]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            5,
            0,
            15,
            "a shambling mound",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        lose_all(&mut ctx);

        assert!(ctx.obvious);
        assert!(ctx.log.contains("but the feeling passes"));
        drop(ctx);
        for (stat, expected) in [
            (StatKind::Str, 9),
            (StatKind::Int, 9),
            (StatKind::Wis, 9),
            (StatKind::Dex, 10),
            (StatKind::Con, 9),
        ] {
            assert_eq!(player.stats.get(stat), expected);
        }
    }

    #[test]
    fn drain_charges_feeds_the_attacker() {
        let mut player = Player {
            hp: 100,
            ..Player::default()
        };
        player.inventory.set_slot(
            2,
            Object::new("Wand of Stinking Cloud", ObjectKind::Wand { charges: 8 }).with_level(3),
        );
        let mut monster = Monster::new("a bloodshot eye", 10, 50);
        monster.hp = 30;
        let method = hit_method();
        // Rolls: slot picks 0 (empty), 2 (the wand).
        let rng = ScriptedRng::new(&[0, 2]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            5,
            0,
            10,
            "a bloodshot eye",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        drain_charges(&mut ctx);

        assert!(ctx.obvious);
        assert!(ctx.log.contains("Energy drains from your pack!"));
        drop(ctx);
        // Drained 10 / (3 + 2) + 1 = 3 charges; heal 10 * 3 = 30 capped
        // at the 20 missing hit points.
        assert_eq!(player.inventory.slot(2).unwrap().charges(), 5);
        assert_eq!(monster.hp, 50);
    }

    #[test]
    fn drain_charges_gives_up_after_ten_tries() {
        let mut player = Player {
            hp: 100,
            ..Player::default()
        };
        player
            .inventory
            .set_slot(0, Object::new("Ration of Food", ObjectKind::Food));
        let mut monster = Monster::new("a bloodshot eye", 10, 50);
        monster.hp = 30;
        let method = hit_method();
        // Every pick lands on the food, which holds no charges.
        let rng = ScriptedRng::new(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            5,
            0,
            10,
            "a bloodshot eye",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        drain_charges(&mut ctx);

        assert!(!ctx.obvious);
        assert!(ctx.log.is_empty());
        drop(ctx);
        assert_eq!(monster.hp, 30);
    }

    #[test]
    fn disenchant_degrades_unless_resisted() {
        let mut player = Player {
            hp: 100,
            ..Player::default()
        };
        player.equipment.push(EquippedItem {
            name: "Long Sword".to_string(),
            bonus: 2,
        });
        let mut monster = Monster::new("a disenchanter worm", 8, 20);
        let method = hit_method();
        let rng = ScriptedRng::new(&[0]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            5,
            0,
            8,
            "a disenchanter worm",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        disenchant(&mut ctx);

        assert!(ctx.obvious);
        assert!(ctx.log.contains("was disenchanted"));
        drop(ctx);
        assert_eq!(player.equipment[0].bonus, 1);
        assert_eq!(
            monster.lore.known_resist(Element::Disen),
            Some(ResistLevel::None)
        );
    }

    #[test]
    fn disenchant_blocked_by_resistance() {
        let mut player = Player {
            hp: 100,
            resists: ResistSet::empty().with(Element::Disen, ResistLevel::Resist),
            ..Player::default()
        };
        player.equipment.push(EquippedItem {
            name: "Long Sword".to_string(),
            bonus: 2,
        });
        let mut monster = Monster::new("a disenchanter worm", 8, 20);
        let method = hit_method();
        let rng = ScriptedRng::new(&[0]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            5,
            0,
            8,
            "a disenchanter worm",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        disenchant(&mut ctx);

        assert!(!ctx.obvious);
        drop(ctx);
        assert_eq!(player.equipment[0].bonus, 2);
        assert_eq!(
            monster.lore.known_resist(Element::Disen),
            Some(ResistLevel::Resist)
        );
    }

    #[test]
    fn stat_floor_produces_no_observation() {
        let mut player = Player {
            hp: 100,
            stats: Stats::all_at(Stats::MIN_STAT),
            ..Player::default()
        };
        let mut monster = Monster::new("a disenchanter mold", 10, 25);
        let method = hit_method();
        let rng = ScriptedRng::new(&[]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            5,
            0,
            10,
            "a disenchanter mold",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        lose_con(&mut ctx);

        assert!(!ctx.obvious);
        assert!(ctx.log.is_empty());
    }
}
