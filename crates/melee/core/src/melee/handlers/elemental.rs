//! Elemental blow effects.
//!
//! Armor and elemental resistance are independent defenses; an elemental
//! blow exploits whichever is weaker by taking the larger of the two
//! candidate damage values.

use super::super::context::{BlowContext, MessageLog};
use super::super::learn;
use crate::combat::{adjust_dam_armor, adjust_dam_elemental};
use crate::config::GameConfig;
use crate::state::{Element, InventoryLoss, TimedStatus};

fn strike_message(element: Element) -> Option<&'static str> {
    match element {
        Element::Acid => Some("You are covered in acid!"),
        Element::Elec => Some("You are struck by electricity!"),
        Element::Fire => Some("You are enveloped in flames!"),
        Element::Cold => Some("You are covered with frost!"),
        // Poison is not a pure element and gets no sensory message here.
        Element::Pois | Element::Disen | Element::Chaos => None,
    }
}

fn report_losses(log: &mut MessageLog, losses: &[InventoryLoss]) {
    for loss in losses {
        let message = if loss.had == 1 {
            format!("Your {} was destroyed!", loss.name)
        } else if loss.destroyed == loss.had {
            format!("All of your {} were destroyed!", loss.name)
        } else if loss.destroyed == 1 {
            format!("One of your {} was destroyed!", loss.name)
        } else {
            format!("Some of your {} were destroyed!", loss.name)
        };
        log.msg(message);
    }
}

/// Generic elemental primitive.
///
/// `pure` means the element is self-evidently identifiable: the outcome
/// is always obvious and the attacker learns the defender's resistance.
/// Poison calls with `pure = false` and does its own learning afterward.
pub(crate) fn elemental(ctx: &mut BlowContext, element: Element, pure: bool) {
    if pure {
        ctx.obvious = true;
    }

    if let Some(message) = strike_message(element) {
        ctx.log.msg(message);
    }

    // Elemental delivery grants the defender a small armor bonus.
    let mut physical_dam =
        adjust_dam_armor(ctx.damage, ctx.ac + GameConfig::ELEMENTAL_AC_BONUS);

    // Some attacks do no physical damage at all.
    if !ctx.method.phys {
        physical_dam = 0;
    }

    let elemental_dam =
        adjust_dam_elemental(&mut ctx.dice, ctx.player.resists.level(element), ctx.damage);

    // Take the larger of physical or elemental damage.
    ctx.damage = physical_dam.max(elemental_dam);

    if elemental_dam > 0 {
        let amount = (elemental_dam * 5).min(GameConfig::INVEN_DESTROY_CAP);
        let losses = ctx.player.inven_damage(element, amount, &mut ctx.dice);
        report_losses(&mut ctx.log, &losses);
    }
    if ctx.damage > 0 {
        ctx.player.take_hit(ctx.damage, ctx.ddesc);
    }

    if pure {
        learn::element(ctx, element);
    }
}

pub(crate) fn acid(ctx: &mut BlowContext) {
    elemental(ctx, Element::Acid, true);
}

pub(crate) fn elec(ctx: &mut BlowContext) {
    elemental(ctx, Element::Elec, true);
}

pub(crate) fn fire(ctx: &mut BlowContext) {
    elemental(ctx, Element::Fire, true);
}

pub(crate) fn cold(ctx: &mut BlowContext) {
    elemental(ctx, Element::Cold, true);
}

/// Poison is both an elemental attack and a status attack, so it cannot
/// go through the pure-elemental path: the elemental part runs without
/// learning, then the status timer and the single net knowledge update
/// follow.
pub(crate) fn poison(ctx: &mut BlowContext) {
    elemental(ctx, Element::Pois, false);

    if ctx.player.is_dead {
        return;
    }

    let amount = 5 + ctx.dice.randint1(ctx.rlev);
    if ctx.player.inc_timed(TimedStatus::Poisoned, amount) {
        ctx.obvious = true;
    }

    learn::element(ctx, Element::Pois);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BlowMethod, DiceRoller, PcgRng};
    use crate::melee::context::NoAreaHooks;
    use crate::state::{Monster, Object, ObjectKind, Player, ResistLevel};
    use crate::testutil::ScriptedRng;

    #[test]
    fn pure_fire_takes_larger_of_physical_and_elemental() {
        let mut player = Player {
            hp: 500,
            ..Player::default()
        };
        let mut monster = Monster::new("a fire elemental", 20, 50);
        let method = BlowMethod::new("HIT", true).with_message("hits you.");
        let rng = PcgRng;
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            100,
            50,
            20,
            "a fire elemental",
            DiceRoller::new(&rng, 11),
            &mut area,
        );

        fire(&mut ctx);

        // No fire resistance: elemental damage passes through at 100,
        // physical is mitigated by ac 50 + 50 bonus down to 75.
        assert!(ctx.obvious);
        assert_eq!(ctx.damage, 100);
        let damage = ctx.damage;
        drop(ctx);
        assert_eq!(player.hp, 500 - damage);
        assert_eq!(
            monster.lore.known_resist(Element::Fire),
            Some(ResistLevel::None)
        );
    }

    #[test]
    fn non_physical_method_skips_armor_candidate() {
        let mut player = Player {
            hp: 500,
            resists: crate::state::ResistSet::empty().with(Element::Cold, ResistLevel::Immune),
            ..Player::default()
        };
        let mut monster = Monster::new("a chill wisp", 5, 10);
        let method = BlowMethod::new("GAZE", false).with_message("gazes at you.");
        let rng = PcgRng;
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            60,
            0,
            5,
            "a chill wisp",
            DiceRoller::new(&rng, 12),
            &mut area,
        );

        cold(&mut ctx);

        // Immune and non-physical: both candidates are zero.
        assert_eq!(ctx.damage, 0);
        assert!(ctx.obvious);
        drop(ctx);
        assert_eq!(player.hp, 500);
        assert_eq!(
            monster.lore.known_resist(Element::Cold),
            Some(ResistLevel::Immune)
        );
    }

    #[test]
    fn elemental_damage_destroys_fragile_inventory() {
        let mut player = Player {
            hp: 500,
            ..Player::default()
        };
        player
            .inventory
            .set_slot(0, Object::new("Scrolls of Phase Door", ObjectKind::Scroll).with_number(4));
        let mut monster = Monster::new("a hell hound", 15, 40);
        let method = BlowMethod::new("BITE", true).with_message("bites you.");
        // Rolls: destruction roll (0 < amount), units destroyed (1+1 = 2).
        let rng = ScriptedRng::new(&[0, 1]);
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            40,
            0,
            15,
            "a hell hound",
            DiceRoller::new(&rng, 0),
            &mut area,
        );

        fire(&mut ctx);

        assert!(ctx.log.contains("destroyed"));
        drop(ctx);
        assert_eq!(player.inventory.slot(0).unwrap().number, 2);
    }

    #[test]
    fn poison_applies_timer_and_learns_once() {
        let mut player = Player {
            hp: 500,
            ..Player::default()
        };
        let mut monster = Monster::new("a giant spider", 10, 30);
        let method = BlowMethod::new("STING", true).with_message("stings you.");
        let rng = PcgRng;
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            10,
            0,
            10,
            "a giant spider",
            DiceRoller::new(&rng, 13),
            &mut area,
        );

        poison(&mut ctx);

        assert!(ctx.obvious);
        drop(ctx);
        assert!(player.timed.get(TimedStatus::Poisoned) >= 6);
        assert_eq!(
            monster.lore.known_resist(Element::Pois),
            Some(ResistLevel::None)
        );
    }

    #[test]
    fn lethal_elemental_blow_skips_status() {
        let mut player = Player {
            hp: 5,
            ..Player::default()
        };
        let mut monster = Monster::new("a giant spider", 10, 30);
        let method = BlowMethod::new("STING", true).with_message("stings you.");
        let rng = PcgRng;
        let mut area = NoAreaHooks;
        let mut ctx = BlowContext::new(
            &mut player,
            &mut monster,
            &method,
            50,
            0,
            10,
            "a giant spider",
            DiceRoller::new(&rng, 14),
            &mut area,
        );

        poison(&mut ctx);

        drop(ctx);
        assert!(player.is_dead);
        assert!(!player.timed.has(TimedStatus::Poisoned));
    }
}
