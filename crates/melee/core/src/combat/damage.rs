//! Damage mitigation and elemental resistance adjustment.

use crate::config::GameConfig;
use crate::env::DiceRoller;
use crate::state::ResistLevel;

/// Reduce incoming damage based on the defender's armor value.
///
/// # Formula
///
/// ```text
/// mitigated = damage - damage * min(ac, 240) / 400
/// ```
///
/// Armor beyond [`GameConfig::ARMOR_CLAMP`] gives no further benefit, so
/// mitigation tops out at 60%.
pub fn adjust_dam_armor(damage: i32, ac: i32) -> i32 {
    damage - damage * ac.clamp(0, GameConfig::ARMOR_CLAMP) / 400
}

/// Adjust elemental damage for the defender's resistance level.
///
/// Immunity negates the damage entirely; resistance divides it by a
/// randomized factor between 2x and 3x; vulnerability adds up to half
/// again. An unresisted element passes damage through unchanged and
/// draws no random number.
pub fn adjust_dam_elemental(dice: &mut DiceRoller, level: ResistLevel, damage: i32) -> i32 {
    match level {
        ResistLevel::Immune => 0,
        ResistLevel::Resist => damage * 100 / (200 + dice.randint1(100)),
        ResistLevel::None => damage,
        ResistLevel::Vulnerable => damage + damage * dice.randint1(50) / 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn armor_mitigation_scales_with_ac() {
        assert_eq!(adjust_dam_armor(100, 0), 100);
        assert_eq!(adjust_dam_armor(100, 100), 75);
        assert_eq!(adjust_dam_armor(100, 200), 50);
        // Clamped at 240: 60% reduction is the ceiling.
        assert_eq!(adjust_dam_armor(100, 240), 40);
        assert_eq!(adjust_dam_armor(100, 1000), 40);
        // Negative armor gives no bonus damage.
        assert_eq!(adjust_dam_armor(100, -50), 100);
    }

    #[test]
    fn elemental_adjustment_ordering() {
        let rng = PcgRng;
        let mut dice = DiceRoller::new(&rng, 99);

        assert_eq!(
            adjust_dam_elemental(&mut dice, ResistLevel::Immune, 120),
            0
        );
        assert_eq!(adjust_dam_elemental(&mut dice, ResistLevel::None, 120), 120);

        for _ in 0..20 {
            let resisted = adjust_dam_elemental(&mut dice, ResistLevel::Resist, 120);
            assert!(resisted >= 120 / 3 && resisted <= 120 / 2);
            let boosted = adjust_dam_elemental(&mut dice, ResistLevel::Vulnerable, 120);
            assert!(boosted > 120 && boosted <= 180);
        }
    }
}
