//! Blow effect kinds and dispatch.
//!
//! The set of effects is closed at build time: an enum variant per
//! effect, a case-insensitive name lookup, and a single match from
//! variant to handler. An unrecognized name is not an error; the caller
//! degrades to bare-damage behavior.

use core::str::FromStr;

use super::context::BlowContext;
use super::handlers;

/// Named mechanical consequence of a blow.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlowEffect {
    None,
    Hurt,
    Poison,
    Disenchant,
    DrainCharges,
    EatGold,
    EatItem,
    EatFood,
    EatLight,
    Acid,
    Elec,
    Fire,
    Cold,
    Blind,
    Confuse,
    Terrify,
    Paralyze,
    LoseStr,
    LoseInt,
    LoseWis,
    LoseDex,
    LoseCon,
    LoseAll,
    Shatter,
    #[strum(serialize = "EXP_10")]
    Exp10,
    #[strum(serialize = "EXP_20")]
    Exp20,
    #[strum(serialize = "EXP_40")]
    Exp40,
    #[strum(serialize = "EXP_80")]
    Exp80,
    Hallu,
}

impl BlowEffect {
    /// Case-insensitive lookup by effect name.
    ///
    /// Returns None for unrecognized names; the caller falls back to
    /// damage-only resolution.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }

    /// Resolve one blow's effect against the context.
    ///
    /// Mutates defender and attacker state through the context and sets
    /// the outcome flags (`obvious`, `blinked`, `do_break`).
    pub fn resolve(self, ctx: &mut BlowContext) {
        match self {
            Self::None => handlers::misc::none(ctx),
            Self::Hurt => handlers::misc::hurt(ctx),
            Self::Poison => handlers::elemental::poison(ctx),
            Self::Disenchant => handlers::drain::disenchant(ctx),
            Self::DrainCharges => handlers::drain::drain_charges(ctx),
            Self::EatGold => handlers::theft::eat_gold(ctx),
            Self::EatItem => handlers::theft::eat_item(ctx),
            Self::EatFood => handlers::theft::eat_food(ctx),
            Self::EatLight => handlers::theft::eat_light(ctx),
            Self::Acid => handlers::elemental::acid(ctx),
            Self::Elec => handlers::elemental::elec(ctx),
            Self::Fire => handlers::elemental::fire(ctx),
            Self::Cold => handlers::elemental::cold(ctx),
            Self::Blind => handlers::timed::blind(ctx),
            Self::Confuse => handlers::timed::confuse(ctx),
            Self::Terrify => handlers::timed::terrify(ctx),
            Self::Paralyze => handlers::timed::paralyze(ctx),
            Self::LoseStr => handlers::drain::lose_str(ctx),
            Self::LoseInt => handlers::drain::lose_int(ctx),
            Self::LoseWis => handlers::drain::lose_wis(ctx),
            Self::LoseDex => handlers::drain::lose_dex(ctx),
            Self::LoseCon => handlers::drain::lose_con(ctx),
            Self::LoseAll => handlers::drain::lose_all(ctx),
            Self::Shatter => handlers::misc::shatter(ctx),
            Self::Exp10 => handlers::drain::exp_10(ctx),
            Self::Exp20 => handlers::drain::exp_20(ctx),
            Self::Exp40 => handlers::drain::exp_40(ctx),
            Self::Exp80 => handlers::drain::exp_80(ctx),
            Self::Hallu => handlers::timed::hallu(ctx),
        }
    }
}
