/// Balance constants and structural limits for blow resolution.
///
/// These are compile-time constants; data-driven content (blow methods)
/// lives in `melee-content`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of slots in the defender's pack.
    pub const PACK_SIZE: usize = 23;
    /// Number of wearable equipment slots.
    pub const MAX_EQUIP_SLOTS: usize = 12;

    // ===== resolution limits =====
    /// Random slot picks before a theft/drain scan gives up.
    pub const MAX_STEAL_TRIES: usize = 10;
    /// Largest value a single coin object can carry; stolen hoards are
    /// split into chunks of at most this size.
    pub const MAX_COIN_VALUE: i64 = 32_767;
    /// Hoards above this size use the reduced theft formula.
    pub const LARGE_HOARD: i64 = 5_000;
    /// Upper bound on a timed status counter.
    pub const TIMED_MAX: i32 = 10_000;

    // ===== damage adjustment =====
    /// Armor above this value gives no further mitigation.
    pub const ARMOR_CLAMP: i32 = 240;
    /// Armor bonus granted against elemental delivery.
    pub const ELEMENTAL_AC_BONUS: i32 = 50;
    /// Cap on the inventory-destruction amount from one elemental blow.
    pub const INVEN_DESTROY_CAP: i32 = 300;

    // ===== drains and area effects =====
    /// Percent of total experience added to each drain's base amount.
    pub const LIFE_DRAIN_PERCENT: i64 = 2;
    /// Radius of the collapse triggered by a shattering blow.
    pub const COLLAPSE_RADIUS: i32 = 8;
    /// Minimum damage (after armor) for a shattering blow to collapse
    /// the surrounding area.
    pub const COLLAPSE_DAMAGE_THRESHOLD: i32 = 23;
}
