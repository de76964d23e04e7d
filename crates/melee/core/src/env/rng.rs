//! RNG oracle for deterministic random number generation.
//!
//! Blow resolution draws every random number through a trait-based oracle
//! so that a whole scenario can be replayed from a seed, and so tests can
//! substitute a scripted source.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. The oracle
//! itself is stateless; call-order reproducibility within one blow comes
//! from [`DiceRoller`], which mixes a per-blow seed with a call counter.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync + core::fmt::Debug {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Deterministic, fast,
/// small state, good statistical quality.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step (LCG formula).
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic per-call seed from a base seed and call index.
///
/// The mixing constants are based on SplitMix64 and FxHash multipliers.
pub fn compute_seed(base_seed: u64, call: u64) -> u64 {
    let mut hash = base_seed;

    hash ^= call.wrapping_mul(0x9e3779b97f4a7c15);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Call-counting dice roller over an [`RngOracle`].
///
/// One roller is created per blow with that blow's seed; every roll
/// advances the counter, so the sequence of rolls is reproducible in
/// call order from the seed alone.
pub struct DiceRoller<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    calls: u64,
}

impl<'a> DiceRoller<'a> {
    pub fn new(rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self {
            rng,
            seed,
            calls: 0,
        }
    }

    fn next_u32(&mut self) -> u32 {
        let seed = compute_seed(self.seed, self.calls);
        self.calls += 1;
        self.rng.next_u32(seed)
    }

    /// Random integer in `[0, n)`. Returns 0 when `n <= 0`.
    pub fn randint0(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        (self.next_u32() % n as u32) as i32
    }

    /// Random integer in `[1, n]`. Returns 1 when `n <= 0`.
    pub fn randint1(&mut self, n: i32) -> i32 {
        self.randint0(n) + 1
    }

    /// Roll `num` dice with `sides` sides each and sum them.
    pub fn damroll(&mut self, num: i32, sides: i32) -> i32 {
        let mut total = 0;
        for _ in 0..num {
            total += self.randint1(sides);
        }
        total
    }

    /// True with probability `percent` out of 100.
    pub fn chance(&mut self, percent: i32) -> bool {
        self.randint0(100) < percent
    }
}

impl core::fmt::Debug for DiceRoller<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DiceRoller")
            .field("seed", &self.seed)
            .field("calls", &self.calls)
            .finish()
    }
}
