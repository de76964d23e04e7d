//! Traits describing the engine's environment.
//!
//! Oracles expose static blow method definitions and the random number
//! source. The [`Env`] aggregate bundles them so the turn loop can hand
//! the engine everything it needs without hard coupling to concrete
//! implementations.
mod error;
mod methods;
mod rng;

pub use error::OracleError;
pub use methods::{BlowMethod, BlowMethodOracle, MethodFlavor};
pub use rng::{DiceRoller, PcgRng, RngOracle, compute_seed};

/// Aggregates the read-only oracles required for blow resolution.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    methods: Option<&'a dyn BlowMethodOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> Env<'a> {
    pub fn new(
        methods: Option<&'a dyn BlowMethodOracle>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self { methods, rng }
    }

    pub fn with_all(methods: &'a dyn BlowMethodOracle, rng: &'a dyn RngOracle) -> Self {
        Self::new(Some(methods), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            methods: None,
            rng: None,
        }
    }

    /// Returns the method oracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MethodsNotAvailable` if no method oracle was
    /// provided.
    pub fn methods(&self) -> Result<&'a dyn BlowMethodOracle, OracleError> {
        self.methods.ok_or(OracleError::MethodsNotAvailable)
    }

    /// Returns the RNG oracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no RNG oracle was
    /// provided.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl core::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("methods", &self.methods.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}
