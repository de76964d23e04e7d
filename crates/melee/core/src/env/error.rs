/// Errors from [`Env`](super::Env) oracle accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// Method oracle not available.
    #[error("Blow methods not available")]
    MethodsNotAvailable,

    /// RNG oracle not available.
    #[error("RNG not available")]
    RngNotAvailable,
}
