//! Data-driven blow method definitions and loaders.
//!
//! This crate houses the default blow method table and provides a RON
//! loader for method data files. Content is consumed by the turn loop
//! through the `BlowMethodOracle` trait and never appears in game state.

pub mod methods;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use methods::{ContentError, MethodRegistry};

#[cfg(feature = "loaders")]
pub use loaders::MethodLoader;
