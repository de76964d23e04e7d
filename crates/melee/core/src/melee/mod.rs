//! Melee blow effect resolution.
//!
//! The turn loop identifies a strike's effect kind by name, looks it up
//! with [`BlowEffect::lookup`], builds a [`BlowContext`] for the blow,
//! invokes [`BlowEffect::resolve`], and consumes the returned outcome
//! flags and messages.

pub mod context;
pub mod effect;
mod handlers;
mod learn;
pub mod method;

pub use context::{AreaHooks, BlowContext, MessageLog, NoAreaHooks};
pub use effect::BlowEffect;
pub use method::blow_method_action;
