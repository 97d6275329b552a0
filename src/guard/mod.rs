//! Guard module - capability contracts, error kinds, and the wrapping factory

pub mod capability;
pub mod error;
pub mod wrap;

pub use capability::{FallbackAction, InputValidator, ResultValidator};
pub use error::GuardError;
pub use wrap::{Guard, Guarded, NoFallback};
