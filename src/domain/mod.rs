// src/domain/mod.rs
pub mod errors;
pub mod outcome;

pub use errors::{Error, ErrorCategory, ValidationDetail};
pub use outcome::{Maybe, Outcome, ValueOutcome};
