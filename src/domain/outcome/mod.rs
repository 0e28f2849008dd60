// src/domain/outcome/mod.rs
mod maybe;
mod unit;
mod value;

pub use maybe::Maybe;
pub use unit::Outcome;
pub use value::ValueOutcome;
