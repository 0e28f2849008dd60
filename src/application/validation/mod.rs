// src/application/validation/mod.rs
mod behavior;
mod registry;
mod shape;
mod validator;

pub use behavior::ValidationBehavior;
pub use registry::{ValidatorPort, ValidatorRegistry};
pub use shape::FailureShape;
pub use validator::{RuleValidator, Validator, Violations};
