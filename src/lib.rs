//! Railway-style outcome types and the validation pipeline that runs in front
//! of every command and query handler.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{
    ApplicationError, ApplicationResult, Dispatcher, Request, RequestHandler,
    validation::{RuleValidator, ValidationBehavior, Validator, ValidatorRegistry, Violations},
};
pub use config::CoreConfig;
pub use domain::{Error, ErrorCategory, Maybe, Outcome, ValidationDetail, ValueOutcome};
