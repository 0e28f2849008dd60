// src/application/validation/shape.rs
use crate::domain::{
    errors::Error,
    outcome::{Maybe, Outcome, ValueOutcome},
};

/// Response types the validation pipeline can turn into a failure.
///
/// `None` means the shape has nowhere to put an [`Error`]; a request that
/// returns such a shape must not fail validation.
pub trait FailureShape: Sized {
    fn from_validation_error(error: Error) -> Option<Self>;
}

impl FailureShape for Outcome {
    fn from_validation_error(error: Error) -> Option<Self> {
        Some(Self::failure(error))
    }
}

impl<T> FailureShape for ValueOutcome<T> {
    fn from_validation_error(error: Error) -> Option<Self> {
        Some(Self::failure(error))
    }
}

impl<T> FailureShape for Maybe<T> {
    fn from_validation_error(_error: Error) -> Option<Self> {
        None
    }
}
