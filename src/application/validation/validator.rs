// src/application/validation/validator.rs
use crate::{application::ApplicationResult, domain::errors::ValidationDetail};
use async_trait::async_trait;
use std::marker::PhantomData;
use tokio_util::sync::CancellationToken;

/// Checks one request and reports every rule it violates.
///
/// An empty list means the request is valid. Collaborator faults (a lookup
/// that times out, a dropped connection) are returned as `Err` and abort the
/// dispatch; they are never reported as violations.
///
/// The `cancel` token is the caller's own token, passed through unchanged.
#[async_trait]
pub trait Validator<R>: Send + Sync
where
    R: Send + Sync,
{
    async fn validate(
        &self,
        request: &R,
        cancel: &CancellationToken,
    ) -> ApplicationResult<Vec<ValidationDetail>>;
}

/// Ordered collector for the violations found by one validator.
#[derive(Debug, Default)]
pub struct Violations {
    details: Vec<ValidationDetail>,
}

impl Violations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        property: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> &mut Self {
        self.details
            .push(ValidationDetail::new(property, message, code));
        self
    }

    pub fn ensure(
        &mut self,
        holds: bool,
        property: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> &mut Self {
        if !holds {
            self.push(property, message, code);
        }
        self
    }

    pub fn not_empty(
        &mut self,
        property: impl Into<String>,
        value: &str,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> &mut Self {
        self.ensure(!value.trim().is_empty(), property, message, code)
    }

    /// Length is counted in characters, not bytes.
    pub fn max_length(
        &mut self,
        property: impl Into<String>,
        value: &str,
        max: usize,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> &mut Self {
        self.ensure(value.chars().count() <= max, property, message, code)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.details.len()
    }

    #[must_use]
    pub fn into_details(self) -> Vec<ValidationDetail> {
        self.details
    }
}

/// Validator built from synchronous rules.
///
/// ```ignore
/// let validator = RuleValidator::new(|cmd: &CreateThing, rules: &mut Violations| {
///     rules.not_empty("name", &cmd.name, "Name is required.", "Thing.NameRequired");
/// });
/// ```
pub struct RuleValidator<R, F> {
    rules: F,
    _request: PhantomData<fn(&R)>,
}

impl<R, F> RuleValidator<R, F>
where
    F: Fn(&R, &mut Violations) + Send + Sync,
{
    #[must_use]
    pub const fn new(rules: F) -> Self {
        Self {
            rules,
            _request: PhantomData,
        }
    }
}

#[async_trait]
impl<R, F> Validator<R> for RuleValidator<R, F>
where
    R: Send + Sync,
    F: Fn(&R, &mut Violations) + Send + Sync,
{
    async fn validate(
        &self,
        request: &R,
        _cancel: &CancellationToken,
    ) -> ApplicationResult<Vec<ValidationDetail>> {
        let mut violations = Violations::new();
        (self.rules)(request, &mut violations);
        Ok(violations.into_details())
    }
}
