// src/application/validation/behavior.rs
use super::{FailureShape, registry::ValidatorPort};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        request::Request,
    },
    domain::errors::{Error, ValidationDetail},
};
use futures::future::try_join_all;
use std::{future::Future, sync::Arc};
use tokio_util::sync::CancellationToken;

/// Runs the registered validators in front of a handler.
///
/// With no validators, or when every validator passes, `next` is invoked and
/// its result is returned untouched. Otherwise the handler is skipped and all
/// violations come back as one `Validation` failure shaped like the response.
pub struct ValidationBehavior<R> {
    validators: Vec<Arc<ValidatorPort<R>>>,
}

impl<R> ValidationBehavior<R>
where
    R: Request,
{
    #[must_use]
    pub const fn new(validators: Vec<Arc<ValidatorPort<R>>>) -> Self {
        Self { validators }
    }

    #[must_use]
    pub const fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// # Errors
    ///
    /// Returns [`ApplicationError::Cancelled`] when `cancel` fires before the
    /// validators finish, the first fault any validator raises, or whatever
    /// fault `next` returns.
    ///
    /// # Panics
    ///
    /// Panics when validation fails for a request whose response type cannot
    /// carry a failure.
    pub async fn handle<N, Fut>(
        &self,
        request: R,
        cancel: &CancellationToken,
        next: N,
    ) -> ApplicationResult<R::Response>
    where
        N: FnOnce(R) -> Fut,
        Fut: Future<Output = ApplicationResult<R::Response>>,
    {
        if self.validators.is_empty() {
            tracing::debug!(request = R::name(), "no validators registered");
            return next(request).await;
        }

        let details = self.collect_violations(&request, cancel).await?;
        if details.is_empty() {
            tracing::debug!(
                request = R::name(),
                validators = self.validators.len(),
                "validation passed"
            );
            return next(request).await;
        }

        tracing::info!(
            request = R::name(),
            violations = details.len(),
            "request rejected by validation"
        );
        Ok(shape_failure::<R>(Error::validation_failed(details)))
    }

    /// Runs every validator concurrently and flattens their reports in
    /// registration order. The first fault or a cancellation drops the rest.
    async fn collect_violations(
        &self,
        request: &R,
        cancel: &CancellationToken,
    ) -> ApplicationResult<Vec<ValidationDetail>> {
        if cancel.is_cancelled() {
            return Err(ApplicationError::Cancelled);
        }

        let fan_out = try_join_all(
            self.validators
                .iter()
                .map(|validator| validator.validate(request, cancel)),
        );

        let reports = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!(request = R::name(), "validation cancelled");
                return Err(ApplicationError::Cancelled);
            }
            reports = fan_out => reports?,
        };

        Ok(reports.into_iter().flatten().collect())
    }
}

fn shape_failure<R: Request>(error: Error) -> R::Response {
    let Some(response) = R::Response::from_validation_error(error) else {
        let response = std::any::type_name::<R::Response>();
        tracing::error!(
            request = R::name(),
            response,
            "validated request cannot carry a validation failure"
        );
        panic!(
            "{} failed validation but its response type {response} cannot carry a failure",
            R::name()
        );
    };
    response
}
