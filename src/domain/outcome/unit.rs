// src/domain/outcome/unit.rs
use super::ValueOutcome;
use crate::domain::errors::Error;
use std::future::Future;

/// Success or failure without a payload.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    inner: Result<(), Error>,
}

impl Outcome {
    pub const fn success() -> Self {
        Self { inner: Ok(()) }
    }

    /// # Panics
    ///
    /// Panics when `error` is [`Error::none`]; a failure must say what failed.
    #[track_caller]
    pub fn failure(error: Error) -> Self {
        assert!(
            !error.is_none(),
            "a failed outcome cannot carry Error::none()"
        );
        Self { inner: Err(error) }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.inner.is_err()
    }

    /// The failure, or [`Error::none`] for a success.
    #[must_use]
    pub const fn error(&self) -> &Error {
        match &self.inner {
            Ok(()) => Error::none(),
            Err(error) => error,
        }
    }

    /// # Errors
    ///
    /// Returns the carried [`Error`] when the outcome is a failure.
    pub fn into_result(self) -> Result<(), Error> {
        self.inner
    }

    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce() -> U,
    {
        self.inner
            .map_or_else(ValueOutcome::failure, |()| ValueOutcome::success(f()))
    }

    pub fn bind<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_success() { f() } else { self }
    }

    pub fn ensure<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce() -> bool,
    {
        if self.is_success() && !predicate() {
            return Self::failure(error);
        }
        self
    }

    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_success() {
            action();
        }
        self
    }

    pub fn tap_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Err(error) = &self.inner {
            action(error);
        }
        self
    }

    pub fn match_with<U, S, E>(self, on_success: S, on_failure: E) -> U
    where
        S: FnOnce() -> U,
        E: FnOnce(Error) -> U,
    {
        self.inner.map_or_else(on_failure, |()| on_success())
    }
}

impl Outcome {
    pub async fn map_async<U, F, Fut>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = U>,
    {
        match self.inner {
            Ok(()) => ValueOutcome::success(f().await),
            Err(error) => ValueOutcome::failure(error),
        }
    }

    pub async fn bind_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_success() { f().await } else { self }
    }

    pub async fn ensure_async<P, Fut>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce() -> Fut,
        Fut: Future<Output = bool>,
    {
        if self.is_success() && !predicate().await {
            return Self::failure(error);
        }
        self
    }

    pub async fn tap_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_success() {
            action().await;
        }
        self
    }

    pub async fn tap_error_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Err(error) = &self.inner {
            action(error).await;
        }
        self
    }

    pub async fn match_async<U, S, SFut, E, EFut>(self, on_success: S, on_failure: E) -> U
    where
        S: FnOnce() -> SFut,
        SFut: Future<Output = U>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = U>,
    {
        match self.inner {
            Ok(()) => on_success().await,
            Err(error) => on_failure(error).await,
        }
    }
}

impl From<Error> for Outcome {
    #[track_caller]
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> From<ValueOutcome<T>> for Outcome {
    fn from(outcome: ValueOutcome<T>) -> Self {
        outcome.match_with(|_| Self::success(), Self::failure)
    }
}
