// src/domain/outcome/value.rs
use super::Outcome;
use crate::domain::errors::Error;
use std::future::Future;

/// Success carrying a `T`, or failure carrying an [`Error`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueOutcome<T> {
    inner: Result<T, Error>,
}

impl<T> ValueOutcome<T> {
    pub const fn success(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// # Panics
    ///
    /// Panics when `error` is [`Error::none`].
    #[track_caller]
    pub fn failure(error: Error) -> Self {
        assert!(
            !error.is_none(),
            "a failed outcome cannot carry Error::none()"
        );
        Self { inner: Err(error) }
    }

    /// Lifts a possibly absent value; `None` becomes [`Error::null_value`].
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or_else(|| Self::failure(Error::null_value()), Self::success)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.inner.is_err()
    }

    #[must_use]
    pub const fn error(&self) -> &Error {
        match &self.inner {
            Ok(_) => Error::none(),
            Err(error) => error,
        }
    }

    /// # Panics
    ///
    /// Panics when called on a failure.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        let Ok(value) = &self.inner else {
            payload_of_failure(self.error())
        };
        value
    }

    /// # Panics
    ///
    /// Panics when called on a failure.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> T {
        let Ok(value) = self.inner else {
            payload_of_failure(self.error())
        };
        value
    }

    /// # Errors
    ///
    /// Returns the carried [`Error`] when the outcome is a failure.
    pub fn into_result(self) -> Result<T, Error> {
        self.inner
    }

    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.inner
            .map_or_else(ValueOutcome::failure, |value| ValueOutcome::success(f(value)))
    }

    pub fn bind<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> ValueOutcome<U>,
    {
        self.inner.map_or_else(ValueOutcome::failure, f)
    }

    /// Continues with a step that yields no payload.
    pub fn bind_outcome<F>(self, f: F) -> Outcome
    where
        F: FnOnce(T) -> Outcome,
    {
        self.inner.map_or_else(Outcome::failure, f)
    }

    pub fn ensure<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.inner.as_ref().is_ok_and(|value| !predicate(value)) {
            return Self::failure(error);
        }
        self
    }

    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self.inner {
            action(value);
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
        S: FnOnce(T) -> U,
        E: FnOnce(Error) -> U,
    {
        self.inner.map_or_else(on_failure, on_success)
    }
}

// The async forms take the same continuations as above, except that each one
// returns a future. A continuation handed `&T` or `&Error` must not hold the
// reference inside the future it returns.
impl<T> ValueOutcome<T> {
    pub async fn map_async<U, F, Fut>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.inner {
            Ok(value) => ValueOutcome::success(f(value).await),
            Err(error) => ValueOutcome::failure(error),
        }
    }

    pub async fn bind_async<U, F, Fut>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ValueOutcome<U>>,
    {
        match self.inner {
            Ok(value) => f(value).await,
            Err(error) => ValueOutcome::failure(error),
        }
    }

    pub async fn ensure_async<P, Fut>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        let holds = match &self.inner {
            Ok(value) => predicate(value).await,
            Err(_) => true,
        };
        if holds { self } else { Self::failure(error) }
    }

    pub async fn tap_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Ok(value) = &self.inner {
            action(value).await;
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
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = U>,
    {
        match self.inner {
            Ok(value) => on_success(value).await,
            Err(error) => on_failure(error).await,
        }
    }
}

impl<T> From<Error> for ValueOutcome<T> {
    #[track_caller]
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

#[track_caller]
fn payload_of_failure(error: &Error) -> ! {
    panic!("the value of a failed outcome cannot be accessed ({error})")
}
