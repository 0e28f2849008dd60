// src/domain/outcome/maybe.rs
use std::future::Future;

/// Presence or absence of a value, with no error attached.
///
/// Handlers usually return a plain `Option<T>` and convert it with `.into()`;
/// callers read the value back through [`Maybe::match_with`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    pub const fn some(value: T) -> Self {
        Self(Some(value))
    }

    pub const fn none() -> Self {
        Self(None)
    }

    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub const fn has_no_value(&self) -> bool {
        self.0.is_none()
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe(self.0.map(f))
    }

    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.0.map_or_else(Maybe::none, f)
    }

    /// Keeps the value only when `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self(self.0.filter(predicate))
    }

    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.0 {
            action(value);
        }
        self
    }

    pub fn tap_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.0.is_none() {
            action();
        }
        self
    }

    pub fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        self.0.map_or_else(on_none, on_some)
    }
}

impl<T> Maybe<T> {
    pub async fn map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.0 {
            Some(value) => Maybe::some(f(value).await),
            None => Maybe::none(),
        }
    }

    pub async fn bind_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self.0 {
            Some(value) => f(value).await,
            None => Maybe::none(),
        }
    }

    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        let keep = match &self.0 {
            Some(value) => predicate(value).await,
            None => false,
        };
        if keep { self } else { Self::none() }
    }

    pub async fn tap_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Some(value) = &self.0 {
            action(value).await;
        }
        self
    }

    pub async fn tap_none_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.0.is_none() {
            action().await;
        }
        self
    }

    pub async fn match_async<U, S, SFut, N, NFut>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = U>,
    {
        match self.0 {
            Some(value) => on_some(value).await,
            None => on_none().await,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}
