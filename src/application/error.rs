// src/application/error.rs
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Faults that abort a dispatch instead of producing an outcome.
///
/// Business failures never travel through this type; they are returned as
/// failed outcomes by validators and handlers.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("request was cancelled")]
    Cancelled,

    #[error("infrastructure failure: {0}")]
    Infrastructure(#[from] anyhow::Error),

    #[error("no handler registered for {0}")]
    HandlerNotRegistered(&'static str),
}

impl ApplicationError {
    #[must_use]
    pub fn infrastructure<M>(msg: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::Infrastructure(anyhow::Error::msg(msg))
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
