// src/presentation/http/mod.rs
pub mod error;

pub use error::{HttpError, HttpResult, IntoHttpResult, status_for};
