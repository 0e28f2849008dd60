// src/domain/errors.rs
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

/// Closed set of failure categories carried by every [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    None,
    Validation,
    NotFound,
    Conflict,
    Unauthorized,
    Forbidden,
    ServerError,
    ServiceUnavailable,
}

impl ErrorCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::ServerError => "server_error",
            Self::ServiceUnavailable => "service_unavailable",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violated rule for one property of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDetail {
    property_name: String,
    error_message: String,
    error_code: String,
}

impl ValidationDetail {
    #[must_use]
    pub fn new(
        property_name: impl Into<String>,
        error_message: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
            error_code: error_code.into(),
        }
    }

    #[must_use]
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[must_use]
    pub fn error_code(&self) -> &str {
        &self.error_code
    }
}

pub(crate) const VALIDATION_FAILED_CODE: &str = "Validation.Error";

static NONE: Error = Error {
    code: String::new(),
    message: String::new(),
    category: ErrorCategory::None,
    validation_details: Vec::new(),
};

/// Structured failure descriptor.
///
/// `code` is a dotted identifier such as `"Announcement.NotFound"` and
/// `message` is safe to show to an end user. [`Error::none`] marks the
/// absence of an error and is rejected by every failure constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ThisError)]
#[serde(rename_all = "camelCase")]
#[error("{code}: {message}")]
pub struct Error {
    code: String,
    message: String,
    category: ErrorCategory,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    validation_details: Vec<ValidationDetail>,
}

impl Error {
    fn new(category: ErrorCategory, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category,
            validation_details: Vec::new(),
        }
    }

    #[must_use]
    pub const fn none() -> &'static Self {
        &NONE
    }

    #[must_use]
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Validation, code, message)
    }

    #[must_use]
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::NotFound, code, message)
    }

    #[must_use]
    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Conflict, code, message)
    }

    #[must_use]
    pub fn unauthorized(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Unauthorized, code, message)
    }

    /// Authorization failures never describe the rule that was violated.
    #[must_use]
    pub fn forbidden() -> Self {
        Self::new(ErrorCategory::Forbidden, "General.Forbidden", "")
    }

    #[must_use]
    pub fn server_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::ServerError, code, message)
    }

    #[must_use]
    pub fn service_unavailable(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::ServiceUnavailable, code, message)
    }

    /// Failure used when an absent value is lifted into a payload outcome.
    #[must_use]
    pub fn null_value() -> Self {
        Self::not_found("Error.NullValue", "The specified result value is null.")
    }

    /// Aggregate failure built by the validation pipeline.
    pub(crate) fn validation_failed(details: Vec<ValidationDetail>) -> Self {
        let message = details
            .iter()
            .map(ValidationDetail::error_message)
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            validation_details: details,
            ..Self::validation(VALIDATION_FAILED_CODE, message)
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    #[must_use]
    pub fn validation_details(&self) -> &[ValidationDetail] {
        &self.validation_details
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.category == ErrorCategory::None
    }
}
