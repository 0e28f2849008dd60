// src/presentation/http/error.rs
use crate::{
    application::error::ApplicationError,
    config::CoreConfig,
    domain::{
        errors::{Error, ErrorCategory, ValidationDetail},
        outcome::{Outcome, ValueOutcome},
    },
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Status returned for a dispatch the caller abandoned.
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

#[must_use]
pub const fn status_for(category: ErrorCategory) -> StatusCode {
    match category {
        ErrorCategory::Validation => StatusCode::BAD_REQUEST,
        ErrorCategory::NotFound => StatusCode::NOT_FOUND,
        ErrorCategory::Conflict => StatusCode::CONFLICT,
        ErrorCategory::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCategory::Forbidden => StatusCode::FORBIDDEN,
        ErrorCategory::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCategory::ServerError | ErrorCategory::None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Problem `type` URI for a status. Statuses without a defining RFC section
/// use `about:blank`.
const fn problem_type(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "https://tools.ietf.org/html/rfc7231#section-6.5.1",
        401 => "https://tools.ietf.org/html/rfc7235#section-3.1",
        403 => "https://tools.ietf.org/html/rfc7231#section-6.5.3",
        404 => "https://tools.ietf.org/html/rfc7231#section-6.5.4",
        409 => "https://tools.ietf.org/html/rfc7231#section-6.5.8",
        500 => "https://tools.ietf.org/html/rfc7231#section-6.6.1",
        503 => "https://tools.ietf.org/html/rfc7231#section-6.6.4",
        _ => "about:blank",
    }
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: Box<ProblemBody>,
}

#[derive(Debug, Serialize)]
struct ProblemBody {
    #[serde(rename = "type")]
    kind: &'static str,
    title: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ValidationDetail>,
}

impl HttpError {
    #[must_use]
    pub fn from_error(error: &Error, config: &CoreConfig) -> Self {
        let status = status_for(error.category());
        let detail = (error.category() != ErrorCategory::Forbidden)
            .then(|| error.message().to_owned());
        let errors = if config.expose_validation_details() {
            error.validation_details().to_vec()
        } else {
            Vec::new()
        };
        Self::new(status, error.code().to_owned(), detail, errors)
    }

    /// Faults never expose their cause to the caller; it is logged instead.
    #[must_use]
    pub fn from_fault(fault: &ApplicationError) -> Self {
        if fault.is_cancelled() {
            let status = StatusCode::from_u16(CLIENT_CLOSED_REQUEST)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return Self::new(status, "General.Cancelled".into(), None, Vec::new());
        }

        tracing::error!(error = %fault, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "General.ServerError".into(),
            Some("An unexpected error occurred.".into()),
            Vec::new(),
        )
    }

    fn new(
        status: StatusCode,
        code: String,
        detail: Option<String>,
        errors: Vec<ValidationDetail>,
    ) -> Self {
        let body = Box::new(ProblemBody {
            kind: problem_type(status),
            title: status
                .canonical_reason()
                .unwrap_or("Client Closed Request")
                .to_string(),
            status: status.as_u16(),
            detail,
            code,
            errors,
        });
        Self { status, body }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    /// # Errors
    ///
    /// Returns the [`HttpError`] rendering of a failed outcome or a fault.
    fn into_http(self, config: &CoreConfig) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ValueOutcome<T> {
    fn into_http(self, config: &CoreConfig) -> HttpResult<T> {
        self.into_result()
            .map_err(|error| HttpError::from_error(&error, config))
    }
}

impl IntoHttpResult<()> for Outcome {
    fn into_http(self, config: &CoreConfig) -> HttpResult<()> {
        self.into_result()
            .map_err(|error| HttpError::from_error(&error, config))
    }
}

impl<T, O> IntoHttpResult<T> for Result<O, ApplicationError>
where
    O: IntoHttpResult<T>,
{
    fn into_http(self, config: &CoreConfig) -> HttpResult<T> {
        self.map_err(|fault| HttpError::from_fault(&fault))?
            .into_http(config)
    }
}
