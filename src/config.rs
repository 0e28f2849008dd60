// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct CoreConfig {
    log_filter: String,
    trace_dispatch: bool,
    expose_validation_details: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info".into()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            trace_dispatch: true,
            expose_validation_details: true,
        }
    }
}

impl CoreConfig {
    /// Build configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a flag holds something other
    /// than `1`, `0`, `true` or `false`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CoreConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a malformed flag.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        let trace_dispatch = flag_or_true(&lookup, "DISPATCH_TRACE")?;
        let expose_validation_details = flag_or_true(&lookup, "PROBLEM_EXPOSE_DETAILS")?;

        Ok(Self {
            log_filter,
            trace_dispatch,
            expose_validation_details,
        })
    }

    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Whether each dispatch runs inside its own `dispatch` span.
    #[must_use]
    pub const fn trace_dispatch(&self) -> bool {
        self.trace_dispatch
    }

    /// Whether HTTP problem bodies list individual validation details.
    #[must_use]
    pub const fn expose_validation_details(&self) -> bool {
        self.expose_validation_details
    }

    #[must_use]
    pub const fn with_expose_validation_details(mut self, expose: bool) -> Self {
        self.expose_validation_details = expose;
        self
    }
}

fn flag_or_true<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    lookup(key).map_or(Ok(true), |value| parse_flag(key, &value))
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be one of 1, 0, true, false (got {other:?})"
        ))),
    }
}
