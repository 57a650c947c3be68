//! Field-level validation errors for endpoint creation.
//!
//! Validation problems are data: every failing rule contributes one
//! [`ValidationError`] and the whole batch travels in a single
//! [`ValidationFailure`].

use super::domain::{EndpointField, ScmKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// HTTP-style status code reported for validation failures.
pub const BAD_REQUEST: u16 = 400;

/// HTTP-style status code reported when a referenced resource is absent.
pub const NOT_FOUND: u16 = 404;

/// HTTP-style status code reported for storage and backend failures.
pub const INTERNAL_ERROR: u16 = 500;

/// Closed set of field-level failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorCode {
    /// The field is absent or empty.
    Missing,
    /// Another endpoint already uses the value.
    AlreadyExists,
    /// The value was rejected by the reachability probe.
    Invalid,
}

impl ValidationErrorCode {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "MISSING",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    field: EndpointField,
    code: ValidationErrorCode,
    message: String,
}

impl ValidationError {
    /// Creates a validation error.
    #[must_use]
    pub fn new(field: EndpointField, code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }

    /// Reports a missing or empty field.
    #[must_use]
    pub fn missing(field: EndpointField) -> Self {
        Self::new(
            field,
            ValidationErrorCode::Missing,
            format!("{field} is required"),
        )
    }

    /// Returns the failing field.
    #[must_use]
    pub const fn field(&self) -> EndpointField {
        self.field
    }

    /// Returns the failure code.
    #[must_use]
    pub const fn code(&self) -> ValidationErrorCode {
        self.code
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.field, self.code, self.message)
    }
}

/// Complete batch of validation errors for one creation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}: {}", format_errors(.errors))]
pub struct ValidationFailure {
    message: String,
    errors: Vec<ValidationError>,
}

impl ValidationFailure {
    /// Creates a failure for a creation attempt against `kind`.
    #[must_use]
    pub fn new(kind: ScmKind, errors: Vec<ValidationError>) -> Self {
        Self {
            message: format!("Failed to create {} server", kind.display_name()),
            errors,
        }
    }

    /// Returns the HTTP-style status code, always `400`.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        BAD_REQUEST
    }

    /// Returns the summary message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the field errors in rule order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the failure, returning the field errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
