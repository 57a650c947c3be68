//! Transport-agnostic error response body.

use serde::Serialize;

use super::{ScmAccessError, ScmRegistryError};
use crate::scm_server::error::ValidationError;

/// Structured error body carrying an HTTP-style status code.
///
/// Validation failures carry their field errors; other failures carry only
/// a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ValidationError>,
}

impl ErrorResponse {
    /// Returns the status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Returns the summary message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the field errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl From<&ScmRegistryError> for ErrorResponse {
    fn from(err: &ScmRegistryError) -> Self {
        match err {
            ScmRegistryError::Validation(failure) => Self {
                code: failure.status_code(),
                message: failure.message().to_owned(),
                errors: failure.errors().to_vec(),
            },
            ScmRegistryError::NotFound(_) | ScmRegistryError::Persistence(_) => Self {
                code: err.status_code(),
                message: err.to_string(),
                errors: Vec::new(),
            },
        }
    }
}

impl From<&ScmAccessError> for ErrorResponse {
    fn from(err: &ScmAccessError) -> Self {
        Self {
            code: err.status_code(),
            message: err.to_string(),
            errors: Vec::new(),
        }
    }
}
