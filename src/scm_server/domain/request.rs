//! Endpoint creation request.

use serde::Deserialize;

/// Request payload for registering a new SCM server endpoint.
///
/// Both fields are optional on the wire so that absence can be reported as a
/// validation error rather than a decoding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateServerRequest {
    name: Option<String>,
    api_url: Option<String>,
}

impl CreateServerRequest {
    /// Creates a request with both fields present.
    #[must_use]
    pub fn new(name: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            api_url: Some(api_url.into()),
        }
    }

    /// Creates a request from possibly absent fields.
    #[must_use]
    pub const fn from_parts(name: Option<String>, api_url: Option<String>) -> Self {
        Self { name, api_url }
    }

    /// Returns the requested name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the requested API URL, if any.
    #[must_use]
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}
