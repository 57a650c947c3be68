//! Registered SCM server endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered `(name, apiUrl)` pair identifying one external SCM server.
///
/// Endpoints are immutable once created. Uniqueness of both fields is
/// enforced by the registry service, not by this type, because persisted
/// collections are reconstructed verbatim from the configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    name: String,
    api_url: String,
}

impl Endpoint {
    /// Creates an endpoint from its name and API URL.
    #[must_use]
    pub fn new(name: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_url: api_url.into(),
        }
    }

    /// Returns the endpoint name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the endpoint API URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Input fields of an endpoint creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointField {
    /// The `name` field.
    #[serde(rename = "name")]
    Name,
    /// The `apiUrl` field.
    #[serde(rename = "apiUrl")]
    ApiUrl,
}

impl EndpointField {
    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ApiUrl => "apiUrl",
        }
    }
}

impl fmt::Display for EndpointField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
