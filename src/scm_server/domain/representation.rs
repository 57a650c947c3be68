//! Read-only server view returned to callers.

use super::{Endpoint, ScmKind};
use serde::Serialize;

/// An [`Endpoint`] enriched with its derived credential identity.
///
/// Recomputed on every read; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRepresentation {
    name: String,
    api_url: String,
    credential_id: String,
    credential_domain_name: String,
}

impl ServerRepresentation {
    /// Builds the representation of `endpoint` for the given server kind.
    #[must_use]
    pub fn new(kind: ScmKind, endpoint: &Endpoint) -> Self {
        Self {
            name: endpoint.name().to_owned(),
            api_url: endpoint.api_url().to_owned(),
            credential_id: kind.credential_id(endpoint.api_url()),
            credential_domain_name: kind.credential_domain_name().to_owned(),
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

    /// Returns the derived credential identifier.
    #[must_use]
    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }

    /// Returns the credential domain tag.
    #[must_use]
    pub fn credential_domain_name(&self) -> &str {
        &self.credential_domain_name
    }
}
