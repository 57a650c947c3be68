//! Credential binding check for a configured SCM server.
//!
//! Before a client talks to an SCM server it needs a stored credential
//! scoped to that server's kind. This service derives the credential
//! identity for an API URL and confirms the credential store holds it,
//! without ever reading the secret.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::scm_server::{
    domain::ScmKind,
    error::{BAD_REQUEST, INTERNAL_ERROR, NOT_FOUND},
    ports::{CredentialStore, CredentialStoreError},
};

/// Errors returned while resolving the credential for an SCM server.
#[derive(Debug, Clone, Error)]
pub enum ScmAccessError {
    /// No API URL was supplied.
    #[error("apiUrl is required parameter")]
    MissingApiUrl,

    /// No credential is stored for the API URL.
    #[error("Credential not found for apiUrl={0}")]
    CredentialNotFound(String),

    /// The credential store could not be queried.
    #[error(transparent)]
    CredentialStore(#[from] CredentialStoreError),
}

impl ScmAccessError {
    /// Returns the HTTP-style status code for the error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingApiUrl => BAD_REQUEST,
            Self::CredentialNotFound(_) => NOT_FOUND,
            Self::CredentialStore(_) => INTERNAL_ERROR,
        }
    }
}

/// Credential identity confirmed to exist for an SCM server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialBinding {
    kind: ScmKind,
    api_url: String,
    credential_id: String,
    credential_domain_name: String,
}

impl CredentialBinding {
    /// Returns the server kind.
    #[must_use]
    pub const fn kind(&self) -> ScmKind {
        self.kind
    }

    /// Returns the API URL the credential is bound to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the credential identifier.
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

/// Verifies that a credential exists for an SCM server's API URL.
#[derive(Debug, Clone)]
pub struct ScmCredentialCheck<C> {
    kind: ScmKind,
    credentials: Arc<C>,
}

impl<C> ScmCredentialCheck<C>
where
    C: CredentialStore,
{
    /// Creates a check for `kind` servers against `credentials`.
    #[must_use]
    pub const fn new(kind: ScmKind, credentials: Arc<C>) -> Self {
        Self { kind, credentials }
    }

    /// Resolves the credential binding for `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScmAccessError::MissingApiUrl`] when the URL is absent or
    /// empty, [`ScmAccessError::CredentialNotFound`] when no credential is
    /// stored for it, or [`ScmAccessError::CredentialStore`] when the lookup
    /// fails.
    pub fn verify(&self, api_url: Option<&str>) -> Result<CredentialBinding, ScmAccessError> {
        let url = api_url
            .filter(|candidate| !candidate.is_empty())
            .ok_or(ScmAccessError::MissingApiUrl)?;
        let credential_id = self.kind.credential_id(url);
        let domain = self.kind.credential_domain_name();

        if !self.credentials.contains(&credential_id, domain)? {
            return Err(ScmAccessError::CredentialNotFound(url.to_owned()));
        }

        Ok(CredentialBinding {
            kind: self.kind,
            api_url: url.to_owned(),
            credential_id,
            credential_domain_name: domain.to_owned(),
        })
    }
}
