//! In-memory credential store.

use std::collections::HashSet;

use crate::scm_server::ports::{CredentialStore, CredentialStoreResult};

/// Credential store holding `(credential id, domain)` pairs only.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    credentials: HashSet<(String, String)>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a credential entry.
    #[must_use]
    pub fn with_credential(
        mut self,
        credential_id: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        self.credentials.insert((credential_id.into(), domain.into()));
        self
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn contains(&self, credential_id: &str, domain: &str) -> CredentialStoreResult<bool> {
        Ok(self
            .credentials
            .contains(&(credential_id.to_owned(), domain.to_owned())))
    }
}
