//! Credential store port.
//!
//! The registry never reads secret material. It only asks whether a
//! credential exists for a derived identifier within a domain.

use std::sync::Arc;
use thiserror::Error;

/// Result type for credential store lookups.
pub type CredentialStoreResult<T> = Result<T, CredentialStoreError>;

/// External store resolving credential identifiers to secrets.
pub trait CredentialStore: Send + Sync {
    /// Returns whether a credential with `credential_id` exists in `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Lookup`] when the store cannot be
    /// queried.
    fn contains(&self, credential_id: &str, domain: &str) -> CredentialStoreResult<bool>;
}

/// Errors returned by credential store implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    /// The lookup itself failed.
    #[error("credential lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialStoreError {
    /// Wraps a lookup failure.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
