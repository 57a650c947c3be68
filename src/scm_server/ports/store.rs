//! Configuration store port holding the ordered endpoint collection.

use crate::scm_server::domain::Endpoint;
use std::sync::Arc;
use thiserror::Error;

/// Result type for endpoint store operations.
pub type EndpointStoreResult<T> = Result<T, EndpointStoreError>;

/// Persistent configuration store for registered endpoints.
///
/// The store is the single source of truth. Implementations need no
/// internal synchronisation: the registry service owns the store behind a
/// mutex and calls all three methods while holding it.
pub trait EndpointStore: Send {
    /// Returns the current endpoints in stored order.
    fn endpoints(&self) -> &[Endpoint];

    /// Replaces the in-memory endpoint collection.
    fn set_endpoints(&mut self, endpoints: Vec<Endpoint>);

    /// Durably writes the current collection.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointStoreError::Persistence`] when the write fails.
    fn save(&mut self) -> EndpointStoreResult<()>;
}

/// Errors returned by endpoint store implementations.
#[derive(Debug, Clone, Error)]
pub enum EndpointStoreError {
    /// Stored data could not be decoded into endpoints.
    #[error("invalid stored endpoint data: {0}")]
    InvalidStoredData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EndpointStoreError {
    /// Wraps a decoding error from the stored document.
    pub fn invalid_stored_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidStoredData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
