//! Service layer for SCM server endpoint registration and discovery.
//!
//! Provides [`ScmServerRegistry`], which owns the configuration store behind
//! a mutex and exposes only composed operations: create, get, and list.

use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::scm_server::{
    domain::{CreateServerRequest, Endpoint, ScmKind, ServerRepresentation},
    error::{BAD_REQUEST, INTERNAL_ERROR, NOT_FOUND, ValidationFailure},
    ports::{EndpointStore, EndpointStoreError, ReachabilityProbe},
    validation::{CreateRequestValidator, rules},
};

/// Service-level errors for registry operations.
#[derive(Debug, Clone, Error)]
pub enum ScmRegistryError {
    /// The request failed validation; the caller can correct and resubmit.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// No endpoint has the requested name.
    #[error("SCM server not found: {0}")]
    NotFound(String),

    /// The configuration store failed; the request itself was acceptable.
    #[error(transparent)]
    Persistence(#[from] EndpointStoreError),
}

impl ScmRegistryError {
    /// Returns the HTTP-style status code for the error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => BAD_REQUEST,
            Self::NotFound(_) => NOT_FOUND,
            Self::Persistence(_) => INTERNAL_ERROR,
        }
    }

    /// Returns the validation failure, if this is one.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Validation(failure) => Some(failure),
            Self::NotFound(_) | Self::Persistence(_) => None,
        }
    }
}

/// Result type for registry service operations.
pub type ScmRegistryResult<T> = Result<T, ScmRegistryError>;

/// Registry of SCM server endpoints of one [`ScmKind`].
///
/// Every read of the store and every check-append-save sequence runs under
/// the same mutex, so two concurrent creations of the same name or URL can
/// never both succeed. The reachability probe runs outside the lock.
#[derive(Debug)]
pub struct ScmServerRegistry<S, P> {
    kind: ScmKind,
    store: Mutex<S>,
    probe: P,
}

impl<S, P> ScmServerRegistry<S, P>
where
    S: EndpointStore,
    P: ReachabilityProbe,
{
    /// Creates a registry over `store`, probing candidates with `probe`.
    #[must_use]
    pub const fn new(kind: ScmKind, store: S, probe: P) -> Self {
        Self {
            kind,
            store: Mutex::new(store),
            probe,
        }
    }

    /// Returns the server kind this registry manages.
    #[must_use]
    pub const fn kind(&self) -> ScmKind {
        self.kind
    }

    /// Registers a new endpoint.
    ///
    /// Validation runs against a snapshot and probes the URL without holding
    /// the lock. The uniqueness re-check, append, and save then run in one
    /// critical section. If the save fails the in-memory collection is
    /// restored.
    ///
    /// # Errors
    ///
    /// Returns [`ScmRegistryError::Validation`] with every failed rule, or
    /// with `ALREADY_EXISTS` errors when a concurrent creation won the race.
    /// Returns [`ScmRegistryError::Persistence`] when the store cannot be
    /// locked or saved.
    pub fn create(&self, request: &CreateServerRequest) -> ScmRegistryResult<ServerRepresentation> {
        let snapshot = self.lock()?.endpoints().to_vec();
        let endpoint = CreateRequestValidator::new(self.kind, &self.probe)
            .validate(request, &snapshot)
            .inspect_err(|failure| {
                debug!(
                    kind = %self.kind,
                    errors = failure.errors().len(),
                    "rejected SCM server creation request"
                );
            })?;

        self.append(&endpoint)?;
        info!(
            kind = %self.kind,
            name = endpoint.name(),
            api_url = endpoint.api_url(),
            "registered SCM server"
        );
        Ok(ServerRepresentation::new(self.kind, &endpoint))
    }

    /// Finds an endpoint by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ScmRegistryError::NotFound`] when no endpoint has the name,
    /// or [`ScmRegistryError::Persistence`] when the store cannot be locked.
    pub fn get(&self, name: &str) -> ScmRegistryResult<ServerRepresentation> {
        let store = self.lock()?;
        rules::find_by_name(store.endpoints(), name)
            .map(|endpoint| ServerRepresentation::new(self.kind, endpoint))
            .ok_or_else(|| ScmRegistryError::NotFound(name.to_owned()))
    }

    /// Returns every endpoint sorted by name using ordinal comparison.
    ///
    /// # Errors
    ///
    /// Returns [`ScmRegistryError::Persistence`] when the store cannot be
    /// locked.
    pub fn list(&self) -> ScmRegistryResult<Vec<ServerRepresentation>> {
        let store = self.lock()?;
        let mut endpoints: Vec<&Endpoint> = store.endpoints().iter().collect();
        endpoints.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(endpoints
            .into_iter()
            .map(|endpoint| ServerRepresentation::new(self.kind, endpoint))
            .collect())
    }

    /// Consumes the registry, returning the underlying store.
    ///
    /// # Errors
    ///
    /// Returns [`ScmRegistryError::Persistence`] when the lock was poisoned.
    pub fn into_store(self) -> ScmRegistryResult<S> {
        self.store
            .into_inner()
            .map_err(|err| poisoned(&err).into())
    }

    fn append(&self, endpoint: &Endpoint) -> ScmRegistryResult<()> {
        let mut store = self.lock()?;

        let conflicts = rules::conflicts(endpoint, store.endpoints());
        if !conflicts.is_empty() {
            warn!(
                kind = %self.kind,
                name = endpoint.name(),
                api_url = endpoint.api_url(),
                "SCM server registered concurrently; rejecting duplicate"
            );
            return Err(ValidationFailure::new(self.kind, conflicts).into());
        }

        let previous = store.endpoints().to_vec();
        let mut updated = previous.clone();
        updated.push(endpoint.clone());
        store.set_endpoints(updated);

        if let Err(err) = store.save() {
            error!(kind = %self.kind, error = %err, "failed to save SCM server configuration");
            store.set_endpoints(previous);
            return Err(err.into());
        }
        Ok(())
    }

    fn lock(&self) -> ScmRegistryResult<MutexGuard<'_, S>> {
        self.store.lock().map_err(|err| poisoned(&err).into())
    }
}

fn poisoned(err: &impl std::fmt::Display) -> EndpointStoreError {
    EndpointStoreError::persistence(std::io::Error::other(err.to_string()))
}
