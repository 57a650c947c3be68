//! In-memory endpoint store.

use crate::scm_server::{
    domain::Endpoint,
    ports::{EndpointStore, EndpointStoreError, EndpointStoreResult},
};

/// Endpoint store kept entirely in memory.
///
/// Tracks the last saved collection and the number of successful saves so
/// callers can tell the working view apart from what was persisted. Saves
/// can be made to fail to exercise persistence error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEndpointStore {
    endpoints: Vec<Endpoint>,
    saved: Vec<Endpoint>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryEndpointStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `endpoints`, treated as persisted.
    #[must_use]
    pub fn with_endpoints(initial: impl IntoIterator<Item = Endpoint>) -> Self {
        let endpoints: Vec<Endpoint> = initial.into_iter().collect();
        Self {
            saved: endpoints.clone(),
            endpoints,
            ..Self::default()
        }
    }

    /// Makes every subsequent [`EndpointStore::save`] call fail.
    #[must_use]
    pub const fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Returns the collection as of the last successful save.
    #[must_use]
    pub fn saved_endpoints(&self) -> &[Endpoint] {
        &self.saved
    }

    /// Returns the number of successful saves.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.save_count
    }
}

impl EndpointStore for InMemoryEndpointStore {
    fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    fn set_endpoints(&mut self, endpoints: Vec<Endpoint>) {
        self.endpoints = endpoints;
    }

    fn save(&mut self) -> EndpointStoreResult<()> {
        if self.fail_saves {
            return Err(EndpointStoreError::persistence(std::io::Error::other(
                "in-memory store configured to reject saves",
            )));
        }
        self.saved.clone_from(&self.endpoints);
        self.save_count += 1;
        Ok(())
    }
}
