//! Shared helpers for SCM server registry integration tests.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use scm_registry::scm_server::ports::{ProbeError, ProbeResult, ReachabilityProbe};

/// Probe that answers from a configurable set of reachable URLs.
///
/// Unknown URLs are reported as servers without the signature header.
/// Clones share the same set.
#[derive(Debug, Clone, Default)]
pub struct StubProbe {
    reachable: Arc<RwLock<HashSet<String>>>,
}

impl StubProbe {
    /// Creates a probe with no reachable URLs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a probe accepting exactly `urls`.
    #[must_use]
    pub fn reachable<'a>(urls: impl IntoIterator<Item = &'a str>) -> Self {
        let probe = Self::new();
        for url in urls {
            probe.mark_reachable(url);
        }
        probe
    }

    /// Marks `url` as answering with the signature header.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by another test thread.
    pub fn mark_reachable(&self, url: &str) {
        self.reachable
            .write()
            .expect("probe lock should not be poisoned")
            .insert(url.to_owned());
    }
}

impl ReachabilityProbe for StubProbe {
    fn probe(&self, api_url: &str, signature_header: &str) -> ProbeResult<()> {
        let reachable = self
            .reachable
            .read()
            .map_err(|err| ProbeError::transport(std::io::Error::other(err.to_string())))?;
        if reachable.contains(api_url) {
            Ok(())
        } else {
            Err(ProbeError::missing_signature(signature_header))
        }
    }
}
