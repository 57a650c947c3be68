//! Configuration for the reachability probe.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the creation-time reachability probe.
///
/// Deserialises from a partial document; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use scm_registry::scm_server::config::ProbeConfig;
/// use std::time::Duration;
///
/// let config = ProbeConfig::default();
/// assert_eq!(config.timeout(), Duration::from_secs(5));
///
/// let quick = ProbeConfig::default().with_timeout(Duration::from_millis(250));
/// assert_eq!(quick.timeout_ms, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProbeConfig {
    /// Whole-request timeout in milliseconds.
    ///
    /// Must be non-zero; the HTTP probe refuses to build with a zero
    /// timeout because every request would fail.
    pub timeout_ms: u64,
    /// Value sent in the `Content-Type` request header.
    pub content_type: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            content_type: "application/json".to_owned(),
        }
    }
}

impl ProbeConfig {
    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Replaces the request timeout, saturating at `u64::MAX` milliseconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }
}
