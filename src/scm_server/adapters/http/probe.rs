//! Blocking HTTP reachability probe.

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue, InvalidHeaderValue};
use thiserror::Error;

use crate::scm_server::{
    config::ProbeConfig,
    ports::{ProbeError, ProbeResult, ReachabilityProbe},
};

/// Probe issuing a single `GET` and checking for a signature header.
///
/// The response status is ignored; only the presence of the header counts.
#[derive(Debug, Clone)]
pub struct HttpReachabilityProbe {
    client: Client,
    content_type: HeaderValue,
}

/// Errors returned while building an [`HttpReachabilityProbe`].
#[derive(Debug, Error)]
pub enum ProbeConfigError {
    /// A zero timeout would fail every probe.
    #[error("probe timeout must be greater than zero")]
    ZeroTimeout,

    /// The configured content type is not a valid header value.
    #[error("invalid probe content type '{value}': {source}")]
    InvalidContentType {
        /// Configured value.
        value: String,
        /// Header parsing failure.
        #[source]
        source: InvalidHeaderValue,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build probe HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl HttpReachabilityProbe {
    /// Builds a probe from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeConfigError::ZeroTimeout`] when `timeout_ms` is zero,
    /// [`ProbeConfigError::InvalidContentType`] when the content type is not
    /// a valid header value, or [`ProbeConfigError::Client`] when the HTTP
    /// client cannot be built.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeConfigError> {
        if config.timeout_ms == 0 {
            return Err(ProbeConfigError::ZeroTimeout);
        }
        let content_type = HeaderValue::from_str(&config.content_type).map_err(|source| {
            ProbeConfigError::InvalidContentType {
                value: config.content_type.clone(),
                source,
            }
        })?;
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            content_type,
        })
    }
}

impl ReachabilityProbe for HttpReachabilityProbe {
    fn probe(&self, api_url: &str, signature_header: &str) -> ProbeResult<()> {
        let response = self
            .client
            .get(api_url)
            .header(CONTENT_TYPE, self.content_type.clone())
            .send()
            .map_err(ProbeError::transport)?;

        if response.headers().contains_key(signature_header) {
            Ok(())
        } else {
            Err(ProbeError::missing_signature(signature_header))
        }
    }
}
