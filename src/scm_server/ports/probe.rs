//! Reachability probe port.

use std::sync::Arc;
use thiserror::Error;

/// Result type for reachability probes.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// One-shot network check that a URL answers like a server of the expected
/// kind.
///
/// Implementations block the calling thread, must bound the request with a
/// timeout, and must not retry.
pub trait ReachabilityProbe: Send + Sync {
    /// Probes `api_url`, succeeding only when the reply carries
    /// `signature_header`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::MissingSignature`] when the server answered
    /// without the header, or [`ProbeError::Transport`] for connection,
    /// timeout, and protocol failures.
    fn probe(&self, api_url: &str, signature_header: &str) -> ProbeResult<()>;
}

/// Reasons a probe rejected a URL.
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    /// The server replied without the expected signature header.
    #[error("response did not carry the {header} header")]
    MissingSignature {
        /// Header that was expected.
        header: String,
    },

    /// The request could not be completed.
    #[error("probe transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProbeError {
    /// Reports a reply without the expected signature header.
    pub fn missing_signature(header: impl Into<String>) -> Self {
        Self::MissingSignature {
            header: header.into(),
        }
    }

    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
