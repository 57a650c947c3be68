//! Port contracts for SCM server registration.
//!
//! Ports define infrastructure-agnostic interfaces for the configuration
//! store, the reachability probe, and the credential store.

pub mod credentials;
pub mod probe;
pub mod store;

pub use credentials::{CredentialStore, CredentialStoreError, CredentialStoreResult};
pub use probe::{ProbeError, ProbeResult, ReachabilityProbe};
pub use store::{EndpointStore, EndpointStoreError, EndpointStoreResult};
