//! In-memory adapters for tests and embedding.

mod credential_store;
mod endpoint_store;

pub use credential_store::InMemoryCredentialStore;
pub use endpoint_store::InMemoryEndpointStore;
