//! Shared fixtures for in-memory registry integration tests.

use crate::test_helpers::StubProbe;
use rstest::fixture;
use scm_registry::scm_server::{
    adapters::memory::InMemoryEndpointStore, domain::ScmKind, services::ScmServerRegistry,
};

/// Registry type used by in-memory integration tests.
pub type TestRegistry = ScmServerRegistry<InMemoryEndpointStore, StubProbe>;

/// API URL of the primary test server.
pub const GHE_URL: &str = "https://ghe.example.com/api/v3";

/// API URL of the secondary test server.
pub const GHE2_URL: &str = "https://ghe2.example.com/api/v3";

/// Provides an empty registry whose probe accepts both test servers.
#[fixture]
pub fn registry() -> TestRegistry {
    ScmServerRegistry::new(
        ScmKind::GithubEnterprise,
        InMemoryEndpointStore::new(),
        StubProbe::reachable([GHE_URL, GHE2_URL]),
    )
}
