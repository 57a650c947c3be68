//! Unit tests for the SCM server registry.


use crate::scm_server::ports::{ProbeResult, ReachabilityProbe};
use mockall::mock;

mock! {
    pub Probe {}

    impl ReachabilityProbe for Probe {
        fn probe(&self, api_url: &str, signature_header: &str) -> ProbeResult<()>;
    }
}

/// Probe mock that accepts every URL.
pub(super) fn accepting_probe() -> MockProbe {
    let mut probe = MockProbe::new();
    probe.expect_probe().returning(|_, _| Ok(()));
    probe
}

pub(super) const GHE_URL: &str = "https://ghe.example.com/api/v3";
pub(super) const GHE_CREDENTIAL_ID: &str =
    "github-enterprise:c46c83c4d60a2a366adcfe9b99d27aa01d0ed7b0728e9bcb8f45bf70e98fbbc4";
