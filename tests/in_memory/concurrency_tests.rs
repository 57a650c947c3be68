//! Concurrent creation against a single registry.

use std::sync::Barrier;
use std::thread;

use super::helpers::GHE_URL;
use rstest::rstest;
use scm_registry::scm_server::{
    adapters::memory::InMemoryEndpointStore,
    domain::{CreateServerRequest, EndpointField, ScmKind},
    error::ValidationErrorCode,
    ports::{ProbeResult, ReachabilityProbe},
    services::{ScmRegistryError, ScmServerRegistry},
};

/// Probe that holds every caller until all racers have validated.
///
/// Each racer snapshots the empty registry before probing, so the only
/// thing that can reject the loser is the re-check inside the lock.
struct RendezvousProbe {
    barrier: Barrier,
}

impl ReachabilityProbe for RendezvousProbe {
    fn probe(&self, _api_url: &str, _signature_header: &str) -> ProbeResult<()> {
        self.barrier.wait();
        Ok(())
    }
}

#[rstest]
#[case(2)]
#[case(8)]
fn racing_identical_creations_have_one_winner(#[case] racers: usize) {
    let registry = ScmServerRegistry::new(
        ScmKind::GithubEnterprise,
        InMemoryEndpointStore::new(),
        RendezvousProbe {
            barrier: Barrier::new(racers),
        },
    );
    let request = CreateServerRequest::new("ghe1", GHE_URL);

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..racers)
            .map(|_| scope.spawn(|| registry.create(&request)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("racer should not panic"))
            .collect()
    });

    let winners = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(winners, 1);
    for result in results.iter().filter(|result| result.is_err()) {
        let Err(ScmRegistryError::Validation(failure)) = result else {
            panic!("loser should fail validation, got {result:?}");
        };
        let fields: Vec<EndpointField> =
            failure.errors().iter().map(|error| error.field()).collect();
        assert_eq!(fields, vec![EndpointField::Name, EndpointField::ApiUrl]);
        assert!(
            failure
                .errors()
                .iter()
                .all(|error| error.code() == ValidationErrorCode::AlreadyExists)
        );
    }

    assert_eq!(registry.list().expect("listing should succeed").len(), 1);
    let store = registry.into_store().expect("store should be recoverable");
    assert_eq!(store.save_count(), 1);
}

#[rstest]
fn distinct_concurrent_creations_all_succeed() {
    const RACERS: usize = 6;
    let registry = ScmServerRegistry::new(
        ScmKind::GithubEnterprise,
        InMemoryEndpointStore::new(),
        RendezvousProbe {
            barrier: Barrier::new(RACERS),
        },
    );

    thread::scope(|scope| {
        for index in 0..RACERS {
            let registry = &registry;
            scope.spawn(move || {
                registry
                    .create(&CreateServerRequest::new(
                        format!("ghe{index}"),
                        format!("https://ghe{index}.example.com/api/v3"),
                    ))
                    .expect("distinct creation should succeed");
            });
        }
    });

    let servers = registry.list().expect("listing should succeed");
    assert_eq!(servers.len(), RACERS);
    assert!(
        servers
            .windows(2)
            .all(|pair| matches!(pair, [left, right] if left.name() < right.name()))
    );
}
