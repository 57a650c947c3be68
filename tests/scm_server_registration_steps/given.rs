//! Given steps for SCM server registration BDD scenarios.

use super::world::ServerWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use scm_registry::scm_server::domain::CreateServerRequest;

#[given("an empty SCM server registry")]
fn empty_registry(world: &ServerWorld) -> Result<(), eyre::Report> {
    let servers = world.registry.list().wrap_err("list servers")?;
    if !servers.is_empty() {
        return Err(eyre::eyre!("expected an empty registry, found {servers:?}"));
    }
    Ok(())
}

#[given(r#"a reachable GitHub Enterprise server at "{url}""#)]
fn reachable_server(world: &mut ServerWorld, url: String) {
    world.probe.mark_reachable(&url);
}

#[given(r#"a registered server "{name}" at "{url}""#)]
fn registered_server(
    world: &mut ServerWorld,
    name: String,
    url: String,
) -> Result<(), eyre::Report> {
    world.probe.mark_reachable(&url);
    world
        .registry
        .create(&CreateServerRequest::new(name, url))
        .wrap_err("register server for scenario")?;
    Ok(())
}
