//! When steps for SCM server registration BDD scenarios.

use super::world::ServerWorld;
use rstest_bdd_macros::when;
use scm_registry::scm_server::domain::CreateServerRequest;

#[when(r#"the server "{name}" is registered with API URL "{url}""#)]
fn register_server(world: &mut ServerWorld, name: String, url: String) {
    let result = world.registry.create(&CreateServerRequest::new(name, url));
    world.last_create_result = Some(result);
}

#[when("a server is registered with no name and no API URL")]
fn register_empty_request(world: &mut ServerWorld) {
    let result = world.registry.create(&CreateServerRequest::default());
    world.last_create_result = Some(result);
}
