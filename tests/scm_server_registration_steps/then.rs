//! Then steps for SCM server registration BDD scenarios.

use super::world::ServerWorld;
use rstest_bdd_macros::then;
use scm_registry::scm_server::{
    domain::ServerRepresentation, error::ValidationFailure, services::ScmRegistryResult,
};

fn last_result(
    world: &ServerWorld,
) -> Result<&ScmRegistryResult<ServerRepresentation>, eyre::Report> {
    world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result in scenario world"))
}

fn last_failure(world: &ServerWorld) -> Result<&ValidationFailure, eyre::Report> {
    match last_result(world)? {
        Err(err) => err
            .as_validation()
            .ok_or_else(|| eyre::eyre!("expected a validation failure, got {err}")),
        Ok(created) => Err(eyre::eyre!("expected failure, server {created:?} was created")),
    }
}

#[then(r#"registration succeeds with a "{kind}" credential id"#)]
fn registration_succeeds(world: &ServerWorld, kind: String) -> Result<(), eyre::Report> {
    let created = last_result(world)?
        .as_ref()
        .map_err(|err| eyre::eyre!("registration failed: {err}"))?;
    let prefix = format!("{kind}:");
    if !created.credential_id().starts_with(&prefix) {
        return Err(eyre::eyre!(
            "credential id {} does not start with {prefix}",
            created.credential_id()
        ));
    }
    Ok(())
}

#[then("registration fails with {count:usize} errors")]
fn registration_fails(world: &ServerWorld, count: usize) -> Result<(), eyre::Report> {
    let failure = last_failure(world)?;
    if failure.errors().len() != count {
        return Err(eyre::eyre!(
            "expected {count} errors, found {:?}",
            failure.errors()
        ));
    }
    Ok(())
}

#[then(r#"the error on field "{field}" is "{code}""#)]
fn error_on_field(world: &ServerWorld, field: String, code: String) -> Result<(), eyre::Report> {
    let failure = last_failure(world)?;
    let found = failure
        .errors()
        .iter()
        .any(|error| error.field().as_str() == field && error.code().as_str() == code);
    if !found {
        return Err(eyre::eyre!(
            "expected {code} on {field}, found {:?}",
            failure.errors()
        ));
    }
    Ok(())
}

#[then(r#"the registry lists "{names}""#)]
fn registry_lists(world: &ServerWorld, names: String) -> Result<(), eyre::Report> {
    let servers = world
        .registry
        .list()
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    let listed: Vec<&str> = servers.iter().map(ServerRepresentation::name).collect();
    let expected: Vec<&str> = names.split(',').map(str::trim).collect();
    if listed != expected {
        return Err(eyre::eyre!("expected {expected:?}, listed {listed:?}"));
    }
    Ok(())
}

#[then("the registry is empty")]
fn registry_is_empty(world: &ServerWorld) -> Result<(), eyre::Report> {
    let servers = world
        .registry
        .list()
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if !servers.is_empty() {
        return Err(eyre::eyre!("expected no servers, listed {servers:?}"));
    }
    Ok(())
}
