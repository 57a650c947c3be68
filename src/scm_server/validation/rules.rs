//! Field-level validation rules.
//!
//! Each rule inspects one aspect of a creation request against a snapshot
//! of the registered endpoints and reports at most one error.

use tracing::info;

use crate::scm_server::{
    domain::{Endpoint, EndpointField, ScmKind},
    error::{ValidationError, ValidationErrorCode},
    ports::{ProbeError, ReachabilityProbe},
};

/// Finds an endpoint by exact, case-sensitive name.
#[must_use]
pub fn find_by_name<'a>(endpoints: &'a [Endpoint], name: &str) -> Option<&'a Endpoint> {
    endpoints.iter().find(|endpoint| endpoint.name() == name)
}

/// Finds an endpoint by exact API URL.
#[must_use]
pub fn find_by_api_url<'a>(endpoints: &'a [Endpoint], api_url: &str) -> Option<&'a Endpoint> {
    endpoints.iter().find(|endpoint| endpoint.api_url() == api_url)
}

/// Requires a non-empty name that no registered endpoint uses.
///
/// # Errors
///
/// Returns a `MISSING` error when the name is absent or empty, or an
/// `ALREADY_EXISTS` error naming the conflicting endpoint's URL.
pub fn validate_name<'a>(
    raw_name: Option<&'a str>,
    endpoints: &[Endpoint],
) -> Result<&'a str, ValidationError> {
    let name = require(EndpointField::Name, raw_name)?;
    match find_by_name(endpoints, name) {
        Some(existing) => Err(name_conflict(existing)),
        None => Ok(name),
    }
}

/// Requires a non-empty API URL that no registered endpoint uses.
///
/// # Errors
///
/// Returns a `MISSING` error when the URL is absent or empty, or an
/// `ALREADY_EXISTS` error naming the conflicting endpoint.
pub fn validate_api_url<'a>(
    raw_api_url: Option<&'a str>,
    endpoints: &[Endpoint],
) -> Result<&'a str, ValidationError> {
    let api_url = require(EndpointField::ApiUrl, raw_api_url)?;
    match find_by_api_url(endpoints, api_url) {
        Some(existing) => Err(api_url_conflict(existing)),
        None => Ok(api_url),
    }
}

/// Probes `api_url` for the signature of a `kind` server.
///
/// Transport failures are logged and folded into the same `INVALID` code as
/// a missing signature.
///
/// # Errors
///
/// Returns an `INVALID` error on the `apiUrl` field when the probe fails.
pub fn validate_reachability<P>(
    kind: ScmKind,
    api_url: &str,
    probe: &P,
) -> Result<(), ValidationError>
where
    P: ReachabilityProbe + ?Sized,
{
    probe
        .probe(api_url, kind.signature_header())
        .map_err(|err| match err {
            ProbeError::MissingSignature { .. } => ValidationError::new(
                EndpointField::ApiUrl,
                ValidationErrorCode::Invalid,
                format!("Specified URL is not a {} server", kind.display_name()),
            ),
            ProbeError::Transport(cause) => {
                info!(api_url, error = %cause, "could not connect to SCM server");
                ValidationError::new(
                    EndpointField::ApiUrl,
                    ValidationErrorCode::Invalid,
                    format!("Could not connect to {}", kind.display_name()),
                )
            }
        })
}

/// Reports every uniqueness conflict between `candidate` and `endpoints`.
///
/// Used to re-check a validated candidate inside the registry's critical
/// section.
#[must_use]
pub fn conflicts(candidate: &Endpoint, endpoints: &[Endpoint]) -> Vec<ValidationError> {
    let by_name = find_by_name(endpoints, candidate.name()).map(name_conflict);
    let by_url = find_by_api_url(endpoints, candidate.api_url()).map(api_url_conflict);
    by_name.into_iter().chain(by_url).collect()
}

fn require(field: EndpointField, value: Option<&str>) -> Result<&str, ValidationError> {
    value
        .filter(|present| !present.is_empty())
        .ok_or_else(|| ValidationError::missing(field))
}

fn name_conflict(existing: &Endpoint) -> ValidationError {
    ValidationError::new(
        EndpointField::Name,
        ValidationErrorCode::AlreadyExists,
        format!("name already exists for server at '{}'", existing.api_url()),
    )
}

fn api_url_conflict(existing: &Endpoint) -> ValidationError {
    ValidationError::new(
        EndpointField::ApiUrl,
        ValidationErrorCode::AlreadyExists,
        format!("apiUrl is already registered as '{}'", existing.name()),
    )
}
