//! Aggregating validator for endpoint creation requests.

use crate::scm_server::{
    domain::{CreateServerRequest, Endpoint, ScmKind},
    error::{ValidationError, ValidationFailure},
    ports::ReachabilityProbe,
    validation::rules,
};

/// Runs every creation rule, collecting errors instead of stopping at the
/// first one.
///
/// The probe is only invoked when an API URL was supplied; it runs even when
/// the URL is already registered so the caller sees every problem at once.
#[derive(Debug)]
pub struct CreateRequestValidator<'a, P: ?Sized> {
    kind: ScmKind,
    probe: &'a P,
}

impl<'a, P> CreateRequestValidator<'a, P>
where
    P: ReachabilityProbe + ?Sized,
{
    /// Creates a validator for `kind` servers using `probe`.
    #[must_use]
    pub const fn new(kind: ScmKind, probe: &'a P) -> Self {
        Self { kind, probe }
    }

    /// Validates `request` against a snapshot of registered endpoints.
    ///
    /// On success returns the endpoint the request describes.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] carrying every failed rule, in rule
    /// order: name, API URL, reachability.
    pub fn validate(
        &self,
        request: &CreateServerRequest,
        endpoints: &[Endpoint],
    ) -> Result<Endpoint, ValidationFailure> {
        let mut errors = Vec::new();

        let name = collect(&mut errors, rules::validate_name(request.name(), endpoints));
        let api_url = collect(
            &mut errors,
            rules::validate_api_url(request.api_url(), endpoints),
        );

        if let Some(url) = request.api_url().filter(|candidate| !candidate.is_empty()) {
            collect(
                &mut errors,
                rules::validate_reachability(self.kind, url, self.probe),
            );
        }

        match (name, api_url) {
            (Some(valid_name), Some(valid_url)) if errors.is_empty() => {
                Ok(Endpoint::new(valid_name, valid_url))
            }
            _ => Err(ValidationFailure::new(self.kind, errors)),
        }
    }
}

fn collect<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}
