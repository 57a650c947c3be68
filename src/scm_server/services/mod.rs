//! Application services for SCM server registration.

mod credential;
mod registry;
mod response;

pub use credential::{CredentialBinding, ScmAccessError, ScmCredentialCheck};
pub use registry::{ScmRegistryError, ScmRegistryResult, ScmServerRegistry};
pub use response::ErrorResponse;
