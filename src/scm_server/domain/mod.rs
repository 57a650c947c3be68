//! Domain model for SCM server endpoints.
//!
//! Endpoints are plain `(name, apiUrl)` pairs. Everything derived from an
//! endpoint, such as the credential identifier, is recomputed from the
//! [`ScmKind`] on every read and never persisted.

mod endpoint;
mod kind;
mod representation;
mod request;

pub use endpoint::{Endpoint, EndpointField};
pub use kind::{ParseScmKindError, ScmKind};
pub use representation::ServerRepresentation;
pub use request::CreateServerRequest;
