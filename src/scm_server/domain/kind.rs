//! Statically known SCM server kinds.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Kind of SCM server an endpoint registry manages.
///
/// Each kind fixes the credential identifier scheme, the credential domain
/// used to scope lookups, and the response header that marks a reply as
/// coming from a server of this kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScmKind {
    /// Self-hosted GitHub Enterprise.
    GithubEnterprise,
}

impl ScmKind {
    /// Every supported kind, in lookup order.
    pub const ALL: [Self; 1] = [Self::GithubEnterprise];

    /// Returns the stable kind identifier used as credential id prefix.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::GithubEnterprise => "github-enterprise",
        }
    }

    /// Returns the credential domain tag for this kind.
    #[must_use]
    pub const fn credential_domain_name(self) -> &'static str {
        match self {
            Self::GithubEnterprise => "blueocean-github-enterprise-domain",
        }
    }

    /// Returns the response header whose presence identifies this kind.
    ///
    /// This is a heuristic: servers that rename or drop the header are
    /// rejected as not being of this kind.
    #[must_use]
    pub const fn signature_header(self) -> &'static str {
        match self {
            Self::GithubEnterprise => "X-GitHub-Request-Id",
        }
    }

    /// Returns the product name used in operator-facing messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GithubEnterprise => "Github",
        }
    }

    /// Derives the credential identifier for an API URL.
    ///
    /// The identifier is `<kind id>:<lowercase hex SHA-256 of the URL>`. It
    /// is a stable lookup key, not a secret.
    ///
    /// # Examples
    ///
    /// ```
    /// use scm_registry::scm_server::domain::ScmKind;
    ///
    /// let id = ScmKind::GithubEnterprise.credential_id("https://ghe.example.com/api/v3");
    /// assert!(id.starts_with("github-enterprise:"));
    /// assert_eq!(id.len(), "github-enterprise:".len() + 64);
    /// ```
    #[must_use]
    pub fn credential_id(self, api_url: &str) -> String {
        format!("{}:{}", self.id(), sha256_hex(api_url))
    }

    /// Looks up a kind by its identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for ScmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl TryFrom<&str> for ScmKind {
    type Error = ParseScmKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_id(value).ok_or_else(|| ParseScmKindError(value.to_owned()))
    }
}

/// Error returned when an SCM kind identifier is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown SCM kind: {0}")]
pub struct ParseScmKindError(pub String);

fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}
