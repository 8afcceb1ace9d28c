//! Boundary with the network client
//!
//! The HTTP client that actually talks to a SHIELD core lives outside this
//! crate. This module holds what the resolvers hand to it: a fully
//! resolved [`ClientDescriptor`], the [`LocalAuth`] credential, and the
//! [`Authenticate`] operation the environment path calls into.

use crate::config::Core;
use std::fmt;
use std::time::Duration;

/// Everything the network client needs to reach one SHIELD core
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDescriptor {
    /// Base URL of the core
    pub url: String,

    /// Session token, if one is already known
    pub session: Option<String>,

    /// Skip TLS certificate verification
    pub insecure_skip_verify: bool,

    /// PEM-encoded CA certificate to trust, or empty
    pub ca_certificate: String,

    /// Trust the operating system's CA bundle in addition to `ca_certificate`
    pub trust_system_cas: bool,

    /// Log requests and responses
    pub debug: bool,

    /// Log full wire traffic
    pub trace: bool,

    /// Request timeout in seconds; zero or negative means the client default
    pub timeout_secs: i64,
}

impl ClientDescriptor {
    /// The request timeout, or `None` when the client should use its default.
    pub fn timeout(&self) -> Option<Duration> {
        u64::try_from(self.timeout_secs)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Whether a session token is attached.
    pub fn has_session(&self) -> bool {
        self.session.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Stored cores always trust the system CA bundle.
impl From<&Core> for ClientDescriptor {
    fn from(core: &Core) -> Self {
        Self {
            url: core.url.clone(),
            session: core.session.clone(),
            insecure_skip_verify: core.insecure_skip_verify,
            ca_certificate: core.ca_certificate.clone(),
            trust_system_cas: true,
            ..Self::default()
        }
    }
}

/// Username/password credential exchanged for a session token
#[derive(Clone, PartialEq, Eq)]
pub struct LocalAuth {
    pub username: String,
    pub password: String,
}

impl LocalAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LocalAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Failure reported by the network client while authenticating
#[derive(Debug, thiserror::Error)]
#[error("authentication failed: {message}")]
pub struct AuthError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Performs the credential exchange against a SHIELD core.
///
/// Implemented by the network client. On success it may return a session
/// token, which the caller attaches to the descriptor it is building.
pub trait Authenticate {
    fn authenticate(
        &self,
        client: &ClientDescriptor,
        auth: &LocalAuth,
    ) -> std::result::Result<Option<String>, AuthError>;
}

impl<T: Authenticate + ?Sized> Authenticate for &T {
    fn authenticate(
        &self,
        client: &ClientDescriptor,
        auth: &LocalAuth,
    ) -> std::result::Result<Option<String>, AuthError> {
        (**self).authenticate(client, auth)
    }
}
