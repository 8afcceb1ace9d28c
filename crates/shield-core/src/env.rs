//! Environment-variable resolution
//!
//! When `SHIELD_URL`, `SHIELD_USERNAME` and `SHIELD_PASSWORD` are all set,
//! the client is configured entirely from the environment and logs in with
//! that username and password instead of using a stored session.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `SHIELD_URL` | Core URL (required) |
//! | `SHIELD_USERNAME` | Login username (required) |
//! | `SHIELD_PASSWORD` | Login password (required) |
//! | `SHIELD_CA` | PEM CA certificate |
//! | `SHIELD_SKIP_VERIFY` | `yes` disables TLS verification |
//! | `SHIELD_TRUST_SYSTEM_CAS` | `no` stops trusting the system CA bundle |
//! | `SHIELD_DEBUG` | `yes` enables debug logging |
//! | `SHIELD_TRACE` | `yes` enables wire tracing |
//! | `SHIELD_TIMEOUT` | Request timeout in seconds |

use crate::client::{AuthError, Authenticate, ClientDescriptor, LocalAuth};
use crate::{Error, Result};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Names of the environment variables read by [`EnvResolver`]
pub mod vars {
    pub const URL: &str = "SHIELD_URL";
    pub const USERNAME: &str = "SHIELD_USERNAME";
    pub const PASSWORD: &str = "SHIELD_PASSWORD";
    pub const CA: &str = "SHIELD_CA";
    pub const SKIP_VERIFY: &str = "SHIELD_SKIP_VERIFY";
    pub const TRUST_SYSTEM_CAS: &str = "SHIELD_TRUST_SYSTEM_CAS";
    pub const DEBUG: &str = "SHIELD_DEBUG";
    pub const TRACE: &str = "SHIELD_TRACE";
    pub const TIMEOUT: &str = "SHIELD_TIMEOUT";
}

const AFFIRMATIVE: &str = "yes";
const NEGATIVE: &str = "no";

/// Read access to environment variables.
pub trait EnvSource {
    /// The value of `key`, or `None` if it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Outcome of [`EnvResolver::resolve`]
#[derive(Debug)]
pub enum EnvResolution {
    /// One of the required variables is unset; fall back to the config file.
    NotApplicable,

    /// The environment described a core and authentication was attempted.
    ///
    /// The descriptor is returned even when authentication failed so
    /// callers can report what was being contacted.
    Resolved {
        client: ClientDescriptor,
        auth_error: Option<AuthError>,
    },

    /// The environment described a core but could not be parsed.
    Failed(Error),
}

impl EnvResolution {
    /// Whether the environment carried a SHIELD configuration at all.
    pub fn is_applicable(&self) -> bool {
        !matches!(self, Self::NotApplicable)
    }

    /// The resolved descriptor, regardless of the authentication outcome.
    pub fn client(&self) -> Option<&ClientDescriptor> {
        match self {
            Self::Resolved { client, .. } => Some(client),
            _ => None,
        }
    }

    /// Collapse into `Ok(None)` when not applicable, `Ok(Some(client))` on
    /// success, and the parse or authentication error otherwise.
    pub fn into_client(self) -> Result<Option<ClientDescriptor>> {
        match self {
            Self::NotApplicable => Ok(None),
            Self::Resolved {
                client,
                auth_error: None,
            } => Ok(Some(client)),
            Self::Resolved {
                auth_error: Some(err),
                ..
            } => Err(Error::Auth(err)),
            Self::Failed(err) => Err(err),
        }
    }
}

/// Builds a [`ClientDescriptor`] from `SHIELD_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvResolver<E = ProcessEnv> {
    env: E,
}

impl EnvResolver<ProcessEnv> {
    /// A resolver reading the process environment.
    pub fn from_process() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> EnvResolver<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Resolve a core from the environment and log in to it.
    ///
    /// `SHIELD_TIMEOUT` is validated before any authentication is
    /// attempted. The authenticator is called exactly once; a session token
    /// it returns is attached to the descriptor.
    pub fn resolve(&self, authenticator: &dyn Authenticate) -> EnvResolution {
        let (Some(url), Some(username), Some(password)) = (
            self.lookup(vars::URL),
            self.lookup(vars::USERNAME),
            self.lookup(vars::PASSWORD),
        ) else {
            tracing::debug!("SHIELD environment incomplete, not applicable");
            return EnvResolution::NotApplicable;
        };

        let timeout_secs = match self.timeout() {
            Ok(secs) => secs,
            Err(err) => return EnvResolution::Failed(err),
        };

        let mut client = ClientDescriptor {
            url,
            session: None,
            insecure_skip_verify: self.is_affirmative(vars::SKIP_VERIFY),
            ca_certificate: self.lookup(vars::CA).unwrap_or_default(),
            trust_system_cas: self.lookup(vars::TRUST_SYSTEM_CAS).as_deref()
                != Some(NEGATIVE),
            debug: self.is_affirmative(vars::DEBUG),
            trace: self.is_affirmative(vars::TRACE),
            timeout_secs,
        };

        let auth = LocalAuth::new(username, password);
        tracing::debug!(
            url = %client.url,
            username = %auth.username,
            "Authenticating to SHIELD core from environment"
        );

        match authenticator.authenticate(&client, &auth) {
            Ok(session) => {
                client.session = session;
                EnvResolution::Resolved {
                    client,
                    auth_error: None,
                }
            }
            Err(err) => {
                tracing::warn!(url = %client.url, error = %err, "SHIELD authentication failed");
                EnvResolution::Resolved {
                    client,
                    auth_error: Some(err),
                }
            }
        }
    }

    /// Non-empty value of `key`.
    fn lookup(&self, key: &str) -> Option<String> {
        self.env.var(key).filter(|v| !v.is_empty())
    }

    fn is_affirmative(&self, key: &str) -> bool {
        self.lookup(key).as_deref() == Some(AFFIRMATIVE)
    }

    fn timeout(&self) -> Result<i64> {
        let Some(value) = self.lookup(vars::TIMEOUT) else {
            return Ok(0);
        };
        value
            .parse::<i64>()
            .map_err(|source| Error::InvalidTimeout { value, source })
    }
}
