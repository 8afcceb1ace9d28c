//! Error types for shield-core

use crate::client::AuthError;

/// Result type for shield-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a SHIELD core
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Alias not present in the configuration registry
    #[error("unknown SHIELD core '{alias}'")]
    UnknownCore { alias: String },

    /// `SHIELD_TIMEOUT` is set but is not a base-10 integer
    #[error("invalid SHIELD_TIMEOUT value '{value}': {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Authentication against the core failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Agent metadata could not be decoded into the expected shape
    #[error("malformed agent metadata: {0}")]
    MetadataDecode(#[source] serde_json::Error),

    /// Agent metadata carries no `plugins` collection
    #[error("unable to detect plugins in agent metadata")]
    PluginsNotDetected,

    // Transparent wrappers for underlying crate errors
    /// Configuration file I/O or decode error from shield-fs
    #[error(transparent)]
    Fs(#[from] shield_fs::Error),
}

impl Error {
    /// Create an unknown-core error for the given alias
    pub fn unknown_core(alias: impl Into<String>) -> Self {
        Self::UnknownCore {
            alias: alias.into(),
        }
    }
}
