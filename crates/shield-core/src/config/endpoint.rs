//! Core endpoint definition

use serde::{Deserialize, Deserializer, Serialize};

/// One SHIELD core as stored in the configuration file.
///
/// Field names on disk are `url`, `session`, `skip_verify` and `cacert`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Core {
    /// Base URL of the core
    pub url: String,

    /// Session token obtained from a previous login; `''` on disk means none
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub session: Option<String>,

    /// Skip TLS certificate verification
    #[serde(default, rename = "skip_verify")]
    pub insecure_skip_verify: bool,

    /// PEM-encoded CA certificate, or empty
    #[serde(default, rename = "cacert")]
    pub ca_certificate: String,
}

impl Core {
    /// A core reachable at `url` with no session or TLS overrides.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
