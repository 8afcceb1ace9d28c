//! Combined resolution: environment first, then the configuration file

use crate::client::{Authenticate, ClientDescriptor};
use crate::config::ConfigStore;
use crate::env::{EnvResolver, EnvSource};
use crate::Result;

/// Resolve the client for `alias`.
///
/// If the environment carries a complete SHIELD configuration it wins,
/// and its parse or authentication error is returned as-is. Otherwise the
/// core registered under `alias` in `store` is used.
pub fn resolve_client(
    store: &mut ConfigStore,
    alias: &str,
    env: &impl EnvSource,
    authenticator: &dyn Authenticate,
) -> Result<ClientDescriptor> {
    if let Some(client) = EnvResolver::new(env).resolve(authenticator).into_client()? {
        tracing::debug!(
            url = %client.url,
            has_session = client.has_session(),
            "Using SHIELD core from environment"
        );
        return Ok(client);
    }

    let client = store.resolve_client(alias)?;
    if !client.has_session() {
        tracing::debug!(
            alias = %alias,
            "Stored SHIELD core has no session; requests will be unauthenticated"
        );
    }
    Ok(client)
}
