//! In-memory environments for [`EnvResolver`](shield_core::EnvResolver) tests.

use std::collections::HashMap;

/// Build an environment map from key/value pairs.
pub fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// An environment with the three required SHIELD variables set, plus `extra`.
pub fn shield_env(extra: &[(&str, &str)]) -> HashMap<String, String> {
    let mut env = env_map(&[
        ("SHIELD_URL", "https://shield.example.com"),
        ("SHIELD_USERNAME", "admin"),
        ("SHIELD_PASSWORD", "sekrit-password"),
    ]);
    env.extend(env_map(extra));
    env
}
