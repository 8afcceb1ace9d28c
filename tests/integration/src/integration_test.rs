//! End-to-end scenarios over the fixtures in `test-fixtures/`.

use pretty_assertions::assert_eq;
use shield_core::env::vars;
use shield_core::{ConfigStore, Core, PluginDescriptor, extract_plugins, resolve_client};
use shield_test_utils::{ConfigDir, ScriptedAuth, env_map, shield_env};
use std::fs;
use std::path::PathBuf;

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    // tests/integration -> ../../test-fixtures
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

/// A temp config dir seeded with the fixture config file.
fn seeded_config() -> ConfigDir {
    let dir = ConfigDir::new();
    let fixture = fs::read_to_string(fixtures_dir().join("config/shield.yml")).unwrap();
    dir.write(&fixture);
    dir
}

#[test]
fn test_fixture_config_loads_every_core() {
    let dir = seeded_config();

    let store = ConfigStore::load(dir.path()).unwrap();

    assert_eq!(store.aliases(), vec!["bare", "lab", "production"]);
    assert_eq!(store.get("bare"), Some(&Core::new("http://localhost:8080")));
    assert!(store.get("lab").unwrap().insecure_skip_verify);
}

#[test]
fn test_first_run_add_persist_and_reuse() {
    let dir = ConfigDir::new();

    // First run: no file yet
    let mut store = ConfigStore::load(dir.path()).unwrap();
    assert!(store.is_empty());
    store.add(
        "home",
        Core {
            session: Some("fresh-session".into()),
            ..Core::new("https://shield.home.lan")
        },
    );
    store.persist().unwrap();
    dir.assert_exists();

    // Second run picks it up
    let mut store = ConfigStore::load(dir.path()).unwrap();
    let client = store.resolve_client("home").unwrap();

    assert_eq!(client.url, "https://shield.home.lan");
    assert_eq!(client.session.as_deref(), Some("fresh-session"));
    assert!(client.trust_system_cas);
}

#[test]
fn test_edit_fixture_and_roundtrip() {
    let dir = seeded_config();
    let mut store = ConfigStore::load(dir.path()).unwrap();
    let before: Vec<(String, Core)> = store
        .iter()
        .map(|(alias, core)| (alias.to_string(), core.clone()))
        .collect();

    store.add("lab", Core::new("https://10.0.4.21"));
    store.persist().unwrap();

    let reloaded = ConfigStore::load(dir.path()).unwrap();
    for (alias, core) in before {
        if alias == "lab" {
            assert_eq!(reloaded.get(&alias), Some(&Core::new("https://10.0.4.21")));
        } else {
            assert_eq!(reloaded.get(&alias), Some(&core));
        }
    }
}

#[test]
fn test_resolve_prefers_environment_then_config() {
    let dir = seeded_config();
    let mut store = ConfigStore::load(dir.path()).unwrap();
    let auth = ScriptedAuth::succeeding("env-session");

    let from_config = resolve_client(&mut store, "production", &env_map(&[]), &auth).unwrap();
    assert_eq!(from_config.url, "https://shield.prod.example.com");
    assert!(from_config.ca_certificate.contains("BEGIN CERTIFICATE"));
    assert_eq!(auth.call_count(), 0);

    let env = shield_env(&[(vars::TIMEOUT, "120"), (vars::TRUST_SYSTEM_CAS, "no")]);
    let from_env = resolve_client(&mut store, "production", &env, &auth).unwrap();
    assert_eq!(from_env.url, "https://shield.example.com");
    assert_eq!(from_env.session.as_deref(), Some("env-session"));
    assert_eq!(from_env.timeout_secs, 120);
    assert!(!from_env.trust_system_cas);
    assert_eq!(auth.call_count(), 1);
}

#[test]
fn test_fixture_agent_metadata_plugins() {
    let raw = fs::read_to_string(fixtures_dir().join("metadata/agent.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let plugins = extract_plugins(&document).unwrap();

    let expected: Vec<PluginDescriptor> = [
        ("consul", "Consul Backup Plugin"),
        ("fs", "Local Filesystem Plugin"),
        ("postgres", "PostgreSQL Backup Plugin"),
        ("s3", "Amazon S3 Storage Plugin"),
    ]
    .into_iter()
    .map(|(id, name)| PluginDescriptor {
        id: id.into(),
        name: name.into(),
    })
    .collect();
    assert_eq!(plugins, expected);
}

#[test]
fn test_corrupt_config_is_not_replaced() {
    let dir = ConfigDir::new();
    dir.write("production: [this is: not valid\n");

    assert!(ConfigStore::load(dir.path()).is_err());
    assert_eq!(dir.read(), "production: [this is: not valid\n");
}
