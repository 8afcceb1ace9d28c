use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use shield_fs::document;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
struct Entry {
    url: String,
    #[serde(default)]
    skip_verify: bool,
}

type Registry = BTreeMap<String, Entry>;

#[test]
fn test_load_yaml_missing_file_is_none() {
    let temp = TempDir::new().unwrap();
    let loaded: Option<Registry> = document::load_yaml(&temp.path().join("absent.yml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_load_yaml_mapping() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("shield.yml");
    fs::write(&path, "prod:\n  url: https://prod\n  skip_verify: true\n").unwrap();

    let loaded: Registry = document::load_yaml(&path).unwrap().unwrap();

    assert_eq!(
        loaded["prod"],
        Entry {
            url: "https://prod".into(),
            skip_verify: true,
        }
    );
}

#[rstest]
#[case("")]
#[case("   \n")]
#[case("~\n")]
#[case("null\n")]
fn test_load_yaml_empty_documents_default(#[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("shield.yml");
    fs::write(&path, content).unwrap();

    let loaded: Registry = document::load_yaml(&path).unwrap().unwrap();
    assert!(loaded.is_empty());
}

#[rstest]
#[case("- just\n- a list\n")]
#[case("prod: [unclosed\n")]
#[case("prod:\n  skip_verify: maybe\n")]
fn test_load_yaml_malformed_is_parse_error(#[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("shield.yml");
    fs::write(&path, content).unwrap();

    let err = document::load_yaml::<Registry>(&path).unwrap_err();
    assert!(err.is_parse(), "expected parse error, got {err}");
}

#[test]
fn test_save_then_load_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("shield.yml");

    let mut original = Registry::new();
    original.insert(
        "a".into(),
        Entry {
            url: "https://a".into(),
            skip_verify: false,
        },
    );
    original.insert(
        "b".into(),
        Entry {
            url: "https://b".into(),
            skip_verify: true,
        },
    );

    document::save_yaml(&path, &original).unwrap();
    let loaded: Registry = document::load_yaml(&path).unwrap().unwrap();

    assert_eq!(original, loaded);
}
