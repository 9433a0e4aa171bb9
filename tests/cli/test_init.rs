// `docdrift init` writes a loadable default config.

use std::fs;

use docdrift_core::config::{DriftConfig, CONFIG_FILE_NAME};

use crate::common::run_docdrift;

#[test]
fn test_init_writes_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_docdrift(dir.path(), &["init"]);
    assert_eq!(out.status.code(), Some(0));

    let path = dir.path().join(CONFIG_FILE_NAME);
    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["require_docstrings"], true);
    assert_eq!(value["ignore_patterns"][0], "_*");
    assert_eq!(DriftConfig::load(dir.path()).unwrap(), DriftConfig::default());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

    let out = run_docdrift(dir.path(), &["init"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("already exists"));

    let out = run_docdrift(dir.path(), &["init", "--force"]);
    assert_eq!(out.status.code(), Some(0));
    assert_ne!(fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap(), "{}");
}
