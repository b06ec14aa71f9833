//! ---
//! vl_section: "01-core-functionality"
//! vl_subsection: "integration-tests"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Shared primitives and utilities for verlit tooling."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use std::fs;

use tempfile::tempdir;
use verlit_common::config::AppConfig;
use verlit_common::MissingLiteral;

#[test]
fn loads_first_existing_candidate_and_resolves_targets() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("verlit.toml");
    fs::write(
        &config_path,
        r#"
version = "2.1.0"
on_missing = "skip"

[targets.addon]
path = "addon/__init__.py"
"#,
    )
    .unwrap();

    let missing = dir.path().join("absent.toml");
    let loaded = AppConfig::load_with_source(&[missing, config_path.clone()]).unwrap();
    assert_eq!(loaded.source, config_path);
    assert_eq!(loaded.config.on_missing, MissingLiteral::Skip);

    let targets = loaded.resolved_targets().unwrap();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].path, dir.path().join("addon/__init__.py"));
}

#[test]
fn reports_every_inspected_candidate() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.toml");
    let b = dir.path().join("b.toml");
    let err = AppConfig::load(&[a, b]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("a.toml"));
    assert!(message.contains("b.toml"));
}

#[test]
fn invalid_file_names_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "version = \"one.two.three\"\n").unwrap();
    let err = AppConfig::load(&[path]).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}
