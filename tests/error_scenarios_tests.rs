//! Error scenario and edge case tests
//!
//! Run with: cargo test --test error_scenarios_tests

use jobpath::config::{ConfigFormat, ConfigStore};
use jobpath::error::Error;
use jobpath::{FsStore, PipelineConfig};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Persistence Errors
// ============================================================================

#[test]
fn test_error_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let result = FsStore.write(&dir.path().join("record.toml"), &json!({ "name": "x" }));
    let err = result.unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(err.to_string().contains("record.toml"));
}

#[test]
fn test_error_invalid_yaml_sidecar() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("build.groovy");
    fs::write(&script, "").unwrap();
    fs::write(dir.path().join(".build.config.yaml"), "name: [unclosed").unwrap();

    let err = PipelineConfig::open(&script, false).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
    assert!(err.to_string().contains("YAML"));
}

#[test]
fn test_error_update_after_sidecar_removed() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("build.groovy");
    fs::write(&script, "").unwrap();

    let mut config = PipelineConfig::open(&script, false).unwrap();
    fs::remove_file(config.path()).unwrap();

    assert!(matches!(config.update(), Err(Error::Io(_))));
    assert_eq!(config.name(), "build");
}

#[test]
fn test_error_record_with_wrong_name_type() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("build.groovy");
    fs::write(&script, "").unwrap();
    fs::write(dir.path().join(".build.config.json"), r#"{"name": 5}"#).unwrap();

    match PipelineConfig::open(&script, false) {
        Err(Error::InvalidRecord { path, reason }) => {
            assert!(path.ends_with(".build.config.json"));
            assert!(!reason.is_empty());
        }
        other => panic!("Expected InvalidRecord, got {:?}", other.map(|c| c.to_record())),
    }
}

// ============================================================================
// Path Edge Cases
// ============================================================================

#[test]
fn test_script_with_several_dots_keeps_inner_name() {
    let sidecar =
        PipelineConfig::path_from_script(&FsStore, Path::new("/nonexistent/deploy.prod.groovy"))
            .unwrap();
    assert_eq!(sidecar, Path::new("/nonexistent/.deploy.prod.config.yaml"));
}

#[test]
fn test_script_path_without_file_name() {
    let result = PipelineConfig::path_from_script(&FsStore, Path::new("/"));
    assert!(matches!(result, Err(Error::InvalidScriptPath(_))));
}

#[test]
fn test_json_content_round_trips_through_format() {
    let value = json!({ "name": "build", "params": [1, 2] });
    let rendered = ConfigFormat::Json.render(&value).unwrap();
    assert!(rendered.ends_with('\n'));
    assert_eq!(ConfigFormat::Json.parse(&rendered).unwrap(), value);
}
