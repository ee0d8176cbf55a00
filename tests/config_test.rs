// tests/config_test.rs
use std::io::Write;
use std::path::PathBuf;

use serial_test::serial;
use simpver::config::{load_config, Config};
use simpver::tag::TagSelection;
use simpver::SimpverError;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
initial_tag = "v0.1"
major_label = "semver:major"
artifact = "dist/VERSION"
selection = "highest"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.initial_tag, "v0.1");
    assert_eq!(config.major_label, "semver:major");
    assert_eq!(config.artifact, PathBuf::from("dist/VERSION"));
    assert_eq!(config.selection, TagSelection::Highest);
}

#[test]
fn test_empty_file_uses_defaults() {
    let temp_file = NamedTempFile::new().unwrap();
    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_file_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"selection = \"newest\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, SimpverError::Config(_)), "got: {}", err);
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
    assert!(matches!(err, SimpverError::Io(_)));
}

#[test]
#[serial]
fn test_discovers_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("simpver.toml"), "major_label = \"breaking\"\n").unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().major_label, "breaking");
}
