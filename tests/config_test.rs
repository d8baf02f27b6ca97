// tests/config_test.rs
use std::io::Write;
use std::path::{Path, PathBuf};

use pubspec_release::config::{load_config, Config};
use pubspec_release::ReleaseError;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.manifest.path, PathBuf::from("pubspec.yaml"));
    assert!(!config.release.require_increase);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[manifest]
path = "packages/app/pubspec.yaml"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(
        config.manifest.path,
        PathBuf::from("packages/app/pubspec.yaml")
    );
    assert!(!config.release.require_increase);
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some(Path::new("tests/fixtures/config_require_increase.toml")))
        .expect("Failed to load test config");
    assert_eq!(config.manifest.path, PathBuf::from("app/pubspec.yaml"));
    assert!(config.release.require_increase);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let err = load_config(Some(Path::new("tests/fixtures/does-not-exist.toml"))).unwrap_err();
    assert!(matches!(err, ReleaseError::Config(_)));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[release\nrequire_increase = true").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
