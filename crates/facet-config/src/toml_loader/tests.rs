//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use facet_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_facet_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[triangle]
style = "buffered"
subdivisions = 3

[colors]
clear = "#101010"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.triangle.style, crate::schema::TriangleStyle::Buffered);
    assert_eq!(config.triangle.subdivisions, 3);
    assert_eq!(config.colors.clear, "#101010");
    // Defaults preserved
    assert_eq!(config.sphere.grid_nx, 10);
    assert_eq!(config.window.title, "facet");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[sphere]\ngrid_nx = \"many\"\n").unwrap();

    let err = load_from_path(&path).unwrap_err().to_string();
    assert!(err.contains("failed to parse TOML"));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[sphere]\ngrid_nx = 1\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.sphere.grid_nx, 1);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("facet").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, crate::schema::FacetConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::FacetConfig;

    let content = default_config_toml();
    let config: FacetConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
    assert_eq!(config.lights.len(), 3);
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI environment has a config directory
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("facet"));
        assert!(path_str.ends_with("config.toml"));
    }
}
