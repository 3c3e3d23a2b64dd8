//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{PairnavConfig, PrefixMatch};
use pairnav_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_pairnav_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[pairing]
source_dir = "resolvers"
counterpart_dir = "typeDefs"
use_preview_mode = true
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.pairing.source_dir, "resolvers");
    assert_eq!(config.pairing.counterpart_dir, "typeDefs");
    assert!(config.pairing.use_preview_mode);
    // Defaults preserved
    assert!(config.pairing.open_in_split_view);
    assert_eq!(config.search.exclude, vec!["**/node_modules/**".to_string()]);
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
fn load_config_with_invalid_values_keeps_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[search]\nsuppression_timeout_ms = 5\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.search.suppression_timeout_ms, 5);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pairnav").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, PairnavConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    let config: PairnavConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.pairing.source_dir, "src/graphql/resolvers");
    assert_eq!(config.pairing.prefix_match, PrefixMatch::Segment);
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("pairnav"));
        assert!(path_str.ends_with("config.toml"));
    }
}
