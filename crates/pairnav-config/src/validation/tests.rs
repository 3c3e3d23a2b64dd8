//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&PairnavConfig::default()).is_ok());
}

#[test]
fn unset_directories_are_not_a_validation_error() {
    let mut config = PairnavConfig::default();
    config.pairing.source_dir = String::new();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_glob_in_directory() {
    let mut config = PairnavConfig::default();
    config.pairing.source_dir = "src/**/resolvers".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pairing.source_dir"));
    assert!(err.contains("glob"));
}

#[test]
fn catches_absolute_directory() {
    let mut config = PairnavConfig::default();
    config.pairing.counterpart_dir = "/home/me/typeDefs".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pairing.counterpart_dir"));
}

#[test]
fn catches_parent_traversal() {
    let mut config = PairnavConfig::default();
    config.pairing.counterpart_dir = "../typeDefs".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("'..'"));
}

#[test]
fn catches_identical_directories() {
    let mut config = PairnavConfig::default();
    config.pairing.source_dir = "src/graphql".into();
    config.pairing.counterpart_dir = "./src/graphql/".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("both"));
}

#[test]
fn catches_max_candidates_out_of_range() {
    let mut config = PairnavConfig::default();
    config.search.max_candidates = 5000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("search.max_candidates"));
}

#[test]
fn catches_suppression_timeout_too_small() {
    let mut config = PairnavConfig::default();
    config.search.suppression_timeout_ms = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("search.suppression_timeout_ms"));
}

#[test]
fn catches_invalid_exclude_glob() {
    let mut config = PairnavConfig::default();
    config.search.exclude = vec!["**/[node_modules".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("search.exclude"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PairnavConfig::default();
    config.search.max_candidates = 0;
    config.search.suppression_timeout_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("; "));
}
