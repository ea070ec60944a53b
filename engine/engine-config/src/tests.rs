//! Tests for the configuration module.

use super::*;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.search.time_budget_ms, 1000);
    assert_eq!(config.search.rollout_depth, 6);
}

#[test]
fn test_search_defaults() {
    let config = CentralConfig::default();
    assert!((config.search.exploration_constant - std::f64::consts::SQRT_2).abs() < 1e-12);
    assert_eq!(config.search.opening_move_threshold, 4);
    assert!(!config.search.normalize_by_rounds_played);
    assert!((config.search.discount - 0.9).abs() < f64::EPSILON);
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[search]
time_budget_ms = 250
rollout_depth = 10
exploration_constant = 0.7
opening_move_threshold = 8
normalize_by_rounds_played = true
discount = 0.5
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.search.time_budget_ms, 250);
    assert_eq!(config.search.rollout_depth, 10);
    assert!((config.search.exploration_constant - 0.7).abs() < f64::EPSILON);
    assert_eq!(config.search.opening_move_threshold, 8);
    assert!(config.search.normalize_by_rounds_played);
    assert!((config.search.discount - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[search]
rollout_depth = 3
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.search.rollout_depth, 3);
    assert_eq!(config.search.time_budget_ms, 1000); // Default
    assert!((config.search.discount - 0.9).abs() < f64::EPSILON); // Default
}

#[test]
fn test_unknown_sections_are_ignored() {
    // Files written for embedding binaries may carry their own sections
    let toml_content = r#"
[common]
log_level = "debug"

[search]
rollout_depth = 4
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.search.rollout_depth, 4);
}

#[test]
fn test_load_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[search]\ntime_budget_ms = 40").unwrap();

    let config = load_from_path(&path);
    assert_eq!(config.search.time_budget_ms, 40);
    assert_eq!(config.search.opening_move_threshold, 4);
}

#[test]
fn test_load_from_path_falls_back_on_bad_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[search\nrollout_depth = ").unwrap();

    let config = load_from_path(&path);
    assert_eq!(config.search.rollout_depth, 6);
}

#[test]
fn test_load_from_missing_path_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = load_from_path(&dir.path().join("missing.toml"));
    assert_eq!(config.search.time_budget_ms, 1000);
}

#[test]
fn test_settlers_env_overrides() {
    std::env::set_var("SETTLERS_SEARCH_DISCOUNT", "0.5");
    std::env::set_var("SETTLERS_SEARCH_NORMALIZE_BY_ROUNDS_PLAYED", "true");

    let config = apply_env_overrides(CentralConfig::default());
    assert!((config.search.discount - 0.5).abs() < f64::EPSILON);
    assert!(config.search.normalize_by_rounds_played);

    std::env::remove_var("SETTLERS_SEARCH_DISCOUNT");
    std::env::remove_var("SETTLERS_SEARCH_NORMALIZE_BY_ROUNDS_PLAYED");
}

#[test]
fn test_unparseable_env_override_is_ignored() {
    std::env::set_var("SETTLERS_SEARCH_OPENING_MOVE_THRESHOLD", "soon");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.search.opening_move_threshold, 4);

    std::env::remove_var("SETTLERS_SEARCH_OPENING_MOVE_THRESHOLD");
}

#[test]
fn test_config_path_env() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[search]\nexploration_constant = 2.5\n").unwrap();
    std::env::set_var(CONFIG_PATH_ENV, &path);

    let config = load_config();
    assert!((config.search.exploration_constant - 2.5).abs() < f64::EPSILON);

    std::env::remove_var(CONFIG_PATH_ENV);
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config.search.time_budget_ms, cloned.search.time_budget_ms);
    assert_eq!(config.search.rollout_depth, cloned.search.rollout_depth);
}
