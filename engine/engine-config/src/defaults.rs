//! Default configuration values loaded from config.defaults.toml.
//!
//! The shared TOML file is embedded at compile time so the documented
//! defaults and the ones the engine runs with cannot drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    search: SearchDefaults,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    time_budget_ms: u64,
    rollout_depth: u32,
    exploration_constant: f64,
    opening_move_threshold: u32,
    normalize_by_rounds_played: bool,
    discount: f64,
}

pub fn time_budget_ms() -> u64 {
    DEFAULTS.search.time_budget_ms
}
pub fn rollout_depth() -> u32 {
    DEFAULTS.search.rollout_depth
}
pub fn exploration_constant() -> f64 {
    DEFAULTS.search.exploration_constant
}
pub fn opening_move_threshold() -> u32 {
    DEFAULTS.search.opening_move_threshold
}
pub fn normalize_by_rounds_played() -> bool {
    DEFAULTS.search.normalize_by_rounds_played
}
pub fn discount() -> f64 {
    DEFAULTS.search.discount
}
