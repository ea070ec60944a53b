//! Configuration struct definitions.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// ============================================================================

fn d_time_budget_ms() -> u64 {
    defaults::time_budget_ms()
}
fn d_rollout_depth() -> u32 {
    defaults::rollout_depth()
}
fn d_exploration_constant() -> f64 {
    defaults::exploration_constant()
}
fn d_opening_move_threshold() -> u32 {
    defaults::opening_move_threshold()
}
fn d_normalize_by_rounds_played() -> bool {
    defaults::normalize_by_rounds_played()
}
fn d_discount() -> f64 {
    defaults::discount()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub search: SearchConfig,
}

/// Move search settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget per search in milliseconds
    #[serde(default = "d_time_budget_ms")]
    pub time_budget_ms: u64,
    #[serde(default = "d_rollout_depth")]
    pub rollout_depth: u32,
    #[serde(default = "d_exploration_constant")]
    pub exploration_constant: f64,
    /// Turn count below which the opening placement is played without searching
    #[serde(default = "d_opening_move_threshold")]
    pub opening_move_threshold: u32,
    #[serde(default = "d_normalize_by_rounds_played")]
    pub normalize_by_rounds_played: bool,
    #[serde(default = "d_discount")]
    pub discount: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: defaults::time_budget_ms(),
            rollout_depth: defaults::rollout_depth(),
            exploration_constant: defaults::exploration_constant(),
            opening_move_threshold: defaults::opening_move_threshold(),
            normalize_by_rounds_played: defaults::normalize_by_rounds_played(),
            discount: defaults::discount(),
        }
    }
}
