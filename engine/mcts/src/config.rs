//! MCTS configuration parameters.

use std::time::Duration;

use engine_config::CentralConfig;

use crate::search::SearchError;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Wall-clock budget for one search call.
    pub time_budget: Duration,

    /// Number of random moves played per rollout (D).
    /// Also the divisor of the rollout score unless
    /// `normalize_by_rounds_played` is set.
    pub rollout_depth: u32,

    /// Exploration constant C of the UCT formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub exploration_constant: f64,

    /// Searches on boards with fewer turns than this skip the tree entirely
    /// and play the board's best initial move.
    pub opening_move_threshold: u32,

    /// Divide rollout scores by the rounds actually played instead of
    /// `rollout_depth`. Off by default: short games then score lower.
    pub normalize_by_rounds_played: bool,

    /// Decay used to build the rollout normalization constant.
    /// The constant is exposed but not applied to scores.
    pub discount: f64,

    /// Run exactly this many iterations and ignore `time_budget`.
    /// Makes searches reproducible in tests and benchmarks.
    pub max_iterations: Option<u32>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_millis(1000),
            rollout_depth: 6,
            exploration_constant: std::f64::consts::SQRT_2,
            opening_move_threshold: 4,
            normalize_by_rounds_played: false,
            discount: 0.9,
            max_iterations: None,
        }
    }
}

impl MctsConfig {
    /// Create config for live play (wall-clock bounded).
    pub fn for_play() -> Self {
        Self::default()
    }

    /// Create a fast, deterministic config for testing.
    pub fn for_testing() -> Self {
        Self {
            time_budget: Duration::from_millis(50),
            max_iterations: Some(200),
            ..Self::default()
        }
    }

    /// Build the runtime config from the file/env configuration.
    pub fn from_central(config: &CentralConfig) -> Self {
        let search = &config.search;
        Self {
            time_budget: Duration::from_millis(search.time_budget_ms),
            rollout_depth: search.rollout_depth,
            exploration_constant: search.exploration_constant,
            opening_move_threshold: search.opening_move_threshold,
            normalize_by_rounds_played: search.normalize_by_rounds_played,
            discount: search.discount,
            max_iterations: None,
        }
    }

    /// Builder pattern: set the time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Builder pattern: set rollout depth.
    pub fn with_rollout_depth(mut self, depth: u32) -> Self {
        self.rollout_depth = depth;
        self
    }

    /// Builder pattern: set the UCT exploration constant.
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Builder pattern: set the opening-move threshold.
    pub fn with_opening_move_threshold(mut self, turns: u32) -> Self {
        self.opening_move_threshold = turns;
        self
    }

    /// Builder pattern: divide rollout scores by rounds played.
    pub fn with_normalize_by_rounds_played(mut self, enabled: bool) -> Self {
        self.normalize_by_rounds_played = enabled;
        self
    }

    /// Builder pattern: stop after a fixed number of iterations.
    pub fn with_max_iterations(mut self, n: u32) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Check the config before a search starts.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.rollout_depth == 0 {
            return Err(SearchError::InvalidConfig(
                "rollout_depth must be at least 1".to_string(),
            ));
        }
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration_constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        if !self.discount.is_finite() || self.discount < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "discount must be finite and non-negative, got {}",
                self.discount
            )));
        }
        Ok(())
    }
}
