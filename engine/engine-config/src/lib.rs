//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic for the
//! settlers move search engine and anything embedding it.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`SETTLERS_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (`config.defaults.toml`)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! SETTLERS_<SECTION>_<KEY>=value
//!
//! Examples:
//!     SETTLERS_SEARCH_TIME_BUDGET_MS=250
//!     SETTLERS_SEARCH_ROLLOUT_DEPTH=8
//!     SETTLERS_SEARCH_NORMALIZE_BY_ROUNDS_PLAYED=true
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, CONFIG_PATH_ENV, CONFIG_SEARCH_PATHS,
};
pub use structs::*;

#[cfg(test)]
mod tests;
