//! Library interface for the notesearch CLI
//!
//! This module exposes the command implementations for integration testing
//! while keeping argument parsing in main.rs.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod commands;
pub mod output;

// Re-export commonly needed types for tests
pub use anyhow::Result;
pub use notesearch_core::config::Config;
pub use std::path::Path;

use anyhow::Context;

/// Load configuration and apply command-line overrides
///
/// The returned config has been validated.
pub fn load_config(config_path: Option<&Path>, base_url: Option<&str>) -> Result<Config> {
    let mut config = Config::load(config_path).context("Failed to load configuration")?;

    if let Some(base_url) = base_url {
        config.backend.base_url = base_url.to_string();
    }

    config.validate()?;
    Ok(config)
}
