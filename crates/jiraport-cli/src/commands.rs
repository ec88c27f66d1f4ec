// Rust guideline compliant 2026-10-15

//! Command implementations for the jiraport CLI.

pub mod convert;
pub mod inspect;

use anyhow::{Context, Result};
use jiraport_core::config::DEFAULT_CONFIG_FILE;
use jiraport_core::{Config, UserMap};
use std::path::{Path, PathBuf};

/// Loads the configuration from an explicit path or `jiraport.toml`.
///
/// An explicit path must exist; the default file is optional.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };
    Config::load(&path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// Builds the user map from a JSON file when given, otherwise from the config.
pub fn load_users(config: &Config, user_map: Option<&Path>) -> Result<UserMap> {
    match user_map {
        Some(path) => UserMap::load_json(path)
            .with_context(|| format!("Failed to load user map {}", path.display())),
        None => Ok(UserMap::new(config.users.clone())?),
    }
}
