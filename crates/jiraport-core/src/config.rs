// Rust guideline compliant 2026-10-15

//! Configuration management for jiraport.

use crate::identity::UserMapping;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "jiraport.toml";

/// Configuration for a conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Jira username whose destination id stands in for unmapped requesters
    /// and comment authors.
    #[serde(default = "default_fallback_user")]
    pub fallback_user: String,

    /// Destination group (team) id attached to every story.
    #[serde(default = "default_group_id")]
    pub group_id: String,

    /// URL prefix for links back to Jira; the issue key is appended.
    #[serde(default = "default_link_base")]
    pub link_base: String,

    /// Prefix of the label that tags stories with their Jira project.
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,

    /// User mapping table.
    #[serde(default)]
    pub users: Vec<UserMapping>,
}

fn default_fallback_user() -> String {
    "matt.messinger".to_string()
}

fn default_group_id() -> String {
    "62132e09-7216-4f8c-860d-9907f4a243bc".to_string()
}

fn default_link_base() -> String {
    "https://jira.yk.wildskymedia.com/browse/".to_string()
}

fn default_label_prefix() -> String {
    "jira-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_user: default_fallback_user(),
            group_id: default_group_id(),
            link_base: default_link_base(),
            label_prefix: default_label_prefix(),
            users: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from a file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if it exists
    /// 3. Environment variables with `JIRAPORT_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `JIRAPORT_FALLBACK_USER`
    /// - `JIRAPORT_GROUP_ID`
    /// - `JIRAPORT_LINK_BASE`
    /// - `JIRAPORT_LABEL_PREFIX`
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("JIRAPORT_FALLBACK_USER") {
            self.fallback_user = val;
        }
        if let Ok(val) = std::env::var("JIRAPORT_GROUP_ID") {
            self.group_id = val;
        }
        if let Ok(val) = std::env::var("JIRAPORT_LINK_BASE") {
            self.link_base = val;
        }
        if let Ok(val) = std::env::var("JIRAPORT_LABEL_PREFIX") {
            self.label_prefix = val;
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `fallback_user`, `group_id` or `link_base` is empty
    /// - Two user mappings share a `jira_username`
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("fallback_user", &self.fallback_user),
            ("group_id", &self.group_id),
            ("link_base", &self.link_base),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{} cannot be empty", name)));
            }
        }

        let mut seen = HashSet::new();
        for user in &self.users {
            if !seen.insert(user.jira_username.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "Duplicate user mapping for '{}'",
                    user.jira_username
                )));
            }
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process-wide; tests touching them run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("JIRAPORT_FALLBACK_USER");
        std::env::remove_var("JIRAPORT_GROUP_ID");
        std::env::remove_var("JIRAPORT_LINK_BASE");
        std::env::remove_var("JIRAPORT_LABEL_PREFIX");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.fallback_user, "matt.messinger");
        assert_eq!(config.group_id, "62132e09-7216-4f8c-860d-9907f4a243bc");
        assert_eq!(config.link_base, "https://jira.yk.wildskymedia.com/browse/");
        assert_eq!(config.label_prefix, "jira-");
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        let content = r#"
fallback_user = "admin"
group_id = "group-1"
link_base = "https://jira.example.com/browse/"

[[users]]
jira_username = "alice"
ch_id = "ch-alice"
ch_project_id = 13

[[users]]
jira_username = "admin"
ch_id = "ch-admin"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.fallback_user, "admin");
        assert_eq!(config.group_id, "group-1");
        assert_eq!(config.link_base, "https://jira.example.com/browse/");
        assert_eq!(config.label_prefix, "jira-");
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].ch_project_id, 13);
        assert_eq!(config.users[1].ch_project_id, 0);
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "fallback_user = ").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_validation_empty_group() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "group_id = \"\"").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_config_validation_duplicate_users() {
        let config = Config {
            users: vec![
                UserMapping {
                    jira_username: "alice".to_string(),
                    ch_id: "a".to_string(),
                    ch_project_id: 0,
                },
                UserMapping {
                    jira_username: "alice".to_string(),
                    ch_id: "b".to_string(),
                    ch_project_id: 0,
                },
            ],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "fallback_user = \"admin\"").unwrap();

        std::env::set_var("JIRAPORT_FALLBACK_USER", "root");
        std::env::set_var("JIRAPORT_LABEL_PREFIX", "imported-");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.fallback_user, "root");
        assert_eq!(config.label_prefix, "imported-");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);

        let original = Config {
            fallback_user: "admin".to_string(),
            users: vec![UserMapping {
                jira_username: "admin".to_string(),
                ch_id: "ch-admin".to_string(),
                ch_project_id: 7,
            }],
            ..Config::default()
        };

        original.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(original, loaded);
    }
}
