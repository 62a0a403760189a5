//! Configuration management for Fieldnote CLI
//!
//! Stores the API token, target profiles, and default settings in
//! ~/.config/fieldnote/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "fieldnote";
const CONFIG_FILE: &str = "config.toml";

/// Shortcut for a target you message often
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub target_type: String,
    #[serde(default)]
    pub target_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_base_url(),
            default_profile: None,
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API token
    pub fn set_api_token(&mut self, token: String) {
        self.api_token = Some(token);
    }

    /// Add a profile
    pub fn add_profile(
        &mut self,
        name: String,
        target_type: String,
        target_id: i64,
        display_name: Option<String>,
    ) {
        self.profiles.insert(
            name,
            Profile {
                target_type,
                target_id,
                name: display_name,
            },
        );
    }

    /// Remove a profile
    pub fn remove_profile(&mut self, name: &str) -> bool {
        self.profiles.remove(name).is_some()
    }

    /// Set default profile
    pub fn set_default_profile(&mut self, name: String) -> bool {
        if self.profiles.contains_key(&name) {
            self.default_profile = Some(name);
            true
        } else {
            false
        }
    }

    /// Get the active profile (specified or default)
    pub fn get_profile(&self, name: Option<&str>) -> Option<&Profile> {
        let profile_name = name
            .map(|s| s.to_string())
            .or_else(|| self.default_profile.clone())?;

        self.profiles.get(&profile_name)
    }

    /// Get the target behind a profile
    pub fn get_target(&self, profile: Option<&str>) -> Option<(String, i64)> {
        self.get_profile(profile)
            .map(|p| (p.target_type.clone(), p.target_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.api_token.is_none());
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_profile_lifecycle() {
        let mut config = Config::default();
        config.add_profile(
            "field".to_string(),
            "project".to_string(),
            42,
            Some("Water points".to_string()),
        );

        assert!(config.set_default_profile("field".to_string()));
        assert_eq!(config.get_target(None), Some(("project".to_string(), 42)));
        assert_eq!(
            config.get_target(Some("field")),
            Some(("project".to_string(), 42))
        );

        assert!(config.remove_profile("field"));
        assert_eq!(config.get_target(None), None);
        assert!(!config.set_default_profile("missing".to_string()));
    }
}
