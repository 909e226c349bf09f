//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix login, the bot identity shown in the menu,
//! and extra catalog entries.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::domain::types::{CommandDescriptor, MenuConfig};

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub bot: BotConfig,
    /// Catalog entries contributed by companion plugins.
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| crate::strings::logs::config_read_error(&path.display().to_string()))?;
        serde_yaml::from_str(&content).context(crate::strings::logs::CONFIG_PARSE_ERROR)
    }
}

/// Bot identity and menu settings.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    #[serde(default = "default_bot_name")]
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub menu_image: Option<String>,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Overrides the platform label (defaults to the host OS).
    #[serde(default)]
    pub platform: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            owner: String::new(),
            menu_image: None,
            prefix: default_prefix(),
            platform: None,
        }
    }
}

impl BotConfig {
    pub fn menu_config(&self) -> MenuConfig {
        MenuConfig {
            bot_name: self.name.clone(),
            owner_name: self.owner.clone(),
            menu_image: self.menu_image.clone().filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn platform_label(&self) -> String {
        self.platform
            .clone()
            .unwrap_or_else(|| std::env::consts::OS.to_string())
    }
}

fn default_bot_name() -> String {
    "Construct".to_string()
}

fn default_prefix() -> String {
    ".".to_string()
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
