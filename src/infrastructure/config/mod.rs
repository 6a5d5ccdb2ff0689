//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub storage: StorageConfig,
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    /// Prefix given to guilds that never set their own
    pub default_prefix: String,
    #[serde(default)]
    pub reply_on_unknown: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::Sqlite
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    pub path: PathBuf,
}

/// Identity the console adapter uses for the guild and user it simulates
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub guild_id: String,
    pub guild_name: String,
    pub author_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "FilterBot".to_string(),
                default_prefix: "f!".to_string(),
                reply_on_unknown: false,
            },
            storage: StorageConfig {
                backend: StorageBackend::Sqlite,
                path: PathBuf::from("filterbot.db"),
            },
            console: ConsoleConfig {
                guild_id: "console".to_string(),
                guild_name: "Console".to_string(),
                author_id: "console-user".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Overlay `FILTERBOT_*` environment variables
    pub fn apply_env(&mut self) {
        if let Ok(prefix) = std::env::var("FILTERBOT_PREFIX") {
            self.bot.default_prefix = prefix;
        }

        if let Ok(path) = std::env::var("FILTERBOT_DB") {
            self.storage.path = PathBuf::from(path);
        }

        if let Ok(backend) = std::env::var("FILTERBOT_STORAGE") {
            match backend.to_lowercase().as_str() {
                "memory" => self.storage.backend = StorageBackend::Memory,
                "sqlite" => self.storage.backend = StorageBackend::Sqlite,
                other => tracing::warn!("Ignoring unknown FILTERBOT_STORAGE value: {}", other),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.default_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue("bot.default-prefix must not be empty".to_string()));
        }
        if self.console.guild_id.is_empty() {
            return Err(ConfigError::MissingField("console.guild-id".to_string()));
        }
        Ok(())
    }
}
