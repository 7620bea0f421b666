use super::Options;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Autocomplete configuration, persisted as TOML.
///
/// ```toml
/// [provider]
/// kind = "redb"
/// path = "/var/lib/lexis/index.redb"
///
/// [options]
/// namespace = "cities"
/// strategy = "n_gram"
/// ngram_size = 3
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub options: Options,
}

/// Selects a registered provider by name. Every other key in the section is
/// handed to that provider's factory untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_kind")]
    pub kind: String,
    #[serde(flatten)]
    pub settings: toml::Table,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_provider_kind(),
            settings: toml::Table::new(),
        }
    }
}

fn default_provider_kind() -> String {
    "memory".to_string()
}

impl AutocompleteConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("lexis.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.options.validate();
        if self.provider.kind.trim().is_empty() {
            errors.push("provider.kind must not be empty".to_string());
        }
        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        for problem in self.validate() {
            tracing::warn!(%problem, "replacing invalid config value with default");
        }

        let provider = if self.provider.kind.trim().is_empty() {
            ProviderConfig {
                kind: default_provider_kind(),
                settings: self.provider.settings.clone(),
            }
        } else {
            self.provider.clone()
        };

        Self {
            provider,
            options: self.options.with_defaults_for_invalid(),
        }
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
