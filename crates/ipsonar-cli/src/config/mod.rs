//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use ipsonar::LocaleCode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// IP-Sonar API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Default output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Default comma-separated field selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Default locale for place names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_code: Option<LocaleCode>,

    /// Default request timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "ip-sonar", "sonar")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or defaults if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set a value by key name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_key" => self.api_key = Some(value.to_string()),
            "base_url" => self.base_url = Some(value.to_string()),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "fields" => self.fields = Some(value.to_string()),
            "locale_code" | "locale" => {
                self.locale_code = Some(value.parse().map_err(anyhow::Error::msg)?);
            }
            "timeout_ms" | "timeout" => self.timeout_ms = Some(value.parse()?),
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     api_key        - Your IP-Sonar API key\n  \
                     base_url       - API base URL\n  \
                     output_format  - Default output format (pretty/json/csv/yaml)\n  \
                     fields         - Default comma-separated field selection\n  \
                     locale_code    - Default locale (de/en/es/fr/ja/pt-br/ru/zh-cn)\n  \
                     timeout_ms     - Default request timeout in milliseconds",
                    key
                );
            }
        }

        Ok(())
    }
}
