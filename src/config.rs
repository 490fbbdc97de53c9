use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::OutputFormat;
use crate::logging::LogConfig;
use crate::processing::ProcessingOptions;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LogConfig,

    /// Batch processing settings
    pub processing: ProcessingOptions,

    /// Output settings
    pub output: OutputSettings,
}

/// Where and how summaries are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format
    pub format: OutputFormat,

    /// Output file (None for stdout)
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fitness-tracker")
            .join("config.toml")
    }

    /// Load the default configuration file, or defaults if there is none.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            tracing::debug!(
                "Config file not found, using defaults: {}",
                config_path.display()
            );
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use crate::processing::ErrorPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.processing.error_policy, ErrorPolicy::Stop);
        assert!(!config.processing.parallel);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [processing]
            error_policy = "continue"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.processing.error_policy, ErrorPolicy::Continue);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.output, OutputSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Csv;
        config.processing.parallel = true;
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"pdf\"\n").unwrap();

        assert!(AppConfig::load_from_file(&path).is_err());
    }

    #[test]
    fn test_default_config_path() {
        let path = AppConfig::default_config_path();
        assert!(path.ends_with("fitness-tracker/config.toml"));
    }
}
