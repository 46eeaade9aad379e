//! Configuration management for inspection-history.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::{try_render_date, DEFAULT_MONTH_LABEL_FORMAT};
use crate::sections::DEFAULT_SECTION_TITLE_FORMAT;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "inspection-history";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `INSPECTION_HISTORY_`)
/// 2. TOML config file at `~/.config/inspection-history/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset configuration.
    pub data: DataConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Where inspection records come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to a JSON dataset.
    /// Defaults to the bundled sample dataset.
    pub dataset_path: Option<PathBuf>,
}

/// How dates are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `chrono` format for section titles.
    pub section_title_format: String,
    /// `chrono` format for month labels.
    pub month_label_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            section_title_format: DEFAULT_SECTION_TITLE_FORMAT.to_string(),
            month_label_format: DEFAULT_MONTH_LABEL_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `INSPECTION_HISTORY_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("INSPECTION_HISTORY_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        validate_date_format(
            "section_title_format",
            &self.display.section_title_format,
        )?;
        validate_date_format("month_label_format", &self.display.month_label_format)?;

        if let Some(path) = &self.data.dataset_path {
            if path.as_os_str().is_empty() {
                return Err(Error::config_validation(
                    "dataset_path must not be empty when set",
                ));
            }
        }

        Ok(())
    }
}

/// Reject empty format strings and ones a calendar date cannot render.
fn validate_date_format(field: &str, format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(Error::config_validation(format!("{field} must not be empty")));
    }

    // Time and offset fields parse fine but fail when applied to a date
    let sample = NaiveDate::from_ymd_opt(2025, 1, 24).unwrap_or_default();
    if try_render_date(sample, format).is_none() {
        return Err(Error::config_validation(format!(
            "invalid date format in {field}: {format}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.data.dataset_path.is_none());
        assert_eq!(config.display.section_title_format, "%a, %b %-d, %Y");
        assert_eq!(config.display.month_label_format, "%B %Y");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title_format() {
        let mut config = Config::default();
        config.display.section_title_format = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("section_title_format"));
    }

    #[test]
    fn test_validate_bad_month_format() {
        let mut config = Config::default();
        config.display.month_label_format = "%B %Q".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("month_label_format"));
    }

    #[test]
    fn test_validate_rejects_time_only_format() {
        let mut config = Config::default();
        config.display.section_title_format = "%H:%M".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("section_title_format"));
        assert!(err.contains("%H:%M"));
    }

    #[test]
    fn test_validate_accepts_custom_date_formats() {
        let mut config = Config::default();
        config.display.section_title_format = "%d.%m.%Y".to_string();
        config.display.month_label_format = "%m/%Y".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_dataset_path() {
        let mut config = Config::default();
        config.data.dataset_path = Some(PathBuf::new());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("dataset_path"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("inspection-history"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "inspection-history-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[data]\ndataset_path = \"/srv/inspections.json\"\n\n[display]\nmonth_label_format = \"%m/%Y\"\n",
        )
        .unwrap();

        let result = Config::load_from(Some(path.clone()));
        let _ = std::fs::remove_file(&path);

        let config = result.unwrap();
        assert_eq!(
            config.data.dataset_path,
            Some(PathBuf::from("/srv/inspections.json"))
        );
        assert_eq!(config.display.month_label_format, "%m/%Y");
        assert_eq!(
            config.display.section_title_format,
            DEFAULT_SECTION_TITLE_FORMAT
        );
    }

    #[test]
    fn test_display_config_deserialize() {
        let json = r#"{"section_title_format": "%d.%m.%Y"}"#;
        let display: DisplayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(display.section_title_format, "%d.%m.%Y");
        assert_eq!(display.month_label_format, DEFAULT_MONTH_LABEL_FORMAT);
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("dataset_path"));
        assert!(json.contains("section_title_format"));
    }
}
