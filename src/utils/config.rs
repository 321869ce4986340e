// Configuration utilities
// Author: Gabriel Demetrios Lafis

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AppError, AppResult};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub browser: BrowserConfig,
    pub terminal: TerminalConfig,
    pub logging: LoggingConfig,
}

/// Where the city trip files live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
}

/// Raw data browser paging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub default_page_size: usize,
    pub min_page_size: usize,
    pub max_page_size: usize,
}

/// Terminal behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub clear_screen: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            dir: PathBuf::from("."),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            default_page_size: 5,
            min_page_size: 1,
            max_page_size: 60,
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig { clear_screen: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON or YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?,
            _ => {
                return Err(AppError::Config(format!(
                    "Unsupported config file format: {}",
                    path.display()
                )))
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that the browser bounds are consistent
    pub fn validate(&self) -> AppResult<()> {
        let browser = &self.browser;
        if browser.min_page_size == 0 {
            return Err(AppError::Config("min_page_size must be at least 1".to_string()));
        }
        super::validate_range(
            browser.default_page_size,
            browser.min_page_size,
            browser.max_page_size,
            "default_page_size",
        )
        .map_err(AppError::Config)
    }

    /// Get the log level filter
    pub fn log_level_filter(&self) -> log::LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Warn,
        }
    }
}
