//! Configuration Loader
//!
//! Loads and validates configuration from a TOML file. Every section and
//! field is optional; omitted values take the built-in defaults. The API
//! key itself never lives in the file, only the name of the environment
//! variable that holds it.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::adapters::moralis::{MoralisConfig, DEFAULT_BASE_URL};
use crate::application::browser::BrowserSettings;
use crate::domain::{ExchangeRegistry, Timeframe};

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/topvc.toml";
pub const DEFAULT_API_KEY_ENV: &str = "MORALIS_API_KEY";

/// Main configuration structure matching topvc.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiSection,
    pub report: ReportSection,
    pub browser: BrowserSection,
    pub logging: LoggingSection,
}

/// Market-data API section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// API base URL
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Batch report section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Exchanges reported, in output order
    pub exchanges: Vec<String>,
    /// Timeframes reported, in output order (outer loop)
    pub timeframes: Vec<Timeframe>,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            exchanges: ["uniswap", "pancakeswap", "aerodrome", "raydium", "orca", "meteora"]
                .into_iter()
                .map(String::from)
                .collect(),
            timeframes: vec![
                Timeframe::OneHour,
                Timeframe::ThirtyMinutes,
                Timeframe::FiveMinutes,
            ],
        }
    }
}

/// Interactive browser section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserSection {
    pub exchanges: Vec<String>,
    pub timeframes: Vec<Timeframe>,
    /// Initial N (top by volume)
    pub top_volume: usize,
    /// Initial M (top by change)
    pub top_change: usize,
    /// Initial rows per page
    pub page_size: usize,
}

impl Default for BrowserSection {
    fn default() -> Self {
        Self {
            exchanges: vec!["uniswap".to_string(), "pancakeswap".to_string()],
            timeframes: Timeframe::ALL.to_vec(),
            top_volume: 10,
            top_change: 10,
            page_size: 50,
        }
    }
}

impl BrowserSection {
    pub fn settings(&self) -> BrowserSettings {
        BrowserSettings {
            exchanges: self.exchanges.clone(),
            timeframes: self.timeframes.clone(),
            top_volume: self.top_volume,
            top_change: self.top_change,
            page_size: self.page_size,
        }
    }
}

/// Logging section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Log file for the terminal browser (the terminal itself is the UI)
    pub log_file: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_file: "logs/topvc-browse.log".to_string(),
        }
    }
}

impl LoggingSection {
    /// Log file path with `~` expanded
    pub fn log_file_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_file).as_ref())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("API key not set: environment variable {0} is missing or empty")]
    MissingApiKey(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = shellexpand::tilde(&path.as_ref().to_string_lossy()).to_string();
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly given file, or the default file if present, or
/// fall back to built-in defaults
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url cannot be empty".to_string(),
            ));
        }

        if self.api.api_key_env.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "api.api_key_env cannot be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "api.timeout_secs must be > 0".to_string(),
            ));
        }

        validate_selection("report", &self.report.exchanges, &self.report.timeframes)?;
        validate_selection("browser", &self.browser.exchanges, &self.browser.timeframes)?;

        if self.browser.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "browser.page_size must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Read the API key from the configured environment variable
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as `resolve_api_key` with an injectable variable lookup
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let name = self.api.api_key_env.as_str();
        match lookup(name) {
            Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(ConfigError::MissingApiKey(name.to_string())),
        }
    }
}

fn validate_selection(
    section: &str,
    exchanges: &[String],
    timeframes: &[Timeframe],
) -> Result<(), ConfigError> {
    if exchanges.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{}.exchanges cannot be empty",
            section
        )));
    }

    if let Some(unknown) = exchanges.iter().find(|e| !ExchangeRegistry::contains(e)) {
        return Err(ConfigError::ValidationError(format!(
            "{}.exchanges: unknown exchange '{}' (known: {})",
            section,
            unknown,
            ExchangeRegistry::names().collect::<Vec<_>>().join(", ")
        )));
    }

    if timeframes.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{}.timeframes cannot be empty",
            section
        )));
    }

    Ok(())
}

impl ApiSection {
    /// Client configuration for the given API key
    pub fn client_config(&self, api_key: String) -> MoralisConfig {
        MoralisConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
