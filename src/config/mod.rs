//! Configuration Module
//!
//! Loads and validates configuration from TOML files.

pub mod loader;

pub use loader::{
    load_config, load_config_or_default, ApiSection, BrowserSection, Config, ConfigError,
    LoggingSection, ReportSection, DEFAULT_API_KEY_ENV, DEFAULT_CONFIG_PATH,
};
