//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Tracing env-filter directive.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Default cash book grouping when the caller does not pick one.
    #[serde(default = "default_group_by")]
    pub default_group_by: String,
    /// Category keywords routing a cash-flow row to the INVESTING section.
    #[serde(default = "default_investing_keywords")]
    pub investing_keywords: Vec<String>,
    /// Category keywords routing a cash-flow row to the FINANCING section.
    #[serde(default = "default_financing_keywords")]
    pub financing_keywords: Vec<String>,
}

fn default_group_by() -> String {
    "daily".to_string()
}

fn default_investing_keywords() -> Vec<String> {
    vec!["invest".to_string()]
}

fn default_financing_keywords() -> Vec<String> {
    vec!["pendanaan".to_string(), "financing".to_string()]
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            default_group_by: default_group_by(),
            investing_keywords: default_investing_keywords(),
            financing_keywords: default_financing_keywords(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            reporting: ReportingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KASBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
