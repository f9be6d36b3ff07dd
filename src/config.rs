// config.rs
// Logger configuration: defaults, then an optional TOML file, then SEVLOG_* env vars

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::errors::{LogError, LogResult};
use crate::log_event::LineFormat;

pub const DEFAULT_CONFIG_FILE: &str = "sevlog.toml";
pub const ENV_PREFIX: &str = "SEVLOG_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_log_name")]
    pub log_name: String,
    /// Empty means error-tier lines share the standard file.
    #[serde(default)]
    pub error_name: String,
    #[serde(default)]
    pub line_format: LineFormat,
}

fn default_directory() -> String {
    "./logs".to_string()
}

fn default_log_name() -> String {
    "app_logs".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            directory: default_directory(),
            log_name: default_log_name(),
            error_name: String::new(),
            line_format: LineFormat::Raw,
        }
    }
}

impl LoggerConfig {
    pub fn validate(&self) -> LogResult<()> {
        if self.directory.trim().is_empty() {
            return Err(LogError::validation("directory", "log directory cannot be empty"));
        }
        if self.log_name.trim().is_empty() {
            return Err(LogError::validation("log_name", "log name cannot be empty"));
        }
        Ok(())
    }
}

pub fn figment(config_path: Option<&str>) -> Figment {
    Figment::from(Serialized::defaults(LoggerConfig::default()))
        .merge(Toml::file(config_path.unwrap_or(DEFAULT_CONFIG_FILE)))
        .merge(Env::prefixed(ENV_PREFIX))
}

/// Load and validate the configuration. A missing TOML file is not an error.
pub fn load_config(config_path: Option<&str>) -> LogResult<LoggerConfig> {
    let config: LoggerConfig = figment(config_path).extract()?;
    config.validate()?;
    Ok(config)
}
