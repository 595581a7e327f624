//! Configuration management for workload-classifier
//!
//! Settings come from environment variables with fallback defaults. The
//! knowledge base is bundled with the crate and is not configurable.
//!
//! # Environment Variables
//!
//! - `WORKLOAD_CLASSIFIER_LOG_LEVEL`: Logging level - default: "info"
//! - `WORKLOAD_CLASSIFIER_LOG_JSON`: JSON log output (true|false) - default: "false"
//! - `WORKLOAD_CLASSIFIER_WORKERS`: Batch worker count - default: available parallelism
//!
//! # Example
//!
//! ```no_run
//! use workload_classifier::ClassifierConfig;
//!
//! let config = ClassifierConfig::from_env().expect("Invalid environment");
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::thread;
use thiserror::Error;

pub const ENV_LOG_LEVEL: &str = "WORKLOAD_CLASSIFIER_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "WORKLOAD_CLASSIFIER_LOG_JSON";
pub const ENV_WORKERS: &str = "WORKLOAD_CLASSIFIER_WORKERS";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;
const MAX_WORKERS: usize = 256;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON lines
    pub log_json: bool,

    /// Worker tasks used by batch classification
    pub workers: usize,
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(MAX_WORKERS)
}

impl Default for ClassifierConfig {
    /// Loads from environment variables, silently falling back to defaults
    /// for missing or unparsable values.
    fn default() -> Self {
        let log_level = env::var(ENV_LOG_LEVEL)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var(ENV_LOG_JSON)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_LOG_JSON);

        let workers = env::var(ENV_WORKERS)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or_else(default_workers);

        Self {
            log_level,
            log_json,
            workers,
        }
    }
}

impl ClassifierConfig {
    /// Loads from environment variables, reporting values that fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level = env::var(ENV_LOG_LEVEL)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = match env::var(ENV_LOG_JSON) {
            Ok(v) => v
                .trim()
                .to_lowercase()
                .parse::<bool>()
                .map_err(|e| ConfigError::ParseError {
                    field: ENV_LOG_JSON.to_string(),
                    error: e.to_string(),
                })?,
            Err(_) => DEFAULT_LOG_JSON,
        };

        let workers = match env::var(ENV_WORKERS) {
            Ok(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::ParseError {
                    field: ENV_WORKERS.to_string(),
                    error: e.to_string(),
                })?,
            Err(_) => default_workers(),
        };

        Ok(Self {
            log_level,
            log_json,
            workers,
        })
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` for an unknown log level or a
    /// worker count outside 1..=256.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.workers == 0 {
            return Err(ConfigError::ValidationFailed(
                "Worker count must be at least 1".to_string(),
            ));
        }
        if self.workers > MAX_WORKERS {
            return Err(ConfigError::ValidationFailed(format!(
                "Worker count cannot exceed {}",
                MAX_WORKERS
            )));
        }

        Ok(())
    }

    /// Converts configuration to a display map for output formatting
    pub fn to_display_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert("log_json".to_string(), self.log_json.to_string());
        map.insert("workers".to_string(), self.workers.to_string());
        map
    }
}

impl fmt::Display for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workload Classifier Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        writeln!(f, "  Workers: {}", self.workers)?;
        Ok(())
    }
}
