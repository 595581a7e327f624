//! Structured logging setup for workload-classifier
//!
//! Initializes a `tracing` subscriber writing to stderr, so stdout stays
//! reserved for classification output. Console output is the default; JSON
//! lines are available for log shipping.
//!
//! # Example
//!
//! ```no_run
//! use workload_classifier::util::logging::{init_logging, LoggingConfig};
//! use workload_classifier::ClassifierConfig;
//!
//! init_logging(LoggingConfig::from(&ClassifierConfig::default()));
//!
//! tracing::info!(profiles = 14, "Knowledge base loaded");
//! ```

use crate::config::ClassifierConfig;
use std::io;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

const CRATE_TARGET: &str = "workload_classifier";

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level for this crate
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., workload_classifier::knowledge) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread IDs, useful when following batch workers
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// JSON output with source locations, for log pipelines.
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
            include_thread_ids: true,
        }
    }
}

impl From<&ClassifierConfig> for LoggingConfig {
    /// JSON logging switches to the production layout; the level is taken
    /// as configured.
    fn from(config: &ClassifierConfig) -> Self {
        let base = if config.log_json {
            Self::production()
        } else {
            Self::default()
        };
        Self {
            level: parse_level(&config.log_level),
            ..base
        }
    }
}

/// Parses a log level from a string
///
/// Case-insensitive. Unrecognised input falls back to `Level::INFO`.
///
/// # Example
///
/// ```
/// use workload_classifier::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!("Unrecognised log level '{}', using info", level_str);
            Level::INFO
        }
    }
}

fn crate_directive(level: Level) -> Option<Directive> {
    format!("{}={}", CRATE_TARGET, level).parse().ok()
}

/// Initializes the logging system with the provided configuration
///
/// Only the first call has an effect. `RUST_LOG` directives are honoured in
/// addition to the crate level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Some(directive) = crate_directive(config.level) {
            filter = filter.add_directive(directive);
        }

        // Exactly one of the two formatting layers is present.
        let json = config.use_json.then(|| {
            fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_target(config.include_target)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_thread_ids(config.include_thread_ids)
        });
        let plain = (!config.use_json).then(|| {
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(config.include_target)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_thread_ids(config.include_thread_ids)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(json)
            .with(plain)
            .init();
    });
}
