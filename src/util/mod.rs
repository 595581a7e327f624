//! Utility modules for workload-classifier

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
