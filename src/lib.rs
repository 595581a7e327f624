//! workload-classifier - evidence-based technology classification for
//! Kubernetes container workloads
//!
//! Given a container's declared metadata (image reference, ports,
//! environment variable names, labels), the classifier accumulates weighted
//! evidence against a bundled knowledge base of technology profiles and
//! reports the most likely technology, its archetype, a score in [0.0, 1.0]
//! and a confidence tier.
//!
//! # Example Usage
//!
//! ```no_run
//! use workload_classifier::{Classifier, ContainerEvidence, Tier};
//!
//! let classifier = Classifier::with_bundled().expect("bundled knowledge base is valid");
//! let container = ContainerEvidence::new("postgres:15")
//!     .with_port(5432)
//!     .with_env("POSTGRES_DB", "app");
//!
//! let result = classifier.classify(&container);
//! assert_eq!(result.profile_id, "postgresql");
//! assert_eq!(result.tier, Tier::High);
//! ```
//!
//! # Project Structure
//!
//! - [`knowledge`]: profile definitions, validation and the bundled profile set
//! - [`extractors`]: image, port, env and label signal extractors
//! - [`classifier`]: evidence accumulation, winner resolution and batch classification
//! - [`cli`]: command-line front end

pub mod classifier;
pub mod cli;
pub mod config;
pub mod extractors;
pub mod knowledge;
pub mod util;

pub use classifier::{BatchClassifier, ClassificationResult, Classifier, ClassifierError, Tier};
pub use config::{ClassifierConfig, ConfigError};
pub use extractors::{ContainerEvidence, Evidence, NamedContainer, SignalKind};
pub use knowledge::{Archetype, KnowledgeBase, KnowledgeBaseError, ProfileDefinition};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
