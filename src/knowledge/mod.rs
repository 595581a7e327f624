//! Static knowledge about supported technologies.
//!
//! The bundled `profiles.yaml` maps each technology profile to its archetype,
//! the image, port, env and label signals that produce evidence for it, and
//! the monitoring metadata downstream consumers surface. It is loaded and
//! validated once; a malformed entry fails the load rather than degrading
//! classification.

pub mod archetype;
pub mod definition;
pub mod error;
pub mod id_enum_macro;
pub mod profile;
pub mod registry;

pub use archetype::Archetype;
pub use definition::{
    AlertTemplate, EnvMatch, EnvSignal, LabelSignal, MetricSignal, MonitoringMetadata, PortSignal,
};
pub use error::KnowledgeBaseError;
pub use profile::{ExporterDefinition, ImagePattern, ProfileDefinition, UNKNOWN_PROFILE_ID};
pub use registry::KnowledgeBase;
