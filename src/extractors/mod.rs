// Signal extraction for container classification
//
// Each extractor inspects one facet of a container (image, ports, env names,
// labels) against the knowledge base and reports weighted evidence per
// profile. Extractors are stateless and never fail; an empty facet yields
// no evidence.

pub mod context;
pub mod env_vars;
pub mod image;
pub mod labels;
pub mod port;
pub mod registry;

use crate::knowledge::KnowledgeBase;
use serde::Serialize;
use std::fmt;

pub use context::{ContainerEvidence, NamedContainer};
pub use env_vars::EnvVarExtractor;
pub use image::ImageExtractor;
pub use labels::LabelExtractor;
pub use port::PortExtractor;
pub use registry::ExtractorRegistry;

/// The container facet a piece of evidence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Image,
    Port,
    Env,
    Label,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Image => "image",
            SignalKind::Port => "port",
            SignalKind::Env => "env",
            SignalKind::Label => "label",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted contribution toward one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evidence {
    pub profile_id: String,
    pub kind: SignalKind,
    /// The knowledge-base pattern that matched (regex, port, env name, label selector).
    pub matched: String,
    /// The container value it matched against.
    pub observed: String,
    pub weight: f64,
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' matched '{}' (+{:.2})",
            self.kind, self.observed, self.matched, self.weight
        )
    }
}

pub trait SignalExtractor: Send + Sync {
    fn kind(&self) -> SignalKind;

    fn extract(&self, container: &ContainerEvidence, kb: &KnowledgeBase) -> Vec<Evidence>;
}
