//! Workload classification.
//!
//! [`Classifier::classify`] runs every extractor over a container, folds the
//! evidence into per-profile scores and resolves a single winner. It never
//! fails: a container without evidence classifies as `unknown` with score 0.0.

pub mod accumulator;
pub mod batch;
pub mod result;

use crate::extractors::{ContainerEvidence, ExtractorRegistry};
use crate::knowledge::{Archetype, KnowledgeBase, KnowledgeBaseError};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

pub use batch::BatchClassifier;
pub use result::{ClassificationResult, Tier};

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error(transparent)]
    KnowledgeBase(#[from] KnowledgeBaseError),

    #[error("Classification worker failed: {0}")]
    Worker(String),
}

pub struct Classifier {
    kb: Arc<KnowledgeBase>,
    extractors: ExtractorRegistry,
}

impl Classifier {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self {
            kb,
            extractors: ExtractorRegistry::with_defaults(),
        }
    }

    /// Classifier over the bundled knowledge base.
    pub fn with_bundled() -> Result<Self, ClassifierError> {
        Ok(Self::new(Arc::new(KnowledgeBase::load()?)))
    }

    pub fn with_extractors(mut self, extractors: ExtractorRegistry) -> Self {
        self.extractors = extractors;
        self
    }

    pub fn knowledge_base(&self) -> &Arc<KnowledgeBase> {
        &self.kb
    }

    pub fn classify(&self, container: &ContainerEvidence) -> ClassificationResult {
        let contributions = self.extractors.extract_all(container, &self.kb);
        let candidates = accumulator::accumulate(contributions);
        let candidate_count = candidates.len();

        let Some((profile_id, winner)) = accumulator::resolve(candidates) else {
            debug!(image = %container.image, "No evidence for container");
            return ClassificationResult::unknown();
        };

        // Every evidence id comes from the knowledge base, so the lookup hits.
        let profile = self.kb.lookup(&profile_id);
        let score = winner.score();
        let result = ClassificationResult {
            display_name: profile.map(|p| p.display_name.clone()),
            archetype: profile
                .map(|p| p.archetype.clone())
                .unwrap_or(Archetype::Unknown),
            profile_id,
            score,
            tier: Tier::from_score(score),
            evidence: winner.evidence,
        };

        debug!(
            image = %container.image,
            profile = %result.profile_id,
            score = result.score,
            tier = %result.tier,
            candidates = candidate_count,
            "Classified container"
        );
        result
    }

    /// Sequential classification, one result per input in the same order.
    pub fn classify_all(&self, containers: &[ContainerEvidence]) -> Vec<ClassificationResult> {
        containers.iter().map(|c| self.classify(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::SignalKind;

    fn classifier() -> Classifier {
        Classifier::with_bundled().unwrap()
    }

    #[test]
    fn test_postgres_multi_signal() {
        let container = ContainerEvidence::new("postgres:15")
            .with_port(5432)
            .with_env("POSTGRES_DB", "app");
        let result = classifier().classify(&container);

        assert_eq!(result.profile_id, "postgresql");
        assert_eq!(result.display_name.as_deref(), Some("PostgreSQL"));
        assert_eq!(result.archetype, Archetype::Database);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.tier, Tier::High);
        let kinds: Vec<_> = result.evidence.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![SignalKind::Image, SignalKind::Port, SignalKind::Env]);
    }

    #[test]
    fn test_empty_container_is_unknown() {
        let result = classifier().classify(&ContainerEvidence::default());
        assert_eq!(result, ClassificationResult::unknown());
    }

    #[test]
    fn test_unmatched_image_is_unknown() {
        let result = classifier().classify(&ContainerEvidence::new("acme/billing-api:2.1.0"));
        assert!(result.is_unknown());
        assert_eq!(result.tier, Tier::Low);
    }

    #[test]
    fn test_port_only_is_medium() {
        let result = classifier().classify(&ContainerEvidence::new("").with_port(6379));
        assert_eq!(result.profile_id, "redis");
        assert_eq!(result.score, 0.25);
        assert_eq!(result.tier, Tier::Medium);
    }

    #[test]
    fn test_custom_extractor_set() {
        let kb = Arc::new(KnowledgeBase::load().unwrap());
        let classifier = Classifier::new(kb).with_extractors(
            ExtractorRegistry::new().with_extractor(Box::new(crate::extractors::PortExtractor)),
        );
        let result = classifier.classify(&ContainerEvidence::new("postgres:15"));
        assert!(result.is_unknown());
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let containers = vec![
            ContainerEvidence::new("redis:7"),
            ContainerEvidence::default(),
            ContainerEvidence::new("nginx:1.25"),
        ];
        let ids: Vec<_> = classifier()
            .classify_all(&containers)
            .into_iter()
            .map(|r| r.profile_id)
            .collect();
        assert_eq!(ids, vec!["redis", "unknown", "nginx"]);
    }
}
