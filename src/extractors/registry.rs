// Registry of signal extractors, in the order they run
use super::{
    ContainerEvidence, EnvVarExtractor, Evidence, ImageExtractor, LabelExtractor, PortExtractor,
    SignalExtractor, SignalKind,
};
use crate::knowledge::KnowledgeBase;
use tracing::debug;

pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn SignalExtractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Image, port, env and label extractors, in that order.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_extractor(Box::new(ImageExtractor))
            .with_extractor(Box::new(PortExtractor))
            .with_extractor(Box::new(EnvVarExtractor))
            .with_extractor(Box::new(LabelExtractor))
    }

    pub fn with_extractor(mut self, extractor: Box<dyn SignalExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    pub fn kinds(&self) -> Vec<SignalKind> {
        self.extractors.iter().map(|e| e.kind()).collect()
    }

    /// Runs every extractor and concatenates their evidence in run order.
    pub fn extract_all(&self, container: &ContainerEvidence, kb: &KnowledgeBase) -> Vec<Evidence> {
        let mut evidence = Vec::new();
        for extractor in &self.extractors {
            let found = extractor.extract(container, kb);
            if !found.is_empty() {
                debug!(kind = %extractor.kind(), count = found.len(), "Extractor contributed evidence");
            }
            evidence.extend(found);
        }
        evidence
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(
            ExtractorRegistry::with_defaults().kinds(),
            vec![
                SignalKind::Image,
                SignalKind::Port,
                SignalKind::Env,
                SignalKind::Label
            ]
        );
    }

    #[test]
    fn test_extract_all_concatenates_in_run_order() {
        let kb = KnowledgeBase::load().unwrap();
        let container = ContainerEvidence::new("postgres:15")
            .with_port(5432)
            .with_env("POSTGRES_DB", "app");
        let kinds: Vec<_> = ExtractorRegistry::with_defaults()
            .extract_all(&container, &kb)
            .iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(kinds, vec![SignalKind::Image, SignalKind::Port, SignalKind::Env]);
    }

    #[test]
    fn test_empty_registry_extracts_nothing() {
        let kb = KnowledgeBase::load().unwrap();
        let container = ContainerEvidence::new("postgres:15");
        assert!(ExtractorRegistry::new().extract_all(&container, &kb).is_empty());
    }
}
