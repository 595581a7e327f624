//! Image extractor - regex matching against the full image reference

use super::{ContainerEvidence, Evidence, SignalExtractor, SignalKind};
use crate::knowledge::KnowledgeBase;

/// Tests the image against every pattern of every profile.
///
/// Several patterns of the same profile can match one image; each match
/// contributes.
pub struct ImageExtractor;

impl SignalExtractor for ImageExtractor {
    fn kind(&self) -> SignalKind {
        SignalKind::Image
    }

    fn extract(&self, container: &ContainerEvidence, kb: &KnowledgeBase) -> Vec<Evidence> {
        let image = container.image.trim();
        if image.is_empty() {
            return Vec::new();
        }

        let mut evidence = Vec::new();
        for profile in kb.all_profiles() {
            for pattern in profile.image_patterns.iter().filter(|p| p.is_match(image)) {
                evidence.push(Evidence {
                    profile_id: profile.id.clone(),
                    kind: SignalKind::Image,
                    matched: pattern.pattern.clone(),
                    observed: image.to_string(),
                    weight: pattern.weight,
                });
            }
        }
        evidence
    }
}
