//! Label extractor - exact key, case-insensitive value or wildcard

use super::{ContainerEvidence, Evidence, SignalExtractor, SignalKind};
use crate::knowledge::KnowledgeBase;

pub struct LabelExtractor;

impl SignalExtractor for LabelExtractor {
    fn kind(&self) -> SignalKind {
        SignalKind::Label
    }

    fn extract(&self, container: &ContainerEvidence, kb: &KnowledgeBase) -> Vec<Evidence> {
        let mut evidence = Vec::new();
        for (key, value) in &container.labels {
            for profile in kb.all_profiles() {
                for signal in profile.labels.iter().filter(|s| s.matches(key, value)) {
                    let matched = match &signal.value {
                        Some(v) if !signal.is_wildcard() => format!("{}={}", signal.key, v),
                        _ => format!("{}=*", signal.key),
                    };
                    evidence.push(Evidence {
                        profile_id: profile.id.clone(),
                        kind: SignalKind::Label,
                        matched,
                        observed: format!("{}={}", key, value),
                        weight: signal.weight,
                    });
                }
            }
        }
        evidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_name_label() {
        let kb = KnowledgeBase::load().unwrap();
        let container = ContainerEvidence::new("").with_label("app.kubernetes.io/name", "Redis");
        let evidence = LabelExtractor.extract(&container, &kb);

        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].profile_id, "redis");
        assert_eq!(evidence[0].matched, "app.kubernetes.io/name=redis");
        assert_eq!(evidence[0].observed, "app.kubernetes.io/name=Redis");
        assert_eq!(evidence[0].weight, 0.20);
    }

    #[test]
    fn test_wildcard_label_matches_any_value() {
        let kb = KnowledgeBase::from_yaml(
            r#"
profiles:
  - id: meshed
    display_name: Meshed
    archetype: reverse-proxy
    labels:
      - key: sidecar.istio.io/inject
"#,
        )
        .unwrap();
        let container = ContainerEvidence::new("").with_label("sidecar.istio.io/inject", "true");
        let evidence = LabelExtractor.extract(&container, &kb);
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].matched, "sidecar.istio.io/inject=*");
    }

    #[test]
    fn test_unrelated_labels_yield_nothing() {
        let kb = KnowledgeBase::load().unwrap();
        let container = ContainerEvidence::new("").with_label("team", "payments");
        assert!(LabelExtractor.extract(&container, &kb).is_empty());
    }
}
