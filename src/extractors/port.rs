//! Port extractor - exact port number lookups

use super::{ContainerEvidence, Evidence, SignalExtractor, SignalKind};
use crate::knowledge::KnowledgeBase;

pub struct PortExtractor;

impl SignalExtractor for PortExtractor {
    fn kind(&self) -> SignalKind {
        SignalKind::Port
    }

    fn extract(&self, container: &ContainerEvidence, kb: &KnowledgeBase) -> Vec<Evidence> {
        let mut evidence = Vec::new();
        for &port in &container.ports {
            for profile in kb.all_profiles() {
                for signal in profile.ports.iter().filter(|s| s.port == port) {
                    evidence.push(Evidence {
                        profile_id: profile.id.clone(),
                        kind: SignalKind::Port,
                        matched: signal.port.to_string(),
                        observed: port.to_string(),
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
    fn test_each_declared_port_is_looked_up() {
        let kb = KnowledgeBase::load().unwrap();
        let container = ContainerEvidence::new("")
            .with_port(5432)
            .with_port(6379)
            .with_port(12345);
        let evidence = PortExtractor.extract(&container, &kb);

        let ids: Vec<_> = evidence.iter().map(|e| e.profile_id.as_str()).collect();
        assert_eq!(ids, vec!["postgresql", "redis"]);
        assert!(evidence.iter().all(|e| e.weight == 0.25));
    }

    #[test]
    fn test_no_ports_yields_nothing() {
        let kb = KnowledgeBase::load().unwrap();
        assert!(PortExtractor
            .extract(&ContainerEvidence::new("postgres:15"), &kb)
            .is_empty());
    }
}
