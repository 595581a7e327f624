//! Environment variable extractor - matches variable names, never values

use super::{ContainerEvidence, Evidence, SignalExtractor, SignalKind};
use crate::knowledge::KnowledgeBase;

pub struct EnvVarExtractor;

impl SignalExtractor for EnvVarExtractor {
    fn kind(&self) -> SignalKind {
        SignalKind::Env
    }

    fn extract(&self, container: &ContainerEvidence, kb: &KnowledgeBase) -> Vec<Evidence> {
        let mut evidence = Vec::new();
        for name in container.env_vars.keys() {
            for profile in kb.all_profiles() {
                for signal in profile.env.iter().filter(|s| s.matches(name)) {
                    evidence.push(Evidence {
                        profile_id: profile.id.clone(),
                        kind: SignalKind::Env,
                        matched: signal.name.clone(),
                        observed: name.clone(),
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
    fn test_prefix_family_matches_each_variable() {
        let kb = KnowledgeBase::load().unwrap();
        let container = ContainerEvidence::new("")
            .with_env("POSTGRES_DB", "app")
            .with_env("POSTGRES_USER", "app")
            .with_env("PATH", "/usr/bin");
        let evidence = EnvVarExtractor.extract(&container, &kb);

        assert_eq!(evidence.len(), 2);
        assert!(evidence.iter().all(|e| e.profile_id == "postgresql"));
        assert_eq!(evidence[0].observed, "POSTGRES_DB");
        assert_eq!(evidence[0].matched, "POSTGRES_");
    }

    #[test]
    fn test_value_is_ignored() {
        let kb = KnowledgeBase::load().unwrap();
        let container = ContainerEvidence::new("").with_env("APP_MODE", "POSTGRES_");
        assert!(EnvVarExtractor.extract(&container, &kb).is_empty());
    }
}
