use super::definition::{
    EnvSignal, ExporterSpec, ImagePatternSpec, LabelSignal, MonitoringMetadata, PortSignal,
    ProfileSpec,
};
use super::{Archetype, KnowledgeBaseError};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Reserved id of the fallback result; no profile may claim it.
pub const UNKNOWN_PROFILE_ID: &str = "unknown";

/// A compiled, case-insensitive image pattern.
#[derive(Debug, Clone, Serialize)]
pub struct ImagePattern {
    pub pattern: String,
    pub weight: f64,
    #[serde(skip)]
    regex: Regex,
}

impl ImagePattern {
    pub fn is_match(&self, image: &str) -> bool {
        self.regex.is_match(image)
    }
}

/// A validated technology profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDefinition {
    pub id: String,
    pub display_name: String,
    pub archetype: Archetype,
    pub description: String,
    pub image_patterns: Vec<ImagePattern>,
    pub ports: Vec<PortSignal>,
    pub env: Vec<EnvSignal>,
    pub labels: Vec<LabelSignal>,
    pub exporter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter_port: Option<u16>,
    pub builtin_metrics: bool,
    pub monitoring: MonitoringMetadata,
}

impl ProfileDefinition {
    pub fn compile(spec: ProfileSpec) -> Result<Self, KnowledgeBaseError> {
        let id = spec.id.trim().to_string();
        if id.is_empty() {
            return Err(KnowledgeBaseError::EmptyField {
                profile: spec.display_name,
                field: "id",
            });
        }
        if id == UNKNOWN_PROFILE_ID {
            return Err(KnowledgeBaseError::ReservedId(id));
        }
        if spec.display_name.trim().is_empty() {
            return Err(KnowledgeBaseError::EmptyField {
                profile: id,
                field: "display_name",
            });
        }
        if !spec.archetype.is_assignable() {
            return Err(KnowledgeBaseError::UnknownArchetype {
                profile: id,
                archetype: spec.archetype.as_str().to_string(),
            });
        }

        let image_patterns = spec
            .image_patterns
            .into_iter()
            .map(|p| compile_image_pattern(&id, p))
            .collect::<Result<Vec<_>, _>>()?;

        for port in &spec.ports {
            check_weight(&id, "port", port.weight)?;
            if port.port == 0 {
                return Err(KnowledgeBaseError::InvalidPort { profile: id });
            }
        }
        for env in &spec.env {
            check_weight(&id, "env", env.weight)?;
            if env.name.is_empty() {
                return Err(KnowledgeBaseError::EmptyField {
                    profile: id,
                    field: "env name",
                });
            }
        }
        for label in &spec.labels {
            check_weight(&id, "label", label.weight)?;
            if label.key.is_empty() {
                return Err(KnowledgeBaseError::EmptyField {
                    profile: id,
                    field: "label key",
                });
            }
        }

        Ok(Self {
            id,
            display_name: spec.display_name,
            archetype: spec.archetype,
            description: spec.description,
            image_patterns,
            ports: spec.ports,
            env: spec.env,
            labels: spec.labels,
            exporter: spec.exporter,
            exporter_port: spec.exporter_port,
            builtin_metrics: spec.builtin_metrics,
            monitoring: spec.monitoring,
        })
    }

    /// Number of signals of every kind this profile declares.
    pub fn signal_count(&self) -> usize {
        self.image_patterns.len() + self.ports.len() + self.env.len() + self.labels.len()
    }
}

/// A known metrics exporter, recognised by its image.
#[derive(Debug, Clone, Serialize)]
pub struct ExporterDefinition {
    pub name: String,
    pub image_pattern: String,
    #[serde(skip)]
    regex: Regex,
}

impl ExporterDefinition {
    pub fn compile(spec: ExporterSpec) -> Result<Self, KnowledgeBaseError> {
        if spec.name.trim().is_empty() {
            return Err(KnowledgeBaseError::EmptyField {
                profile: "exporters".to_string(),
                field: "name",
            });
        }
        let regex = build_regex(&spec.name, &spec.image_pattern)?;
        Ok(Self {
            name: spec.name,
            image_pattern: spec.image_pattern,
            regex,
        })
    }

    pub fn is_match(&self, image: &str) -> bool {
        self.regex.is_match(image)
    }
}

fn compile_image_pattern(
    profile: &str,
    spec: ImagePatternSpec,
) -> Result<ImagePattern, KnowledgeBaseError> {
    check_weight(profile, "image", spec.weight)?;
    let regex = build_regex(profile, &spec.pattern)?;
    Ok(ImagePattern {
        pattern: spec.pattern,
        weight: spec.weight,
        regex,
    })
}

fn build_regex(owner: &str, pattern: &str) -> Result<Regex, KnowledgeBaseError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| KnowledgeBaseError::InvalidPattern {
            owner: owner.to_string(),
            pattern: pattern.to_string(),
            source,
        })
}

fn check_weight(profile: &str, signal: &'static str, weight: f64) -> Result<(), KnowledgeBaseError> {
    if weight.is_finite() && weight > 0.0 && weight <= 1.0 {
        Ok(())
    } else {
        Err(KnowledgeBaseError::InvalidWeight {
            profile: profile.to_string(),
            signal,
            weight,
        })
    }
}
