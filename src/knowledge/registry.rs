use super::definition::KnowledgeDocument;
use super::profile::{ExporterDefinition, ProfileDefinition};
use super::{Archetype, KnowledgeBaseError};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

const BUNDLED_PROFILES: &str = include_str!("profiles.yaml");

/// Read-only registry of technology profiles and known exporters.
///
/// Built once, validated in full, then shared behind an `Arc`. Nothing
/// mutates it after construction.
#[derive(Debug)]
pub struct KnowledgeBase {
    profiles: Vec<ProfileDefinition>,
    index: HashMap<String, usize>,
    exporters: Vec<ExporterDefinition>,
}

impl KnowledgeBase {
    /// Loads the profile set bundled with the crate.
    pub fn load() -> Result<Self, KnowledgeBaseError> {
        Self::from_yaml(BUNDLED_PROFILES)
    }

    /// Parses and validates a knowledge base document.
    ///
    /// Any defect (bad regex, duplicate id, unknown archetype, out-of-range
    /// weight) rejects the whole document.
    pub fn from_yaml(source: &str) -> Result<Self, KnowledgeBaseError> {
        let document: KnowledgeDocument = serde_yaml::from_str(source)?;
        if document.profiles.is_empty() {
            return Err(KnowledgeBaseError::Empty);
        }

        let mut profiles = Vec::with_capacity(document.profiles.len());
        let mut index = HashMap::with_capacity(document.profiles.len());
        for spec in document.profiles {
            let profile = ProfileDefinition::compile(spec)?;
            if index.contains_key(&profile.id) {
                return Err(KnowledgeBaseError::DuplicateProfile(profile.id));
            }
            debug!(
                profile = %profile.id,
                archetype = %profile.archetype,
                signals = profile.signal_count(),
                "Registered profile"
            );
            index.insert(profile.id.clone(), profiles.len());
            profiles.push(profile);
        }

        let mut seen = HashSet::new();
        let mut exporters = Vec::with_capacity(document.exporters.len());
        for spec in document.exporters {
            let exporter = ExporterDefinition::compile(spec)?;
            if !seen.insert(exporter.name.clone()) {
                return Err(KnowledgeBaseError::DuplicateExporter(exporter.name));
            }
            exporters.push(exporter);
        }

        info!(
            profiles = profiles.len(),
            exporters = exporters.len(),
            "Knowledge base loaded"
        );

        Ok(Self {
            profiles,
            index,
            exporters,
        })
    }

    pub fn lookup(&self, id: &str) -> Option<&ProfileDefinition> {
        self.index.get(id).map(|&i| &self.profiles[i])
    }

    /// All profiles in definition order.
    pub fn all_profiles(&self) -> &[ProfileDefinition] {
        &self.profiles
    }

    pub fn profiles_for_archetype<'a>(
        &'a self,
        archetype: &'a Archetype,
    ) -> impl Iterator<Item = &'a ProfileDefinition> + 'a {
        self.profiles
            .iter()
            .filter(move |p| &p.archetype == archetype)
    }

    pub fn exporters(&self) -> &[ExporterDefinition] {
        &self.exporters
    }

    /// Exporters whose image pattern matches `image`.
    pub fn match_exporters<'a>(
        &'a self,
        image: &'a str,
    ) -> impl Iterator<Item = &'a ExporterDefinition> + 'a {
        self.exporters.iter().filter(move |e| e.is_match(image))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
