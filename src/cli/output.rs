//! Output formatting for multiple formats
//!
//! JSON and YAML serialize the library types directly. Human output is a
//! compact report: profile, archetype, score, tier, the evidence trail and
//! the associated exporter.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::classifier::ClassificationResult;
use crate::config::ClassifierConfig;
use crate::knowledge::{KnowledgeBase, ProfileDefinition};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// A classification result labelled with its batch entry name.
#[derive(Debug, Clone, Serialize)]
pub struct NamedResult {
    pub name: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_result(&self, result: &ClassificationResult, kb: &KnowledgeBase) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(result, "classification result"),
            OutputFormat::Yaml => to_yaml(result, "classification result"),
            OutputFormat::Human => Ok(human_result(None, result, kb)),
        }
    }

    pub fn format_batch(&self, results: &[NamedResult], kb: &KnowledgeBase) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&results, "batch results"),
            OutputFormat::Yaml => to_yaml(&results, "batch results"),
            OutputFormat::Human => {
                let mut output = String::new();
                for (i, named) in results.iter().enumerate() {
                    if i > 0 {
                        output.push('\n');
                    }
                    output.push_str(&human_result(Some(&named.name), &named.result, kb));
                }
                let low = results
                    .iter()
                    .filter(|r| r.result.tier.advisory().is_some())
                    .count();
                output.push_str(&format!(
                    "\n{} container(s) classified, {} need manual verification\n",
                    results.len(),
                    low
                ));
                Ok(output)
            }
        }
    }

    pub fn format_profiles(&self, profiles: &[&ProfileDefinition]) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&profiles, "profiles"),
            OutputFormat::Yaml => to_yaml(&profiles, "profiles"),
            OutputFormat::Human => {
                let mut output = String::new();
                for profile in profiles {
                    output.push_str(&format!(
                        "{:<15} {:<20} {:<15} exporter: {}\n",
                        profile.id,
                        profile.display_name,
                        profile.archetype.as_str(),
                        exporter_label(profile)
                    ));
                }
                output.push_str(&format!("{} profile(s)", profiles.len()));
                Ok(output)
            }
        }
    }

    pub fn format_config(&self, config: &ClassifierConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&config.to_display_map(), "config"),
            OutputFormat::Yaml => to_yaml(&config.to_display_map(), "config"),
            OutputFormat::Human => Ok(config.to_string()),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {} to JSON", what))
}

fn to_yaml<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_yaml::to_string(value).with_context(|| format!("Failed to serialize {} to YAML", what))
}

fn exporter_label(profile: &ProfileDefinition) -> String {
    match profile.exporter_port {
        Some(port) => format!("{} (:{})", profile.exporter, port),
        None => profile.exporter.clone(),
    }
}

fn human_result(name: Option<&str>, result: &ClassificationResult, kb: &KnowledgeBase) -> String {
    let mut lines = Vec::new();
    if let Some(name) = name {
        lines.push(name.to_string());
    }

    let profile_name = result.display_name.as_deref().unwrap_or(&result.profile_id);
    lines.push(format!("  Profile:   {} ({})", profile_name, result.profile_id));
    lines.push(format!("  Archetype: {}", result.archetype.as_str()));
    lines.push(format!("  Score:     {:.2}", result.score));
    lines.push(format!("  Tier:      {}", result.tier));
    if let Some(advisory) = result.tier.advisory() {
        lines.push(format!("  Advisory:  {}", advisory));
    }

    if !result.evidence.is_empty() {
        lines.push("  Evidence:".to_string());
        lines.extend(result.evidence.iter().map(|e| format!("    - {}", e)));
    }

    if let Some(profile) = kb.lookup(&result.profile_id) {
        lines.push(format!("  Exporter:  {}", exporter_label(profile)));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
