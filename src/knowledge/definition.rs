//! Serde shapes of the knowledge base document.
//!
//! These are the uncompiled forms read from YAML. [`super::profile`] turns a
//! [`ProfileSpec`] into a validated [`super::ProfileDefinition`].

use super::Archetype;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_WEIGHT: f64 = 0.70;
pub const DEFAULT_PORT_WEIGHT: f64 = 0.25;
pub const DEFAULT_ENV_WEIGHT: f64 = 0.15;
pub const DEFAULT_LABEL_WEIGHT: f64 = 0.20;

const BUILTIN_EXPORTER: &str = "built-in";

fn default_image_weight() -> f64 {
    DEFAULT_IMAGE_WEIGHT
}

fn default_port_weight() -> f64 {
    DEFAULT_PORT_WEIGHT
}

fn default_env_weight() -> f64 {
    DEFAULT_ENV_WEIGHT
}

fn default_label_weight() -> f64 {
    DEFAULT_LABEL_WEIGHT
}

fn default_exporter() -> String {
    BUILTIN_EXPORTER.to_string()
}

fn default_panel_type() -> String {
    "timeseries".to_string()
}

fn default_severity() -> String {
    "warning".to_string()
}

fn default_for_duration() -> String {
    "5m".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeDocument {
    #[serde(default)]
    pub profiles: Vec<ProfileSpec>,
    #[serde(default)]
    pub exporters: Vec<ExporterSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSpec {
    pub id: String,
    pub display_name: String,
    pub archetype: Archetype,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_patterns: Vec<ImagePatternSpec>,
    #[serde(default)]
    pub ports: Vec<PortSignal>,
    #[serde(default)]
    pub env: Vec<EnvSignal>,
    #[serde(default)]
    pub labels: Vec<LabelSignal>,
    #[serde(default = "default_exporter")]
    pub exporter: String,
    #[serde(default)]
    pub exporter_port: Option<u16>,
    #[serde(default)]
    pub builtin_metrics: bool,
    #[serde(default)]
    pub monitoring: MonitoringMetadata,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImagePatternSpec {
    pub pattern: String,
    #[serde(default = "default_image_weight")]
    pub weight: f64,
}

/// A port the technology conventionally listens on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortSignal {
    pub port: u16,
    #[serde(default = "default_port_weight")]
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvMatch {
    #[default]
    Exact,
    Prefix,
}

/// An environment variable name (or name prefix) characteristic of a technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvSignal {
    pub name: String,
    #[serde(rename = "match", default)]
    pub match_kind: EnvMatch,
    #[serde(default = "default_env_weight")]
    pub weight: f64,
}

impl EnvSignal {
    /// Case-sensitive name comparison.
    pub fn matches(&self, var_name: &str) -> bool {
        match self.match_kind {
            EnvMatch::Exact => var_name == self.name,
            EnvMatch::Prefix => var_name.starts_with(&self.name),
        }
    }
}

/// A label key with an optional expected value.
///
/// A missing value or `"*"` accepts any value. Otherwise values compare
/// case-insensitively; keys always compare exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelSignal {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default = "default_label_weight")]
    pub weight: f64,
}

impl LabelSignal {
    pub fn is_wildcard(&self) -> bool {
        matches!(self.value.as_deref(), None | Some("*"))
    }

    pub fn matches(&self, key: &str, value: &str) -> bool {
        if key != self.key {
            return false;
        }
        match self.value.as_deref() {
            None | Some("*") => true,
            Some(expected) => expected.eq_ignore_ascii_case(value),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSpec {
    pub name: String,
    pub image_pattern: String,
}

/// Descriptive monitoring guidance attached to a profile.
///
/// Carried through to consumers as-is; classification never reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitoringMetadata {
    #[serde(default)]
    pub golden_metrics: Vec<MetricSignal>,
    #[serde(default)]
    pub alerts: Vec<AlertTemplate>,
    #[serde(default)]
    pub dashboard_tags: Vec<String>,
    #[serde(default)]
    pub health_requirements: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricSignal {
    pub name: String,
    pub query: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_panel_type")]
    pub panel_type: String,
    /// Comma-separated preconditions such as `exporter` or `replicas>1`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub requires: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertTemplate {
    pub name: String,
    pub expr: String,
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(rename = "for", default = "default_for_duration")]
    pub for_duration: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub requires: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_weights_default_when_omitted() {
        let port: PortSignal = serde_yaml::from_str("port: 5432").unwrap();
        assert_eq!(port.weight, DEFAULT_PORT_WEIGHT);

        let env: EnvSignal = serde_yaml::from_str("name: PGDATA").unwrap();
        assert_eq!(env.match_kind, EnvMatch::Exact);
        assert_eq!(env.weight, DEFAULT_ENV_WEIGHT);

        let label: LabelSignal = serde_yaml::from_str("key: app").unwrap();
        assert_eq!(label.value, None);
        assert_eq!(label.weight, DEFAULT_LABEL_WEIGHT);
    }

    #[test]
    fn test_env_prefix_matching_is_case_sensitive() {
        let signal: EnvSignal =
            serde_yaml::from_str("name: POSTGRES_\nmatch: prefix").unwrap();
        assert!(signal.matches("POSTGRES_DB"));
        assert!(signal.matches("POSTGRES_"));
        assert!(!signal.matches("postgres_db"));
        assert!(!signal.matches("MY_POSTGRES_DB"));
    }

    #[test]
    fn test_env_exact_matching() {
        let signal: EnvSignal = serde_yaml::from_str("name: PGDATA").unwrap();
        assert!(signal.matches("PGDATA"));
        assert!(!signal.matches("PGDATA_DIR"));
    }

    #[test]
    fn test_label_value_compares_case_insensitively() {
        let signal: LabelSignal =
            serde_yaml::from_str("key: app.kubernetes.io/name\nvalue: postgresql").unwrap();
        assert!(signal.matches("app.kubernetes.io/name", "PostgreSQL"));
        assert!(!signal.matches("App.Kubernetes.io/name", "postgresql"));
        assert!(!signal.matches("app.kubernetes.io/name", "mysql"));
    }

    #[test]
    fn test_label_wildcard_accepts_any_value() {
        let star: LabelSignal = serde_yaml::from_str("key: tier\nvalue: '*'").unwrap();
        let absent: LabelSignal = serde_yaml::from_str("key: tier").unwrap();
        assert!(star.is_wildcard());
        assert!(absent.is_wildcard());
        assert!(star.matches("tier", "anything"));
        assert!(absent.matches("tier", ""));
    }

    #[test]
    fn test_alert_for_field_is_renamed() {
        let alert: AlertTemplate =
            serde_yaml::from_str("name: A\nexpr: up == 0\nfor: 1m").unwrap();
        assert_eq!(alert.for_duration, "1m");
        assert_eq!(alert.severity, "warning");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<PortSignal, _> = serde_yaml::from_str("port: 80\nprotocol: tcp");
        assert!(result.is_err());
    }
}
