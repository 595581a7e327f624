//! Container evidence handed to extractors

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Reads an explicit `null` as the field's empty value.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Declared metadata of a single container.
///
/// Produced by an upstream manifest scanner. Every field may be empty; an
/// empty field simply yields no evidence. Ordered collections keep
/// extraction order stable across runs. Absent and `null` fields both read
/// as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerEvidence {
    /// Full image reference, registry and tag included.
    #[serde(deserialize_with = "null_as_empty")]
    pub image: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub ports: BTreeSet<u16>,

    /// Only the names are matched; values are carried for reporting.
    #[serde(alias = "env", deserialize_with = "null_as_empty")]
    pub env_vars: BTreeMap<String, String>,

    #[serde(deserialize_with = "null_as_empty")]
    pub labels: BTreeMap<String, String>,
}

impl ContainerEvidence {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Default::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.ports.insert(port);
        self
    }

    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(name.into(), value.into());
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.image.trim().is_empty()
            && self.ports.is_empty()
            && self.env_vars.is_empty()
            && self.labels.is_empty()
    }
}

/// A container record in a batch file, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedContainer {
    pub name: String,
    #[serde(flatten)]
    pub evidence: ContainerEvidence,
}
