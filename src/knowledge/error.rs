use thiserror::Error;

/// Errors raised while loading or validating a knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("Failed to parse knowledge base: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Knowledge base defines no profiles")]
    Empty,

    #[error("Duplicate profile id '{0}'")]
    DuplicateProfile(String),

    #[error("Profile id '{0}' is reserved")]
    ReservedId(String),

    #[error("Profile '{profile}' has invalid archetype '{archetype}'")]
    UnknownArchetype { profile: String, archetype: String },

    /// `owner` is a profile id or an exporter name.
    #[error("'{owner}' has invalid image pattern '{pattern}': {source}")]
    InvalidPattern {
        owner: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Profile '{profile}' has {signal} weight {weight} outside (0, 1]")]
    InvalidWeight {
        profile: String,
        signal: &'static str,
        weight: f64,
    },

    #[error("Profile '{profile}' declares port 0")]
    InvalidPort { profile: String },

    #[error("Profile '{profile}' has an empty {field}")]
    EmptyField {
        profile: String,
        field: &'static str,
    },

    #[error("Duplicate exporter '{0}'")]
    DuplicateExporter(String),
}
