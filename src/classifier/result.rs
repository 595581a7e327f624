use crate::extractors::Evidence;
use crate::knowledge::{Archetype, UNKNOWN_PROFILE_ID};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HIGH_THRESHOLD: f64 = 0.60;
pub const MEDIUM_THRESHOLD: f64 = 0.15;

/// Confidence bucket derived from a score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Tier::High
        } else if score >= MEDIUM_THRESHOLD {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }

    /// Advisory shown to users for results that need a human look.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Tier::Low => Some("low confidence, verify manually"),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub profile_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub archetype: Archetype,
    pub score: f64,
    pub tier: Tier,
    /// Contributions to the winning profile, in extractor run order.
    pub evidence: Vec<Evidence>,
}

impl ClassificationResult {
    pub fn unknown() -> Self {
        Self {
            profile_id: UNKNOWN_PROFILE_ID.to_string(),
            display_name: None,
            archetype: Archetype::Unknown,
            score: 0.0,
            tier: Tier::Low,
            evidence: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.profile_id == UNKNOWN_PROFILE_ID
    }
}
