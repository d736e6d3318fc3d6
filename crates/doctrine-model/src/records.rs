//! Value records produced and consumed by the generation engine
//!
//! Persistence identity (id, timestamp) is assigned by the calling layer;
//! none of these records carry it.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One cognitive dimension of a blueprint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trait {
    /// Category label, e.g. "Risk Tolerance Model"
    pub name: String,
    /// Free-text description supplied by the founder
    pub description: String,
}

impl Trait {
    /// Create new trait
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Whether the description carries any non-whitespace text
    #[inline]
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

impl FromStr for Trait {
    type Err = ModelError;

    /// Parse `NAME=DESCRIPTION`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, description) = split_pair(s)?;
        Ok(Self::new(name, description))
    }
}

/// A free-text factor/value pair driving scenario scoring
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assumption {
    /// Factor name, e.g. "Market Demand"
    pub name: String,
    /// Qualitative value, e.g. "High"
    pub value: String,
}

impl Assumption {
    /// Create new assumption
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Both name and value are non-blank
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.value.trim().is_empty()
    }
}

impl FromStr for Assumption {
    type Err = ModelError;

    /// Parse `NAME=VALUE`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = split_pair(s)?;
        Ok(Self::new(name, value))
    }
}

/// Drop assumption rows a form left half-filled
#[must_use]
pub fn retain_complete(assumptions: &[Assumption]) -> Vec<Assumption> {
    assumptions
        .iter()
        .filter(|a| a.is_complete())
        .cloned()
        .collect()
}

/// One candidate outcome path with human-readable justification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch {
    /// Branch title
    pub name: String,
    /// Justification and mitigation text
    pub rationale: String,
}

impl Branch {
    /// Create new branch
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rationale: rationale.into(),
        }
    }
}

/// Outcome of one scenario simulation
///
/// Transient: callers derive a stored scenario from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Success probability, always within `[15, 85]`
    pub probability: u8,
    /// Up to three ranked drivers
    pub drivers: Vec<String>,
    /// Up to three decision branches
    pub branches: Vec<Branch>,
}

/// Source text used only as a lexical signal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    /// Display name, e.g. "Q3 investor letter"
    pub name: String,
    /// Raw text content
    pub content: String,
}

impl Artifact {
    /// Create new artifact
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Case-insensitive substring check over the content
    #[must_use]
    pub fn mentions(&self, keyword: &str) -> bool {
        self.content
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

fn split_pair(s: &str) -> Result<(&str, &str), ModelError> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(ModelError::MalformedPair(s.to_string())),
    }
}
