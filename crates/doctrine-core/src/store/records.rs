//! Stored record types
//!
//! Identity (id, timestamp) is assigned here, by the calling layer; the
//! generators never see it.

use chrono::{DateTime, Utc};
use doctrine_model::{
    retain_complete, Artifact, Assumption, Audience, Branch, DecisionType, DraftMode,
    SimulationResult, Trait,
};
use doctrine_simulator::outcome_summary;
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Name given to blueprints saved without one
pub const UNTITLED_BLUEPRINT: &str = "Untitled Blueprint";

/// Kind of stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Blueprint,
    Scenario,
    Playbook,
    Artifact,
    TwinDraft,
}

impl RecordKind {
    /// Id prefix, e.g. `twin-draft`
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Blueprint => "blueprint",
            Self::Scenario => "scenario",
            Self::Playbook => "playbook",
            Self::Artifact => "artifact",
            Self::TwinDraft => "twin-draft",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Opaque record identifier (`{kind}-{ulid}` when generated)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh, sortable id for a record kind
    #[must_use]
    pub fn generate(kind: RecordKind) -> Self {
        Self(format!("{}-{}", kind.prefix(), Ulid::new()))
    }

    /// Wrap a caller-chosen id
    #[inline]
    #[must_use]
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named set of trait descriptions plus its generated manual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub id: RecordId,
    pub name: String,
    pub traits: Vec<Trait>,
    pub doctrine_manual: Option<String>,
    pub last_modified: DateTime<Utc>,
}

impl Blueprint {
    /// New blueprint; blank names become [`UNTITLED_BLUEPRINT`] and only
    /// described traits are kept
    #[must_use]
    pub fn new(name: &str, traits: &[Trait], last_modified: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::generate(RecordKind::Blueprint),
            name: blueprint_name(name),
            traits: traits.iter().filter(|t| t.has_description()).cloned().collect(),
            doctrine_manual: None,
            last_modified,
        }
    }

    /// Attach the generated manual
    #[inline]
    #[must_use]
    pub fn with_manual(mut self, manual: String) -> Self {
        self.doctrine_manual = Some(manual);
        self
    }
}

/// Name a blueprint falls back to when the form left it blank
#[must_use]
pub fn blueprint_name(name: &str) -> String {
    if name.trim().is_empty() {
        UNTITLED_BLUEPRINT.to_string()
    } else {
        name.to_string()
    }
}

/// Simulated decision with its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: RecordId,
    pub name: String,
    pub decision_type: Option<DecisionType>,
    pub assumptions: Vec<Assumption>,
    pub probability: u8,
    pub outcome_summary: String,
    pub branches: Vec<Branch>,
    pub timestamp: DateTime<Utc>,
}

impl Scenario {
    /// Derive a stored scenario from a simulation run
    #[must_use]
    pub fn from_simulation(
        name: &str,
        decision_type: Option<DecisionType>,
        assumptions: &[Assumption],
        result: &SimulationResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::generate(RecordKind::Scenario),
            name: name.to_string(),
            decision_type,
            assumptions: retain_complete(assumptions),
            probability: result.probability,
            outcome_summary: outcome_summary(result.probability),
            branches: result.branches.clone(),
            timestamp,
        }
    }
}

/// Generated narrative playbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playbook {
    pub id: RecordId,
    pub title: String,
    pub audience: Audience,
    pub constraints: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Ingested source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredArtifact {
    pub id: RecordId,
    pub name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl StoredArtifact {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::generate(RecordKind::Artifact),
            name: name.into(),
            content: content.into(),
            timestamp,
        }
    }

    /// Signal-only view consumed by the draft synthesizer
    #[must_use]
    pub fn to_artifact(&self) -> Artifact {
        Artifact::new(self.name.clone(), self.content.clone())
    }
}

/// Saved twin draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwinDraft {
    pub id: RecordId,
    pub prompt: String,
    pub mode: DraftMode,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Any stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StoredRecord {
    Blueprint(Blueprint),
    Scenario(Scenario),
    Playbook(Playbook),
    Artifact(StoredArtifact),
    TwinDraft(TwinDraft),
}

/// A record type the store can hold
pub trait Record: Clone + Send + Sync + 'static {
    /// Kind tag of this record type
    const KIND: RecordKind;

    fn id(&self) -> &RecordId;

    /// Ordering key for listings
    fn timestamp(&self) -> DateTime<Utc>;

    fn into_stored(self) -> StoredRecord;

    fn from_stored(stored: &StoredRecord) -> Option<&Self>;
}

macro_rules! impl_record {
    ($ty:ty, $variant:ident, $time:ident) => {
        impl Record for $ty {
            const KIND: RecordKind = RecordKind::$variant;

            fn id(&self) -> &RecordId {
                &self.id
            }

            fn timestamp(&self) -> DateTime<Utc> {
                self.$time
            }

            fn into_stored(self) -> StoredRecord {
                StoredRecord::$variant(self)
            }

            fn from_stored(stored: &StoredRecord) -> Option<&Self> {
                match stored {
                    StoredRecord::$variant(record) => Some(record),
                    _ => None,
                }
            }
        }
    };
}

impl_record!(Blueprint, Blueprint, last_modified);
impl_record!(Scenario, Scenario, timestamp);
impl_record!(Playbook, Playbook, timestamp);
impl_record!(StoredArtifact, Artifact, timestamp);
impl_record!(TwinDraft, TwinDraft, timestamp);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_kind_prefix() {
        let id = RecordId::generate(RecordKind::TwinDraft);
        assert!(id.as_str().starts_with("twin-draft-"));
        assert_ne!(id, RecordId::generate(RecordKind::TwinDraft));
    }

    #[test]
    fn blueprint_filters_blank_traits_and_names() {
        let traits = vec![
            Trait::new("Strategic Heuristics", "Compounding."),
            Trait::new("Shadow Traits", "  "),
        ];
        let blueprint = Blueprint::new(" ", &traits, Utc::now());
        assert_eq!(blueprint.name, UNTITLED_BLUEPRINT);
        assert_eq!(blueprint.traits.len(), 1);
        assert!(blueprint.doctrine_manual.is_none());
    }

    #[test]
    fn scenario_from_simulation() {
        let result = SimulationResult {
            probability: 63,
            drivers: vec![],
            branches: vec![Branch::new("Accelerated Success Path", "go")],
        };
        let assumptions = vec![
            Assumption::new("Market Demand", "High"),
            Assumption::new("", ""),
        ];
        let scenario = Scenario::from_simulation(
            "Launch",
            Some(DecisionType::LaunchNewProduct),
            &assumptions,
            &result,
            Utc::now(),
        );
        assert_eq!(scenario.outcome_summary, "63% probability of success");
        assert_eq!(scenario.assumptions.len(), 1);
        assert_eq!(scenario.branches.len(), 1);
    }

    #[test]
    fn stored_record_round_trip_by_kind() {
        let artifact = StoredArtifact::new("memo", "text", Utc::now());
        let stored = artifact.clone().into_stored();
        assert_eq!(StoredArtifact::from_stored(&stored), Some(&artifact));
        assert!(TwinDraft::from_stored(&stored).is_none());
    }

    #[test]
    fn stored_record_json_is_tagged() {
        let artifact = StoredArtifact::new("memo", "text", Utc::now());
        let json = serde_json::to_value(artifact.into_stored()).unwrap();
        assert_eq!(json["kind"], "artifact");
        assert_eq!(json["name"], "memo");
    }
}
