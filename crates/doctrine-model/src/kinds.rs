//! Closed vocabularies used by forms and generators

use crate::error::ModelError;
use crate::records::Trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drafting mode for the twin draft synthesizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DraftMode {
    /// Board memorandum
    #[default]
    BoardMemo,
    /// Investment evaluation
    InvestmentEval,
    /// PR fallout simulation
    PrFallout,
}

impl DraftMode {
    /// All modes in menu order
    pub const ALL: [DraftMode; 3] = [Self::BoardMemo, Self::InvestmentEval, Self::PrFallout];

    /// Wire name (`board-memo`, ...)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoardMemo => "board-memo",
            Self::InvestmentEval => "investment-eval",
            Self::PrFallout => "pr-fallout",
        }
    }

    /// Human label shown in menus
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::BoardMemo => "Board Memo",
            Self::InvestmentEval => "Investment Evaluation",
            Self::PrFallout => "PR Fallout Simulation",
        }
    }
}

impl fmt::Display for DraftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ModelError::UnknownDraftMode(s.to_string()))
    }
}

/// Target audience of a narrative playbook
///
/// Six labels are known to the framing lexicon; any other label is kept
/// verbatim in [`Audience::Other`] and receives the generic framing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Audience {
    Investors,
    Media,
    IndustryPeers,
    GeneralPublic,
    Employees,
    Competitors,
    /// Unrecognized audience label
    Other(String),
}

impl Audience {
    /// The six known audiences in menu order
    pub const KNOWN: [Audience; 6] = [
        Self::Investors,
        Self::Media,
        Self::IndustryPeers,
        Self::GeneralPublic,
        Self::Employees,
        Self::Competitors,
    ];

    /// Exact, case-sensitive match against the known labels
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "Investors" => Self::Investors,
            "Media" => Self::Media,
            "Industry Peers" => Self::IndustryPeers,
            "General Public" => Self::GeneralPublic,
            "Employees" => Self::Employees,
            "Competitors" => Self::Competitors,
            other => Self::Other(other.to_string()),
        }
    }

    /// Label as the caller supplied it
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Investors => "Investors",
            Self::Media => "Media",
            Self::IndustryPeers => "Industry Peers",
            Self::GeneralPublic => "General Public",
            Self::Employees => "Employees",
            Self::Competitors => "Competitors",
            Self::Other(label) => label,
        }
    }

    /// Whether the label is one of the six known audiences
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Audience {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Audience> for String {
    fn from(audience: Audience) -> Self {
        audience.as_str().to_string()
    }
}

/// Fixed blueprint categories walked by the blueprint wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitCategory {
    StrategicHeuristics,
    RiskToleranceModel,
    MoralDecisionThresholds,
    CrisisResponsePatterns,
    ShadowTraits,
    LongTermWorldview,
    CompetitiveInstinctStructure,
    CommunicationCadence,
}

impl TraitCategory {
    /// Categories in wizard order
    pub const ALL: [TraitCategory; 8] = [
        Self::StrategicHeuristics,
        Self::RiskToleranceModel,
        Self::MoralDecisionThresholds,
        Self::CrisisResponsePatterns,
        Self::ShadowTraits,
        Self::LongTermWorldview,
        Self::CompetitiveInstinctStructure,
        Self::CommunicationCadence,
    ];

    /// Category label, used as the trait name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::StrategicHeuristics => "Strategic Heuristics",
            Self::RiskToleranceModel => "Risk Tolerance Model",
            Self::MoralDecisionThresholds => "Moral Decision Thresholds",
            Self::CrisisResponsePatterns => "Crisis Response Patterns",
            Self::ShadowTraits => "Shadow Traits",
            Self::LongTermWorldview => "Long-term Worldview",
            Self::CompetitiveInstinctStructure => "Competitive Instinct Structure",
            Self::CommunicationCadence => "Communication Cadence",
        }
    }

    /// Prompt shown to the founder for this category
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::StrategicHeuristics => "Core decision-making principles and strategic frameworks",
            Self::RiskToleranceModel => "Appetite for uncertainty and loss thresholds",
            Self::MoralDecisionThresholds => "Ethical boundaries and value-based constraints",
            Self::CrisisResponsePatterns => "Behavioral patterns under extreme pressure",
            Self::ShadowTraits => "Unconscious drivers and hidden motivations",
            Self::LongTermWorldview => "Vision for the future and legacy aspirations",
            Self::CompetitiveInstinctStructure => "Approach to competition and market positioning",
            Self::CommunicationCadence => "Preferred communication style and frequency",
        }
    }

    /// One trait per category with an empty description
    #[must_use]
    pub fn blank_traits() -> Vec<Trait> {
        Self::ALL
            .iter()
            .map(|category| Trait::new(category.name(), ""))
            .collect()
    }
}

/// Decision context a scenario is simulated for
///
/// Metadata only: scoring never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionType {
    LaunchNewProduct,
    AcquireCompetitor,
    FireExecutive,
    EnterNewPoliticalSpace,
}

impl DecisionType {
    /// Decision types in menu order
    pub const ALL: [DecisionType; 4] = [
        Self::LaunchNewProduct,
        Self::AcquireCompetitor,
        Self::FireExecutive,
        Self::EnterNewPoliticalSpace,
    ];

    /// Menu label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::LaunchNewProduct => "Launch New Product",
            Self::AcquireCompetitor => "Acquire Competitor",
            Self::FireExecutive => "Fire Executive",
            Self::EnterNewPoliticalSpace => "Enter New Political Space",
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DecisionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownDecisionType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_mode_round_trips_wire_names() {
        for mode in DraftMode::ALL {
            assert_eq!(mode.as_str().parse::<DraftMode>().unwrap(), mode);
        }
        assert_eq!(
            "memo".parse::<DraftMode>(),
            Err(ModelError::UnknownDraftMode("memo".to_string()))
        );
    }

    #[test]
    fn draft_mode_serializes_kebab_case() {
        let json = serde_json::to_string(&DraftMode::InvestmentEval).unwrap();
        assert_eq!(json, "\"investment-eval\"");
    }

    #[test]
    fn audience_parse_is_exact() {
        assert_eq!(Audience::parse("Industry Peers"), Audience::IndustryPeers);
        assert_eq!(
            Audience::parse("investors"),
            Audience::Other("investors".to_string())
        );
        assert!(!Audience::parse("Regulators").is_known());
    }

    #[test]
    fn audience_keeps_caller_label() {
        let audience = Audience::parse("Regulators");
        assert_eq!(audience.as_str(), "Regulators");
        assert_eq!(Audience::GeneralPublic.to_string(), "General Public");
    }

    #[test]
    fn audience_serde_uses_label() {
        let json = serde_json::to_string(&Audience::IndustryPeers).unwrap();
        assert_eq!(json, "\"Industry Peers\"");
        let back: Audience = serde_json::from_str("\"Media\"").unwrap();
        assert_eq!(back, Audience::Media);
    }

    #[test]
    fn blank_traits_follow_wizard_order() {
        let traits = TraitCategory::blank_traits();
        assert_eq!(traits.len(), 8);
        assert_eq!(traits[1].name, "Risk Tolerance Model");
        assert_eq!(traits[3].name, "Crisis Response Patterns");
        assert!(traits.iter().all(|t| !t.has_description()));
    }

    #[test]
    fn decision_type_parse() {
        assert_eq!(
            "acquire competitor".parse::<DecisionType>().unwrap(),
            DecisionType::AcquireCompetitor
        );
        assert!("Raise Prices".parse::<DecisionType>().is_err());
    }
}
