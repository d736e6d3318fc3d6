//! Audience and tone lexicon
//!
//! Closed tables mapping categorical inputs to canned phrasing. Lookups are
//! `match` expressions so adding a variant forces a phrasing decision.

use doctrine_model::{Artifact, Audience};

/// Framing used for any audience outside the known six
pub const GENERIC_FRAMING: &str = "Tailor messaging to audience values and information needs.";

/// Audience-specific framing paragraph for the playbook
#[must_use]
pub fn audience_framing(audience: &Audience) -> &'static str {
    match audience {
        Audience::Investors => {
            "Emphasize strategic vision, market opportunity, and execution capability. Frame decisions through lens of long-term value creation."
        }
        Audience::Media => {
            "Lead with narrative hooks and contrarian insights. Make complex topics accessible without dumbing down."
        }
        Audience::IndustryPeers => {
            "Demonstrate technical depth and strategic sophistication. Engage as peer, not superior."
        }
        Audience::GeneralPublic => {
            "Focus on mission and impact. Translate technical complexity into human benefit."
        }
        Audience::Employees => {
            "Inspire with vision while maintaining transparency about challenges. Position as builder-in-chief."
        }
        Audience::Competitors => {
            "Project confidence and inevitability. Acknowledge their strengths while highlighting fundamental advantages."
        }
        Audience::Other(_) => GENERIC_FRAMING,
    }
}

/// Tone words every draft starts from
pub const BASE_TONE: [&str; 5] = ["strategic", "decisive", "transparent", "data-driven", "bold"];

/// Principles every draft starts from
pub const BASE_PRINCIPLES: [&str; 3] = [
    "Maintain strategic clarity",
    "Prioritize long-term value creation",
    "Communicate with transparency",
];

/// Artifact signals that extend the tone set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneSignal {
    Innovation,
    Risk,
}

impl ToneSignal {
    /// Signals in the order their tone words are appended
    pub const ALL: [ToneSignal; 2] = [Self::Innovation, Self::Risk];

    /// Keyword searched for in artifact content
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Innovation => "innovation",
            Self::Risk => "risk",
        }
    }

    /// Tone word appended when the keyword is present
    #[must_use]
    pub fn tone_word(&self) -> &'static str {
        match self {
            Self::Innovation => "innovative",
            Self::Risk => "calculated",
        }
    }
}

/// Artifact signals that extend the principle list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipleSignal {
    Market,
}

impl PrincipleSignal {
    /// Signals in the order their principles are appended
    pub const ALL: [PrincipleSignal; 1] = [Self::Market];

    /// Keyword searched for in artifact content
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Market => "market",
        }
    }

    /// Principle appended when the keyword is present
    #[must_use]
    pub fn principle(&self) -> &'static str {
        match self {
            Self::Market => "Leverage market dynamics",
        }
    }
}

/// Any artifact mentions the keyword, case-insensitively
#[must_use]
pub fn any_mentions(artifacts: &[Artifact], keyword: &str) -> bool {
    artifacts.iter().any(|artifact| artifact.mentions(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_audience_has_specific_framing() {
        for audience in Audience::KNOWN {
            assert_ne!(audience_framing(&audience), GENERIC_FRAMING);
        }
    }

    #[test]
    fn unknown_audience_falls_back() {
        assert_eq!(
            audience_framing(&Audience::parse("Regulators")),
            GENERIC_FRAMING
        );
        // lookup is case-sensitive
        assert_eq!(audience_framing(&Audience::parse("media")), GENERIC_FRAMING);
    }

    #[test]
    fn signals_map_to_phrases() {
        assert_eq!(ToneSignal::Innovation.tone_word(), "innovative");
        assert_eq!(ToneSignal::Risk.keyword(), "risk");
        assert_eq!(PrincipleSignal::Market.principle(), "Leverage market dynamics");
    }

    #[test]
    fn any_mentions_scans_all_artifacts() {
        let artifacts = vec![
            Artifact::new("a", "hiring"),
            Artifact::new("b", "Market share"),
        ];
        assert!(any_mentions(&artifacts, "market"));
        assert!(!any_mentions(&artifacts, "risk"));
        assert!(!any_mentions(&[], "market"));
    }
}
