//! Lexical signal extraction from ingested artifacts

use crate::lexicon::{any_mentions, PrincipleSignal, ToneSignal, BASE_PRINCIPLES, BASE_TONE};
use doctrine_model::{Artifact, Trait};

/// Tone words: the base five, then one word per signal found in artifacts
#[must_use]
pub fn tone_keywords(artifacts: &[Artifact]) -> Vec<&'static str> {
    let mut keywords = BASE_TONE.to_vec();
    keywords.extend(
        ToneSignal::ALL
            .iter()
            .filter(|signal| any_mentions(artifacts, signal.keyword()))
            .map(ToneSignal::tone_word),
    );
    keywords
}

/// Principles: the base three, then one per signal found in artifacts
#[must_use]
pub fn principles(artifacts: &[Artifact]) -> Vec<&'static str> {
    let mut principles = BASE_PRINCIPLES.to_vec();
    principles.extend(
        PrincipleSignal::ALL
            .iter()
            .filter(|signal| any_mentions(artifacts, signal.keyword()))
            .map(PrincipleSignal::principle),
    );
    principles
}

/// First trait whose lower-cased name contains `keyword`
#[must_use]
pub fn find_trait<'a>(traits: &'a [Trait], keyword: &str) -> Option<&'a Trait> {
    traits
        .iter()
        .find(|t| t.name.to_lowercase().contains(keyword))
}

/// First `max_chars` characters of `text`, followed by an ellipsis
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut excerpt: String = text.chars().take(max_chars).collect();
    excerpt.push_str("...");
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_sets_without_artifacts() {
        assert_eq!(
            tone_keywords(&[]),
            vec!["strategic", "decisive", "transparent", "data-driven", "bold"]
        );
        assert_eq!(principles(&[]).len(), 3);
    }

    #[test]
    fn signals_append_in_fixed_order() {
        let artifacts = vec![
            Artifact::new("a", "RISK appetite is high"),
            Artifact::new("b", "Innovation first"),
        ];
        let tone = tone_keywords(&artifacts);
        assert_eq!(&tone[5..], &["innovative", "calculated"]);
        assert_eq!(principles(&artifacts).len(), 3);
    }

    #[test]
    fn market_signal_adds_principle() {
        let p = principles(&[Artifact::new("a", "the Marketplace moved")]);
        assert_eq!(p.last(), Some(&"Leverage market dynamics"));
    }

    #[test]
    fn find_trait_is_case_insensitive_and_first_wins() {
        let traits = vec![
            Trait::new("Strategic Heuristics", "x"),
            Trait::new("Risk Tolerance Model", "first"),
            Trait::new("Operational RISK", "second"),
        ];
        assert_eq!(find_trait(&traits, "risk").unwrap().description, "first");
        assert!(find_trait(&traits, "crisis").is_none());
    }

    #[test]
    fn excerpt_counts_characters() {
        assert_eq!(excerpt("short", 100), "short...");
        assert_eq!(excerpt("ééééé", 3), "ééé...");
        assert_eq!(excerpt(&"a".repeat(150), 100).len(), 103);
    }
}
