//! Founder doctrine manual renderer

use crate::date::long_date;
use crate::layout::{HEAVY_RULE, LIGHT_RULE};
use chrono::NaiveDate;
use doctrine_model::Trait;

const IMPLEMENTATION_NOTES: &str = r"IMPLEMENTATION NOTES

This doctrine manual should be:
• Referenced before major strategic decisions
• Updated quarterly to reflect evolved thinking
• Shared selectively with key leadership
• Used to train AI systems and decision support tools
• Protected as confidential strategic IP";

/// Render a doctrine manual for a blueprint
///
/// One numbered section per trait with a non-blank description, in input
/// order. Numbering counts emitted sections only, so blank traits never leave
/// gaps.
#[must_use]
pub fn render_doctrine_manual(title: &str, traits: &[Trait], date: NaiveDate) -> String {
    let date = long_date(date);
    let mut manual = format!(
        r"FOUNDER DOCTRINE MANUAL
{title}
Generated: {date}

{HEAVY_RULE}

EXECUTIVE SUMMARY

This Founder Doctrine Manual codifies the cognitive architecture, strategic 
heuristics, and decision-making frameworks that define {title}. 
It serves as the authoritative reference for maintaining consistency in 
high-stakes decisions, crisis response, and long-term strategic positioning.

{HEAVY_RULE}

"
    );

    for (index, doctrine) in traits.iter().filter(|t| t.has_description()).enumerate() {
        manual.push_str(&format!(
            "{}. {}\n\n{}\n\n{LIGHT_RULE}\n\n",
            index + 1,
            doctrine.name.to_uppercase(),
            doctrine.description
        ));
    }

    manual.push_str(&format!(
        "{HEAVY_RULE}\n\n{IMPLEMENTATION_NOTES}\n\n{HEAVY_RULE}\n\nEND OF DOCTRINE MANUAL"
    ));
    manual
}

/// Number of sections a manual for these traits will contain
#[must_use]
pub fn section_count(traits: &[Trait]) -> usize {
    traits.iter().filter(|t| t.has_description()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn header_and_footer() {
        let manual = render_doctrine_manual("Operator Zero", &[], date());
        assert!(manual.starts_with("FOUNDER DOCTRINE MANUAL\nOperator Zero\nGenerated: March 7, 2024\n\n"));
        assert!(manual.contains("frameworks that define Operator Zero. \n"));
        assert!(manual.ends_with(&format!("{HEAVY_RULE}\n\nEND OF DOCTRINE MANUAL")));
        assert_eq!(section_count(&[]), 0);
    }

    #[test]
    fn sections_are_upper_cased_and_numbered() {
        let traits = vec![
            Trait::new("Risk Tolerance Model", "Bets big, rarely."),
            Trait::new("Shadow Traits", "Needs to be right."),
        ];
        let manual = render_doctrine_manual("X", &traits, date());
        assert!(manual.contains(&format!(
            "1. RISK TOLERANCE MODEL\n\nBets big, rarely.\n\n{LIGHT_RULE}\n\n2. SHADOW TRAITS\n\nNeeds to be right.\n\n{LIGHT_RULE}\n\n{HEAVY_RULE}\n\nIMPLEMENTATION NOTES"
        )));
    }

    #[test]
    fn blank_descriptions_are_skipped_without_gaps() {
        let traits = vec![
            Trait::new("Strategic Heuristics", "  "),
            Trait::new("Crisis Response Patterns", "Calm, then loud."),
        ];
        let manual = render_doctrine_manual("X", &traits, date());
        assert!(!manual.contains("STRATEGIC HEURISTICS"));
        assert!(manual.contains("1. CRISIS RESPONSE PATTERNS"));
        assert_eq!(section_count(&traits), 1);
    }
}
