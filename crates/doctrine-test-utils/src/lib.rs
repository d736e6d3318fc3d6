//! Testing utilities for the doctrine workspace
//!
//! Shared fixtures: a filled-in blueprint, sample artifacts and assumption sets.

#![allow(missing_docs)]

use chrono::NaiveDate;
use doctrine_model::{Artifact, Assumption, Trait, TraitCategory};

/// Date pinned in golden documents
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

pub fn assumption(name: &str, value: &str) -> Assumption {
    Assumption::new(name, value)
}

/// Assumption set landing in the high band (63)
pub fn bullish_assumptions() -> Vec<Assumption> {
    vec![assumption("Market Demand", "High")]
}

/// Assumption set landing in the low band (35)
pub fn bearish_assumptions() -> Vec<Assumption> {
    vec![
        assumption("Funding", "weak"),
        assumption("Team", "low experience"),
        assumption("Regulation", "unclear"),
        assumption("Timing", "low"),
    ]
}

/// Blueprint with every wizard category described
pub fn complete_blueprint() -> Vec<Trait> {
    TraitCategory::ALL
        .iter()
        .map(|category| {
            Trait::new(
                category.name(),
                format!("{} as practiced by the founder.", category.prompt()),
            )
        })
        .collect()
}

/// Blueprint where only some categories were filled in
pub fn partial_blueprint() -> Vec<Trait> {
    let mut traits = TraitCategory::blank_traits();
    traits[0].description = "First principles over analogy.".to_string();
    traits[1].description =
        "Will risk the company on a thesis once per decade, never on a quarter.".to_string();
    traits[3].description = "Goes quiet for 24 hours, then over-communicates.".to_string();
    traits
}

pub fn innovation_memo() -> Artifact {
    Artifact::new(
        "Founder interview",
        "Innovation is the only moat. We take risk when the market is mispricing it.",
    )
}

pub fn plain_memo() -> Artifact {
    Artifact::new("Ops memo", "Hiring plan for the next two quarters.")
}
