//! Demo data seeding
//!
//! Populates a store with a small, internally consistent sample workspace.
//! Every generated record goes through the engine, so seeded documents match
//! what the generators would produce for the same inputs.

use crate::engine::GenerationEngine;
use crate::error::EngineError;
use crate::store::{InMemoryStore, RecordId, Store, StoredArtifact};
use chrono::Utc;
use doctrine_model::{Assumption, Audience, DecisionType, DraftMode, Trait, TraitCategory};

const DEMO_FOUNDER: &str = "Demo Founder";

const DEMO_TRAITS: [&str; 8] = [
    "Reason from first principles; refuse consensus as evidence.",
    "Bet the company once a decade, never on a quarter.",
    "Ship weekly, decide in a day, revisit in a quarter.",
    "Go quiet for 24 hours, then over-communicate in writing.",
    "Hire for slope over intercept.",
    "Patience with the mission, impatience with the plan.",
    "Overweights speed when the team is tired.",
    "Monday memo to the company, monthly letter to investors.",
];

const DEMO_ARTIFACTS: [(&str, &str); 2] = [
    (
        "Founder interview transcript",
        "Innovation is the only defensible moat. We accept risk when the market \
         is mispricing it, and we say so publicly.",
    ),
    (
        "Q3 board letter",
        "The market for our core product grew faster than planned. We are \
         redirecting spend toward the enterprise segment.",
    ),
];

/// Ids of the seeded records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRecords {
    pub blueprint: RecordId,
    pub artifacts: Vec<RecordId>,
    pub scenario: RecordId,
    pub playbook: RecordId,
    pub twin_draft: RecordId,
}

/// Blueprint traits used by the demo workspace
#[must_use]
pub fn demo_traits() -> Vec<Trait> {
    TraitCategory::ALL
        .iter()
        .zip(DEMO_TRAITS)
        .map(|(category, description)| Trait::new(category.name(), description))
        .collect()
}

/// Insert one blueprint, two artifacts, one scenario, one playbook and one
/// twin draft
pub async fn seed_demo_data<S: Store>(
    engine: &GenerationEngine,
    store: &S,
) -> Result<SeededRecords, EngineError> {
    let traits = demo_traits();
    let blueprint = store
        .save(engine.build_blueprint(DEMO_FOUNDER, &traits).await?)
        .await?;

    let mut artifacts = Vec::with_capacity(DEMO_ARTIFACTS.len());
    for (name, content) in DEMO_ARTIFACTS {
        artifacts.push(store.save(StoredArtifact::new(name, content, Utc::now())).await?);
    }

    let assumptions = vec![
        Assumption::new("Market Demand", "High"),
        Assumption::new("Competition", "Moderate"),
        Assumption::new("Execution Risk", "Low"),
    ];
    let scenario = store
        .save(
            engine
                .build_scenario(
                    "Enterprise tier launch",
                    Some(DecisionType::LaunchNewProduct),
                    &assumptions,
                )
                .await?,
        )
        .await?;

    let playbook = store
        .save(
            engine
                .build_playbook(
                    "Category Creation",
                    &Audience::Investors,
                    "No forward revenue guidance.",
                )
                .await?,
        )
        .await?;

    let twin_draft = store
        .save(
            engine
                .twin_draft_from_store(
                    store,
                    "Should we open a European office this year?",
                    DraftMode::BoardMemo,
                    Some(&blueprint),
                )
                .await?,
        )
        .await?;

    tracing::info!(
        blueprint = %blueprint,
        scenario = %scenario,
        playbook = %playbook,
        twin_draft = %twin_draft,
        "demo data seeded"
    );

    Ok(SeededRecords {
        blueprint,
        artifacts,
        scenario,
        playbook,
        twin_draft,
    })
}

/// Fresh in-memory store, seeded when the engine config asks for demo data
pub async fn open_workspace(engine: &GenerationEngine) -> Result<InMemoryStore, EngineError> {
    let store = InMemoryStore::new();
    if engine.config().seed_demo_data {
        seed_demo_data(engine, &store).await?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn demo_traits_cover_every_category() {
        let traits = demo_traits();
        assert_eq!(traits.len(), TraitCategory::ALL.len());
        assert!(traits.iter().all(Trait::has_description));
    }

    #[tokio::test]
    async fn workspace_seeding_follows_config() {
        let empty = open_workspace(&GenerationEngine::default()).await.unwrap();
        assert!(empty.is_empty());

        let engine = GenerationEngine::new(EngineConfig::new().with_seed_demo_data(true));
        let seeded = open_workspace(&engine).await.unwrap();
        assert_eq!(seeded.len(), 6);
    }
}
