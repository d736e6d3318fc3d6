//! Generation engine
//!
//! Async facade over the simulator and renderers. Applies the configured
//! latency and document date, and builds stored records from generator
//! output.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::store::{
    blueprint_name, Blueprint, Playbook, RecordId, RecordKind, Scenario, Store, StoredArtifact,
    TwinDraft,
};
use chrono::{NaiveDate, Utc};
use doctrine_model::{
    retain_complete, Artifact, Assumption, Audience, DecisionType, DraftMode, SimulationResult,
    Trait,
};
use doctrine_render::{render_doctrine_manual, render_playbook, synthesize_draft};
use doctrine_simulator::run_simulation;

/// Deterministic generation engine
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    config: EngineConfig,
}

impl GenerationEngine {
    /// Create new engine
    #[inline]
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Date the next document will carry
    #[inline]
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.config.today()
    }

    async fn pause(&self) {
        if self.config.simulated_latency_ms > 0 {
            tokio::time::sleep(self.config.latency()).await;
        }
    }

    /// Score complete assumptions and derive outcome branches
    ///
    /// Incomplete assumptions are ignored.
    ///
    /// # Errors
    /// `EngineError::Simulation` when no complete assumption remains.
    pub async fn simulate(&self, assumptions: &[Assumption]) -> Result<SimulationResult, EngineError> {
        let complete = retain_complete(assumptions);
        self.pause().await;

        let result = run_simulation(&complete)?;
        tracing::info!(
            assumptions = complete.len(),
            probability = result.probability,
            "scenario simulated"
        );
        Ok(result)
    }

    /// Render a doctrine manual
    ///
    /// A blank title renders as "Untitled Blueprint".
    pub async fn doctrine_manual(&self, title: &str, traits: &[Trait]) -> Result<String, EngineError> {
        let title = blueprint_name(title);
        self.pause().await;

        let manual = render_doctrine_manual(&title, traits, self.today());
        tracing::info!(title = %title, bytes = manual.len(), "doctrine manual generated");
        Ok(manual)
    }

    /// Render a narrative playbook
    ///
    /// # Errors
    /// `EngineError::Render` when `title` is blank.
    pub async fn playbook(
        &self,
        title: &str,
        audience: &Audience,
        constraints: &str,
    ) -> Result<String, EngineError> {
        self.pause().await;

        let playbook = render_playbook(title, audience, constraints, self.today())?;
        tracing::info!(title, audience = %audience, "playbook generated");
        Ok(playbook)
    }

    /// Synthesize a twin draft
    ///
    /// # Errors
    /// `EngineError::Render` when `prompt` is blank.
    pub async fn twin_draft(
        &self,
        prompt: &str,
        mode: DraftMode,
        artifacts: &[Artifact],
        traits: &[Trait],
    ) -> Result<String, EngineError> {
        self.pause().await;

        let draft = synthesize_draft(prompt, mode, artifacts, traits, self.today())?;
        tracing::info!(
            mode = %mode,
            artifacts = artifacts.len(),
            traits = traits.len(),
            "twin draft generated"
        );
        Ok(draft)
    }

    /// Blueprint record with its manual attached
    pub async fn build_blueprint(&self, name: &str, traits: &[Trait]) -> Result<Blueprint, EngineError> {
        let manual = self.doctrine_manual(name, traits).await?;
        Ok(Blueprint::new(name, traits, Utc::now()).with_manual(manual))
    }

    /// Scenario record for a simulation run
    pub async fn build_scenario(
        &self,
        name: &str,
        decision_type: Option<DecisionType>,
        assumptions: &[Assumption],
    ) -> Result<Scenario, EngineError> {
        let result = self.simulate(assumptions).await?;
        Ok(Scenario::from_simulation(
            name,
            decision_type,
            assumptions,
            &result,
            Utc::now(),
        ))
    }

    /// Playbook record
    pub async fn build_playbook(
        &self,
        title: &str,
        audience: &Audience,
        constraints: &str,
    ) -> Result<Playbook, EngineError> {
        let content = self.playbook(title, audience, constraints).await?;
        Ok(Playbook {
            id: RecordId::generate(RecordKind::Playbook),
            title: title.to_string(),
            audience: audience.clone(),
            constraints: constraints.to_string(),
            content,
            timestamp: Utc::now(),
        })
    }

    /// Twin draft record
    pub async fn build_twin_draft(
        &self,
        prompt: &str,
        mode: DraftMode,
        artifacts: &[Artifact],
        traits: &[Trait],
    ) -> Result<TwinDraft, EngineError> {
        let response = self.twin_draft(prompt, mode, artifacts, traits).await?;
        Ok(TwinDraft {
            id: RecordId::generate(RecordKind::TwinDraft),
            prompt: prompt.to_string(),
            mode,
            response,
            timestamp: Utc::now(),
        })
    }

    /// Draft from every stored artifact and, optionally, a stored blueprint
    ///
    /// # Errors
    /// `EngineError::Store` when `blueprint` names a missing record.
    pub async fn twin_draft_from_store<S: Store>(
        &self,
        store: &S,
        prompt: &str,
        mode: DraftMode,
        blueprint: Option<&RecordId>,
    ) -> Result<TwinDraft, EngineError> {
        let artifacts: Vec<Artifact> = store
            .list::<StoredArtifact>()
            .await?
            .iter()
            .map(StoredArtifact::to_artifact)
            .collect();

        let traits = match blueprint {
            Some(id) => store.get::<Blueprint>(id).await?.traits,
            None => Vec::new(),
        };

        self.build_twin_draft(prompt, mode, &artifacts, &traits).await
    }
}
