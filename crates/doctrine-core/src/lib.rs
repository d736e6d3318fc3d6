//! Doctrine Core - generation engine facade
//!
//! Wires the simulator and renderers to the collaborators around them:
//! - [`GenerationEngine`]: async facade applying configured date and latency
//! - [`store`]: record types and the [`Store`] persistence interface
//! - [`export`]: text and Markdown document export
//! - [`compare`]: side-by-side scenario comparison
//! - [`demo`]: sample workspace seeding
//!
//! # Example
//!
//! ```rust,ignore
//! use doctrine_core::prelude::*;
//!
//! # async fn example() -> Result<(), EngineError> {
//! let engine = GenerationEngine::new(EngineConfig::new());
//! let store = InMemoryStore::new();
//!
//! let scenario = engine
//!     .build_scenario("Launch", None, &[Assumption::new("Market Demand", "High")])
//!     .await?;
//! let id = store.save(scenario).await?;
//! let saved: Scenario = store.get(&id).await?;
//! assert_eq!(saved.probability, 63);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod compare;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod export;
pub mod store;

pub use compare::{compare_scenarios, ScenarioComparison, SharedAssumption};
pub use config::EngineConfig;
pub use demo::{open_workspace, seed_demo_data, SeededRecords};
pub use engine::GenerationEngine;
pub use error::{ConfigError, EngineError, ExportError, StoreError};
pub use export::{
    doctrine_filename, playbook_filename, twin_draft_filename, ExportFormat, Exporter,
};
pub use store::{
    Blueprint, InMemoryStore, Playbook, Record, RecordId, RecordKind, Scenario, Store,
    StoredArtifact, StoredRecord, TwinDraft,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Doctrine Core
    pub use crate::{
        Blueprint, EngineConfig, EngineError, ExportFormat, Exporter, GenerationEngine,
        InMemoryStore, Playbook, RecordId, Scenario, Store, StoredArtifact, TwinDraft,
    };
    pub use doctrine_model::{Artifact, Assumption, Audience, DecisionType, DraftMode, Trait};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
