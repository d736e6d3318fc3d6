//! Record store
//!
//! Persistence collaborator for blueprints, scenarios, playbooks, artifacts
//! and twin drafts:
//! - One generic save/get/list/delete surface keyed by [`Record::KIND`]
//! - Listings are newest first, ties broken by id
//! - Lookups of unknown ids fail with [`StoreError::NotFound`]

mod memory;
mod records;

pub use memory::InMemoryStore;
pub use records::{
    blueprint_name, Blueprint, Playbook, Record, RecordId, RecordKind, Scenario, StoredArtifact,
    StoredRecord, TwinDraft, UNTITLED_BLUEPRINT,
};

use crate::error::StoreError;
use async_trait::async_trait;

/// Storage backend for engine records
///
/// Implementations must be safe to share across tasks.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert or replace a record, keyed by its id
    async fn save<R: Record>(&self, record: R) -> Result<RecordId, StoreError>;

    /// Fetch one record
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when no record of `R`'s kind has `id`.
    async fn get<R: Record>(&self, id: &RecordId) -> Result<R, StoreError>;

    /// All records of `R`'s kind, newest first
    async fn list<R: Record>(&self) -> Result<Vec<R>, StoreError>;

    /// Remove one record
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when no record of `R`'s kind has `id`.
    async fn delete<R: Record>(&self, id: &RecordId) -> Result<(), StoreError>;
}

/// Newest first, then by id
pub(crate) fn sort_newest_first<R: Record>(records: &mut [R]) {
    records.sort_by(|a, b| {
        b.timestamp()
            .cmp(&a.timestamp())
            .then_with(|| a.id().cmp(b.id()))
    });
}
