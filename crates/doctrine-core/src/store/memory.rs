//! In-memory record store backed by a concurrent map

use super::{sort_newest_first, Record, RecordId, RecordKind, Store, StoredRecord};
use crate::error::StoreError;
use async_trait::async_trait;
use dashmap::DashMap;

/// Process-local store; contents are lost on drop
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: DashMap<(RecordKind, RecordId), StoredRecord>,
}

impl InMemoryStore {
    /// Create new empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across all kinds
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records of one kind
    #[must_use]
    pub fn count(&self, kind: RecordKind) -> usize {
        self.records.iter().filter(|e| e.key().0 == kind).count()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn save<R: Record>(&self, record: R) -> Result<RecordId, StoreError> {
        let id = record.id().clone();
        let replaced = self
            .records
            .insert((R::KIND, id.clone()), record.into_stored())
            .is_some();
        tracing::debug!(kind = %R::KIND, id = %id, replaced, "record saved");
        Ok(id)
    }

    async fn get<R: Record>(&self, id: &RecordId) -> Result<R, StoreError> {
        self.records
            .get(&(R::KIND, id.clone()))
            .and_then(|entry| R::from_stored(entry.value()).cloned())
            .ok_or_else(|| StoreError::not_found(R::KIND, id.as_str()))
    }

    async fn list<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        let mut records: Vec<R> = self
            .records
            .iter()
            .filter(|entry| entry.key().0 == R::KIND)
            .filter_map(|entry| R::from_stored(entry.value()).cloned())
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn delete<R: Record>(&self, id: &RecordId) -> Result<(), StoreError> {
        match self.records.remove(&(R::KIND, id.clone())) {
            Some(_) => {
                tracing::debug!(kind = %R::KIND, id = %id, "record deleted");
                Ok(())
            }
            None => Err(StoreError::not_found(R::KIND, id.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{StoredArtifact, TwinDraft};
    use chrono::{Duration, TimeZone, Utc};
    use doctrine_model::DraftMode;

    fn at(minutes: i64) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[tokio::test]
    async fn save_then_get() {
        let store = InMemoryStore::new();
        let artifact = StoredArtifact::new("memo", "body", at(0));
        let id = store.save(artifact.clone()).await.unwrap();
        let fetched: StoredArtifact = store.get(&id).await.unwrap();
        assert_eq!(fetched, artifact);
        assert_eq!(store.count(RecordKind::Artifact), 1);
    }

    #[tokio::test]
    async fn kinds_are_isolated() {
        let store = InMemoryStore::new();
        let artifact = StoredArtifact::new("memo", "body", at(0));
        let id = store.save(artifact).await.unwrap();

        let err = store.get::<TwinDraft>(&id).await.unwrap_err();
        assert_eq!(err, StoreError::not_found(RecordKind::TwinDraft, id.as_str()));
        assert!(store.list::<TwinDraft>().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = InMemoryStore::new();
        for (name, minute) in [("old", 0), ("new", 10), ("mid", 5)] {
            store.save(StoredArtifact::new(name, "", at(minute))).await.unwrap();
        }
        let names: Vec<String> = store
            .list::<StoredArtifact>()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn equal_timestamps_break_ties_by_id() {
        let store = InMemoryStore::new();
        let mut first = StoredArtifact::new("b", "", at(0));
        first.id = RecordId::from_raw("artifact-b");
        let mut second = StoredArtifact::new("a", "", at(0));
        second.id = RecordId::from_raw("artifact-a");
        store.save(first).await.unwrap();
        store.save(second).await.unwrap();

        let ids: Vec<RecordId> = store
            .list::<StoredArtifact>()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(
            ids,
            vec![RecordId::from_raw("artifact-a"), RecordId::from_raw("artifact-b")]
        );
    }

    #[tokio::test]
    async fn save_replaces_same_id() {
        let store = InMemoryStore::new();
        let mut draft = TwinDraft {
            id: RecordId::generate(RecordKind::TwinDraft),
            prompt: "p".into(),
            mode: DraftMode::BoardMemo,
            response: "v1".into(),
            timestamp: at(0),
        };
        store.save(draft.clone()).await.unwrap();
        draft.response = "v2".into();
        store.save(draft.clone()).await.unwrap();

        assert_eq!(store.len(), 1);
        let fetched: TwinDraft = store.get(&draft.id).await.unwrap();
        assert_eq!(fetched.response, "v2");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = InMemoryStore::new();
        let id = RecordId::from_raw("artifact-missing");
        assert!(matches!(
            store.delete::<StoredArtifact>(&id).await,
            Err(StoreError::NotFound { kind: RecordKind::Artifact, .. })
        ));

        store.save({
            let mut a = StoredArtifact::new("x", "", at(0));
            a.id = id.clone();
            a
        })
        .await
        .unwrap();
        store.delete::<StoredArtifact>(&id).await.unwrap();
        assert!(store.is_empty());
    }
}
