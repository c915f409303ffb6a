//! In-memory Research Store for testing.
//!
//! Keeps saved research in a `Vec` behind a mutex, assigns sequential ids,
//! and supports error injection plus a pause gate for overlap tests.
//! Behaves like the real store at the contract level: unknown ids are
//! domain failures, list order is insertion order.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Semaphore;

use crate::domain::foundation::BearerToken;
use crate::domain::research::{
    ResearchArtifact, ResearchId, ResearchRequest, SavedResearch,
};
use crate::ports::{ApiError, ResearchStore};

/// In-memory store with scripted save failures.
pub struct InMemoryResearchStore {
    entries: Mutex<Vec<SavedResearch>>,
    next_id: AtomicUsize,
    /// Errors injected into upcoming save calls, consumed in order.
    save_errors: Mutex<VecDeque<ApiError>>,
    /// When present, each save waits for one released permit.
    gate: Option<Arc<Semaphore>>,
}

impl Default for InMemoryResearchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryResearchStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            save_errors: Mutex::new(VecDeque::new()),
            gate: None,
        }
    }

    /// Queues an error for the next save call.
    pub fn with_save_error(self, error: ApiError) -> Self {
        self.save_errors
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push_back(error);
        self
    }

    /// Holds every save until [`InMemoryResearchStore::release`] grants it
    /// a permit.
    pub fn paused(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Lets exactly one held save proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Number of entries currently stored.
    pub fn saved_count(&self) -> usize {
        self.entries.lock().unwrap_or_else(|p| p.into_inner()).len()
    }
}

#[async_trait]
impl ResearchStore for InMemoryResearchStore {
    async fn save(
        &self,
        artifact: &ResearchArtifact,
        params: &ResearchRequest,
        _token: &BearerToken,
    ) -> Result<(), ApiError> {
        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|_| ApiError::network("mock gate closed"))?;
            permit.forget();
        }

        if let Some(error) = self
            .save_errors
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .pop_front()
        {
            return Err(error);
        }

        let id = ResearchId::new(format!(
            "research-{}",
            self.next_id.fetch_add(1, Ordering::SeqCst)
        ))
        .map_err(|e| ApiError::parse(e.to_string()))?;

        let entry = SavedResearch {
            id,
            title: artifact.title.clone(),
            research_topic: artifact.research_topic.clone(),
            summary: artifact.summary.clone(),
            citations: artifact.citations.clone(),
            search_params: serde_json::to_value(super::dto::GenerateReportBody::from(params))
                .unwrap_or(serde_json::Value::Null),
            created_at: Utc::now(),
        };

        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(entry);
        Ok(())
    }

    async fn list(&self, _token: &BearerToken) -> Result<Vec<SavedResearch>, ApiError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone())
    }

    async fn fetch(
        &self,
        id: &ResearchId,
        _token: &BearerToken,
    ) -> Result<SavedResearch, ApiError> {
        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .iter()
            .find(|entry| &entry.id == id)
            .cloned()
            .ok_or_else(|| ApiError::domain("Research not found"))
    }

    async fn delete(&self, id: &ResearchId, _token: &BearerToken) -> Result<(), ApiError> {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        let before = entries.len();
        entries.retain(|entry| &entry.id != id);
        if entries.len() == before {
            return Err(ApiError::domain("Research not found"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> BearerToken {
        BearerToken::new("t")
    }

    fn artifact() -> ResearchArtifact {
        ResearchArtifact::new("T", "X", "S", vec![])
    }

    fn request() -> ResearchRequest {
        ResearchRequest::new("X", 2026)
    }

    #[tokio::test]
    async fn save_then_list_round_trips() {
        let store = InMemoryResearchStore::new();
        store.save(&artifact(), &request(), &token()).await.unwrap();

        let entries = store.list(&token()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "T");
        assert_eq!(entries[0].search_params["research_topic"], "X");
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let store = InMemoryResearchStore::new();
        store.save(&artifact(), &request(), &token()).await.unwrap();
        store.save(&artifact(), &request(), &token()).await.unwrap();

        let entries = store.list(&token()).await.unwrap();
        assert_eq!(entries[0].id.as_str(), "research-1");
        assert_eq!(entries[1].id.as_str(), "research-2");
    }

    #[tokio::test]
    async fn fetch_unknown_id_is_domain_error() {
        let store = InMemoryResearchStore::new();
        let id = ResearchId::new("missing").unwrap();
        assert!(matches!(
            store.fetch(&id, &token()).await,
            Err(ApiError::Domain(_))
        ));
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = InMemoryResearchStore::new();
        store.save(&artifact(), &request(), &token()).await.unwrap();
        store.save(&artifact(), &request(), &token()).await.unwrap();

        let id = ResearchId::new("research-1").unwrap();
        store.delete(&id, &token()).await.unwrap();

        let entries = store.list(&token()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.as_str(), "research-2");
    }

    #[tokio::test]
    async fn injected_save_error_is_consumed_once() {
        let store =
            InMemoryResearchStore::new().with_save_error(ApiError::AuthExpired);

        assert!(matches!(
            store.save(&artifact(), &request(), &token()).await,
            Err(ApiError::AuthExpired)
        ));
        assert!(store.save(&artifact(), &request(), &token()).await.is_ok());
        assert_eq!(store.saved_count(), 1);
    }
}
