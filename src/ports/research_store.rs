//! Research Store Port - persistence bridge to the saved-research service.
//!
//! A thin pass-through: implementations attach the bearer credential and
//! map transport failures into the shared [`ApiError`] taxonomy, nothing
//! more. Artifacts are taken by shared reference and never mutated.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::foundation::BearerToken;
use crate::domain::research::{ResearchArtifact, ResearchId, ResearchRequest, SavedResearch};

/// Port for saving and browsing generated research.
#[async_trait]
pub trait ResearchStore: Send + Sync {
    /// Persists an artifact together with the parameters that produced it.
    async fn save(
        &self,
        artifact: &ResearchArtifact,
        params: &ResearchRequest,
        token: &BearerToken,
    ) -> Result<(), ApiError>;

    /// Lists the caller's saved researches.
    async fn list(&self, token: &BearerToken) -> Result<Vec<SavedResearch>, ApiError>;

    /// Fetches one saved research by id.
    ///
    /// A missing id is a generic failure ([`ApiError::Domain`] with the
    /// server's message), not a dedicated variant.
    async fn fetch(&self, id: &ResearchId, token: &BearerToken)
        -> Result<SavedResearch, ApiError>;

    /// Deletes one saved research by id.
    async fn delete(&self, id: &ResearchId, token: &BearerToken) -> Result<(), ApiError>;
}
