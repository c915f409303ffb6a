//! HTTP Research Store - the saved-research endpoints over reqwest.
//!
//! Pure pass-through per the persistence-bridge contract: attach the
//! credential, ship the payload, classify failures. No caching, no
//! transformation beyond DTO mapping.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;

use super::dto::{FetchResponse, ListResponse, SaveResearchBody};
use super::http::{classify_error, transport_error, ApiClientConfig};
use crate::domain::foundation::BearerToken;
use crate::domain::research::{ResearchArtifact, ResearchId, ResearchRequest, SavedResearch};
use crate::ports::{ApiError, ResearchStore};

/// Store implementation backed by the real Litscout service.
pub struct HttpResearchStore {
    config: ApiClientConfig,
    client: Client,
}

impl HttpResearchStore {
    /// Creates a store for the configured API endpoint.
    pub fn new(config: ApiClientConfig) -> Self {
        let client = config.build_client();
        Self { config, client }
    }

    /// Reads the body and classifies a non-2xx status.
    async fn check(&self, response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response body: {}", e)))?;
        if !status.is_success() {
            return Err(classify_error(status.as_u16(), &text));
        }
        Ok(text)
    }
}

#[async_trait]
impl ResearchStore for HttpResearchStore {
    async fn save(
        &self,
        artifact: &ResearchArtifact,
        params: &ResearchRequest,
        token: &BearerToken,
    ) -> Result<(), ApiError> {
        let url = self.config.url("/save_research");
        debug!(%url, title = %artifact.title, "saving research");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, token.header_value())
            .header(CONTENT_TYPE, "application/json")
            .json(&SaveResearchBody::new(artifact, params))
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;

        // Success responses carry no required body.
        self.check(response).await.map(|_| ())
    }

    async fn list(&self, token: &BearerToken) -> Result<Vec<SavedResearch>, ApiError> {
        let url = self.config.url("/saved_researches");
        debug!(%url, "listing saved researches");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, token.header_value())
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;

        let text = self.check(response).await?;
        let parsed: ListResponse = serde_json::from_str(&text)
            .map_err(|e| ApiError::parse(format!("malformed list response: {}", e)))?;

        parsed
            .researches
            .into_iter()
            .map(|dto| dto.into_domain())
            .collect()
    }

    async fn fetch(
        &self,
        id: &ResearchId,
        token: &BearerToken,
    ) -> Result<SavedResearch, ApiError> {
        let url = self.config.url(&format!("/research/{}", id));
        debug!(%url, "fetching saved research");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, token.header_value())
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;

        let text = self.check(response).await?;
        let parsed: FetchResponse = serde_json::from_str(&text)
            .map_err(|e| ApiError::parse(format!("malformed fetch response: {}", e)))?;

        parsed.research.into_domain()
    }

    async fn delete(&self, id: &ResearchId, token: &BearerToken) -> Result<(), ApiError> {
        let url = self.config.url(&format!("/research/{}", id));
        debug!(%url, "deleting saved research");

        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, token.header_value())
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;

        self.check(response).await.map(|_| ())
    }
}
