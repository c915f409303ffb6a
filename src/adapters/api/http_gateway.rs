//! HTTP Research Gateway - `POST /generate_report` over reqwest.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;

use super::dto::{GenerateReportBody, GenerateReportResponse};
use super::http::{classify_error, transport_error, ApiClientConfig};
use crate::domain::foundation::BearerToken;
use crate::domain::research::{ResearchArtifact, ResearchRequest};
use crate::ports::{ApiError, ResearchGateway};

/// Gateway implementation backed by the real Litscout service.
pub struct HttpResearchGateway {
    config: ApiClientConfig,
    client: Client,
}

impl HttpResearchGateway {
    /// Creates a gateway for the configured API endpoint.
    pub fn new(config: ApiClientConfig) -> Self {
        let client = config.build_client();
        Self { config, client }
    }

    fn generate_url(&self) -> String {
        self.config.url("/generate_report")
    }
}

#[async_trait]
impl ResearchGateway for HttpResearchGateway {
    async fn generate(
        &self,
        request: &ResearchRequest,
        token: &BearerToken,
    ) -> Result<ResearchArtifact, ApiError> {
        let body = GenerateReportBody::from(request);
        debug!(url = %self.generate_url(), "sending generation request");

        let response = self
            .client
            .post(self.generate_url())
            .header(AUTHORIZATION, token.header_value())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(classify_error(status.as_u16(), &text));
        }

        let parsed: GenerateReportResponse = serde_json::from_str(&text)
            .map_err(|e| ApiError::parse(format!("malformed generation response: {}", e)))?;

        Ok(parsed.research_summary.into_artifact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn generate_url_targets_the_report_endpoint() {
        let gateway = HttpResearchGateway::new(
            ApiClientConfig::new("https://api.example.org").with_timeout(Duration::from_secs(5)),
        );
        assert_eq!(
            gateway.generate_url(),
            "https://api.example.org/generate_report"
        );
    }
}
