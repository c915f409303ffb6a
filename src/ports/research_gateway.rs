//! Research Gateway Port - the generation call.
//!
//! Abstracts the `POST /generate_report` endpoint so the submission flow
//! can be exercised against a mock in tests and the reqwest adapter in
//! production.
//!
//! # Contract
//!
//! Implementations must:
//! - Attach the bearer credential to the request
//! - Return the parsed artifact with citations in generation order
//! - Classify failures into the shared [`ApiError`] taxonomy
//! - Never mutate or retain the request

use async_trait::async_trait;

use super::ApiError;
use crate::domain::foundation::BearerToken;
use crate::domain::research::{ResearchArtifact, ResearchRequest};

/// Port for generating a literature review from a validated request.
#[async_trait]
pub trait ResearchGateway: Send + Sync {
    /// Issues one generation call.
    ///
    /// The request is expected to have passed field validation; the server
    /// still re-checks and reports violations as [`ApiError::Domain`].
    async fn generate(
        &self,
        request: &ResearchRequest,
        token: &BearerToken,
    ) -> Result<ResearchArtifact, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn ResearchGateway) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn ResearchGateway>>();
    }
}
