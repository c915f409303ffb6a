//! Mock Research Gateway for testing.
//!
//! Configurable implementation of the `ResearchGateway` port: scripted
//! results consumed in order, call counting for no-second-call assertions,
//! and an optional pause gate so tests can hold a call in flight while they
//! poke at the submission guard.
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockResearchGateway::new()
//!     .with_artifact(artifact)
//!     .with_error(ApiError::AuthExpired);
//!
//! let first = gateway.generate(&request, &token).await;   // Ok(artifact)
//! let second = gateway.generate(&request, &token).await;  // Err(AuthExpired)
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::domain::foundation::BearerToken;
use crate::domain::research::{ResearchArtifact, ResearchRequest};
use crate::ports::{ApiError, ResearchGateway};

/// Mock gateway with scripted results.
pub struct MockResearchGateway {
    /// Scripted results, consumed in order.
    results: Mutex<VecDeque<Result<ResearchArtifact, ApiError>>>,
    /// Number of generate calls received.
    calls: AtomicUsize,
    /// When present, each call waits for one released permit.
    gate: Option<Arc<Semaphore>>,
}

impl Default for MockResearchGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResearchGateway {
    /// Creates a mock with no scripted results; unscripted calls fail with
    /// a network error.
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Queues a successful generation result.
    pub fn with_artifact(self, artifact: ResearchArtifact) -> Self {
        self.results
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push_back(Ok(artifact));
        self
    }

    /// Queues a failed generation result.
    pub fn with_error(self, error: ApiError) -> Self {
        self.results
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push_back(Err(error));
        self
    }

    /// Holds every call until [`MockResearchGateway::release`] grants it a
    /// permit.
    pub fn paused(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Lets exactly one held call proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Number of generate calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResearchGateway for MockResearchGateway {
    async fn generate(
        &self,
        _request: &ResearchRequest,
        _token: &BearerToken,
    ) -> Result<ResearchArtifact, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|_| ApiError::network("mock gate closed"))?;
            permit.forget();
        }

        self.results
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::network("no scripted response")))
    }
}
