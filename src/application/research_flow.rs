//! ResearchFlow - the submission orchestrator.
//!
//! Drives one generation attempt at a time through the submission state
//! machine: validate, attach the session credential, call the gateway,
//! classify the outcome. The save operation runs beside it behind its own
//! guard flag and never touches submission state.
//!
//! The flow is owned by one view. All collaborators arrive as explicit
//! ports (no globals), and an optional [`CancellationToken`] ties in-flight
//! calls to the view's lifetime: when the view goes away mid-call, the
//! eventual response is discarded instead of mutating state that nothing
//! displays anymore.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::research::{
    validate, FailureKind, ResearchArtifact, ResearchRequest, SubmissionState, ValidationReport,
};
use crate::ports::{ResearchGateway, ResearchStore, SessionProvider};

/// Result of one `submit()` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A generation call is already in flight; nothing changed.
    AlreadyInFlight,
    /// Field validation failed; no network call was issued.
    Rejected(ValidationReport),
    /// The view's cancellation token fired; the response was discarded.
    Cancelled,
    /// Generation succeeded and the artifact replaced the previous one.
    Completed(ResearchArtifact),
    /// The attempt failed after validation; input is preserved.
    Failed(FailureKind),
}

/// Result of one `persist()` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// A save is already in flight; nothing changed.
    AlreadySaving,
    /// The artifact was stored.
    Saved,
    /// The view's cancellation token fired; the response was discarded.
    Cancelled,
    /// The save failed.
    Failed(FailureKind),
}

/// Orchestrates generation and save for one result view.
pub struct ResearchFlow {
    gateway: Arc<dyn ResearchGateway>,
    store: Arc<dyn ResearchStore>,
    session: Arc<dyn SessionProvider>,
    cancel: CancellationToken,
    state: Mutex<SubmissionState>,
    /// Last successful artifact; survives failed attempts untouched.
    artifact: Mutex<Option<ResearchArtifact>>,
    saving: AtomicBool,
}

impl ResearchFlow {
    /// Creates a flow with a fresh (never-fired) cancellation token.
    pub fn new(
        gateway: Arc<dyn ResearchGateway>,
        store: Arc<dyn ResearchStore>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            gateway,
            store,
            session,
            cancel: CancellationToken::new(),
            state: Mutex::new(SubmissionState::Idle),
            artifact: Mutex::new(None),
            saving: AtomicBool::new(false),
        }
    }

    /// Binds the flow to an externally owned cancellation token, typically
    /// one cancelled when the owning view unmounts.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The token that aborts in-flight calls; the owning view cancels it
    /// on teardown.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Submits one generation attempt.
    pub async fn submit(&self, request: &ResearchRequest) -> SubmitOutcome {
        {
            let mut state = self.lock_state();
            if state.is_submitting() {
                debug!("submit ignored: a generation call is already in flight");
                return SubmitOutcome::AlreadyInFlight;
            }
            self.transition(&mut state, SubmissionState::Validating);
        }

        let report = validate(request);
        if !report.is_empty() {
            debug!(fields = report.len(), "submission rejected by field validation");
            self.set_state(SubmissionState::Idle);
            return SubmitOutcome::Rejected(report);
        }

        let Some(token) = self.session.bearer_token() else {
            warn!("no session credential; treating submission as auth expiry");
            self.set_state(SubmissionState::Failed(FailureKind::AuthExpired));
            self.session.on_auth_expired();
            return SubmitOutcome::Failed(FailureKind::AuthExpired);
        };

        self.set_state(SubmissionState::Submitting);
        debug!(topic = %request.research_topic, "issuing generation call");

        let result = tokio::select! {
            _ = self.cancel.cancelled() => {
                debug!("generation call abandoned by view teardown; response discarded");
                self.set_state(SubmissionState::Idle);
                return SubmitOutcome::Cancelled;
            }
            result = self.gateway.generate(request, &token) => result,
        };

        match result {
            Ok(artifact) => {
                debug!(citations = artifact.citation_count(), "generation succeeded");
                *self.lock_artifact() = Some(artifact.clone());
                self.set_state(SubmissionState::Succeeded(artifact.clone()));
                SubmitOutcome::Completed(artifact)
            }
            Err(err) => {
                let kind = FailureKind::from(err);
                warn!(?kind, "generation failed");
                if kind.requires_reauthentication() {
                    self.session.on_auth_expired();
                }
                self.set_state(SubmissionState::Failed(kind.clone()));
                SubmitOutcome::Failed(kind)
            }
        }
    }

    /// Persists an artifact with the parameters that produced it.
    ///
    /// Independent of the generation state machine; guarded by its own
    /// flag so overlapping saves are rejected rather than queued.
    pub async fn persist(
        &self,
        artifact: &ResearchArtifact,
        request: &ResearchRequest,
    ) -> SaveOutcome {
        if self
            .saving
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("save ignored: a save call is already in flight");
            return SaveOutcome::AlreadySaving;
        }

        let outcome = self.persist_guarded(artifact, request).await;
        self.saving.store(false, Ordering::SeqCst);
        outcome
    }

    async fn persist_guarded(
        &self,
        artifact: &ResearchArtifact,
        request: &ResearchRequest,
    ) -> SaveOutcome {
        let Some(token) = self.session.bearer_token() else {
            warn!("no session credential; treating save as auth expiry");
            self.session.on_auth_expired();
            return SaveOutcome::Failed(FailureKind::AuthExpired);
        };

        debug!(title = %artifact.title, "saving research");

        let result = tokio::select! {
            _ = self.cancel.cancelled() => {
                debug!("save call abandoned by view teardown; response discarded");
                return SaveOutcome::Cancelled;
            }
            result = self.store.save(artifact, request, &token) => result,
        };

        match result {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                let kind = FailureKind::from(err);
                warn!(?kind, "save failed");
                if kind.requires_reauthentication() {
                    self.session.on_auth_expired();
                }
                SaveOutcome::Failed(kind)
            }
        }
    }

    /// Current submission state (cloned snapshot).
    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    /// Last successfully generated artifact, if any.
    pub fn artifact(&self) -> Option<ResearchArtifact> {
        self.lock_artifact().clone()
    }

    /// True while a generation call is in flight.
    pub fn is_submitting(&self) -> bool {
        self.lock_state().is_submitting()
    }

    /// True while a save call is in flight.
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    /// Returns the flow to its initial state, dropping the displayed
    /// artifact. Used when the form session resets.
    pub fn reset(&self) {
        *self.lock_state() = SubmissionState::Idle;
        *self.lock_artifact() = None;
    }

    fn set_state(&self, next: SubmissionState) {
        let mut state = self.lock_state();
        self.transition(&mut state, next);
    }

    fn transition(&self, state: &mut MutexGuard<'_, SubmissionState>, next: SubmissionState) {
        debug_assert!(
            state.phase().can_transition_to(next.phase()),
            "illegal submission transition {:?} -> {:?}",
            state.phase(),
            next.phase()
        );
        **state = next;
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_artifact(&self) -> MutexGuard<'_, Option<ResearchArtifact>> {
        self.artifact
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
