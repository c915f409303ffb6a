//! Submission lifecycle for one generation attempt.
//!
//! A form session drives exactly one generation attempt at a time through
//! the phases `Idle -> Validating -> Submitting -> Succeeded | Failed`.
//! Validation failures return to `Idle` (they are reported through the
//! field map, not as a failed submission). `Succeeded` and `Failed` re-enter
//! `Validating` when the user resubmits; a cancelled in-flight attempt drops
//! back to `Idle`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::artifact::ResearchArtifact;
use crate::domain::foundation::ValidationError;

/// Generic notice for transport-level failures; the request input is
/// preserved so the user can simply retry.
pub const GENERIC_RETRY_NOTICE: &str = "An unexpected error occurred. Please try again.";

/// Server messages with custom user-facing wording. Anything not listed
/// here is surfaced verbatim.
static KNOWN_SERVER_MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Research topic is required",
            "Please provide a research topic.",
        ),
        (
            "Model generation failed",
            "We couldn't generate the research. Please try again with different parameters.",
        ),
    ])
});

/// Why a submission (or save) attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The server rejected the credential; the session collaborator has
    /// been told to redirect to login and the attempt was discarded.
    AuthExpired,
    /// Transport or response-parsing failure; retryable with unchanged
    /// input.
    Network(String),
    /// Business-rule failure reported by the server with a readable
    /// message.
    Domain(String),
}

impl FailureKind {
    /// The notice shown to the user, if any.
    ///
    /// Auth expiry yields no notice: the redirect to login is the whole
    /// response, and it must never fall through to a generic error display.
    pub fn user_notice(&self) -> Option<String> {
        match self {
            FailureKind::AuthExpired => None,
            FailureKind::Network(_) => Some(GENERIC_RETRY_NOTICE.to_string()),
            FailureKind::Domain(message) => Some(
                KNOWN_SERVER_MESSAGES
                    .get(message.as_str())
                    .map(|remapped| (*remapped).to_string())
                    .unwrap_or_else(|| message.clone()),
            ),
        }
    }

    /// True when the user should be sent back to the login page.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, FailureKind::AuthExpired)
    }
}

/// The phase of the submission lifecycle, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// Returns true if moving from `self` to `target` is a legal step.
    pub fn can_transition_to(self, target: SubmissionPhase) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, target),
            (Idle, Validating)
                | (Validating, Idle)       // validation failure
                | (Validating, Submitting)
                | (Validating, Failed)     // no credential available
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Submitting, Idle)       // cancelled in flight
                | (Succeeded, Validating)  // re-generation
                | (Failed, Validating)
        )
    }

    /// All legal target phases from the current one.
    pub fn valid_transitions(self) -> Vec<SubmissionPhase> {
        use SubmissionPhase::*;
        match self {
            Idle => vec![Validating],
            Validating => vec![Idle, Submitting, Failed],
            Submitting => vec![Succeeded, Failed, Idle],
            Succeeded => vec![Validating],
            Failed => vec![Validating],
        }
    }

    /// Performs a validated transition.
    pub fn transition_to(self, target: SubmissionPhase) -> Result<SubmissionPhase, ValidationError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "submission",
                format!("cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}

/// Full submission state, carrying the success and failure payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded(ResearchArtifact),
    Failed(FailureKind),
}

impl SubmissionState {
    /// The payload-free phase of this state.
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionState::Idle => SubmissionPhase::Idle,
            SubmissionState::Validating => SubmissionPhase::Validating,
            SubmissionState::Submitting => SubmissionPhase::Submitting,
            SubmissionState::Succeeded(_) => SubmissionPhase::Succeeded,
            SubmissionState::Failed(_) => SubmissionPhase::Failed,
        }
    }

    /// True while a generation call is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// The artifact carried by a successful state.
    pub fn artifact(&self) -> Option<&ResearchArtifact> {
        match self {
            SubmissionState::Succeeded(artifact) => Some(artifact),
            _ => None,
        }
    }

    /// The failure carried by a failed state.
    pub fn failure(&self) -> Option<&FailureKind> {
        match self {
            SubmissionState::Failed(kind) => Some(kind),
            _ => None,
        }
    }
}
