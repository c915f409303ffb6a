//! ResearchLibrary - browsing previously saved research.
//!
//! Drives the history and detail views: list, fetch one, delete. Fetches
//! from different navigations are independent and unordered, so unlike the
//! submission flow there is no in-flight guard here; each call stands
//! alone. The 401 rule is the same everywhere: redirect through the session
//! collaborator and report auth expiry.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::research::{FailureKind, ResearchId, SavedResearch};
use crate::ports::{ApiError, ResearchStore, SessionProvider};

/// Read/delete driver over the saved-research store.
pub struct ResearchLibrary {
    store: Arc<dyn ResearchStore>,
    session: Arc<dyn SessionProvider>,
}

impl ResearchLibrary {
    pub fn new(store: Arc<dyn ResearchStore>, session: Arc<dyn SessionProvider>) -> Self {
        Self { store, session }
    }

    /// Lists the caller's saved researches.
    pub async fn list(&self) -> Result<Vec<SavedResearch>, FailureKind> {
        let token = self.credential()?;
        debug!("fetching saved researches");
        self.store
            .list(&token)
            .await
            .map_err(|err| self.classify(err))
    }

    /// Fetches one saved research for the detail view.
    ///
    /// A missing id surfaces as the server's generic failure message.
    pub async fn fetch(&self, id: &ResearchId) -> Result<SavedResearch, FailureKind> {
        let token = self.credential()?;
        debug!(%id, "fetching saved research");
        self.store
            .fetch(id, &token)
            .await
            .map_err(|err| self.classify(err))
    }

    /// Deletes one saved research.
    pub async fn delete(&self, id: &ResearchId) -> Result<(), FailureKind> {
        let token = self.credential()?;
        debug!(%id, "deleting saved research");
        self.store
            .delete(id, &token)
            .await
            .map_err(|err| self.classify(err))
    }

    fn credential(&self) -> Result<crate::domain::foundation::BearerToken, FailureKind> {
        self.session.bearer_token().ok_or_else(|| {
            warn!("no session credential; treating library access as auth expiry");
            self.session.on_auth_expired();
            FailureKind::AuthExpired
        })
    }

    fn classify(&self, err: ApiError) -> FailureKind {
        let kind = FailureKind::from(err);
        warn!(?kind, "library call failed");
        if kind.requires_reauthentication() {
            self.session.on_auth_expired();
        }
        kind
    }
}
