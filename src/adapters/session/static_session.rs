//! Static Session - a `SessionProvider` holding one replaceable token.
//!
//! The UI shell normally implements the session port itself (token storage
//! plus a login redirect). This adapter covers the embedded and test cases:
//! it holds a token, clears it on expiry, counts expiry signals, and runs
//! an optional redirect hook in place of real navigation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use tracing::warn;

use crate::domain::foundation::BearerToken;
use crate::ports::SessionProvider;

type RedirectHook = Box<dyn Fn() + Send + Sync>;

/// Session provider around a single stored token.
pub struct StaticSession {
    token: RwLock<Option<String>>,
    expiry_signals: AtomicUsize,
    on_expired: Option<RedirectHook>,
}

impl StaticSession {
    /// Creates a signed-in session holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
            expiry_signals: AtomicUsize::new(0),
            on_expired: None,
        }
    }

    /// Creates a signed-out session with no credential.
    pub fn signed_out() -> Self {
        Self {
            token: RwLock::new(None),
            expiry_signals: AtomicUsize::new(0),
            on_expired: None,
        }
    }

    /// Installs a hook that runs when auth expiry is signalled, standing in
    /// for the login redirect.
    pub fn with_redirect_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_expired = Some(Box::new(hook));
        self
    }

    /// Replaces the stored token (a fresh login).
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|p| p.into_inner()) = Some(token.into());
    }

    /// How many times auth expiry has been signalled.
    pub fn expiry_signals(&self) -> usize {
        self.expiry_signals.load(Ordering::SeqCst)
    }
}

impl SessionProvider for StaticSession {
    fn bearer_token(&self) -> Option<BearerToken> {
        self.token
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .as_deref()
            .map(BearerToken::new)
    }

    fn on_auth_expired(&self) {
        warn!("session expired; clearing credential and redirecting to login");
        self.expiry_signals.fetch_add(1, Ordering::SeqCst);
        *self.token.write().unwrap_or_else(|p| p.into_inner()) = None;
        if let Some(hook) = &self.on_expired {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    #[test]
    fn signed_in_session_hands_out_the_token() {
        let session = StaticSession::with_token("abc");
        assert_eq!(session.bearer_token().unwrap().expose(), "abc");
    }

    #[test]
    fn signed_out_session_has_no_token() {
        let session = StaticSession::signed_out();
        assert!(session.bearer_token().is_none());
    }

    #[test]
    fn expiry_clears_the_token_and_counts() {
        let session = StaticSession::with_token("abc");
        session.on_auth_expired();

        assert!(session.bearer_token().is_none());
        assert_eq!(session.expiry_signals(), 1);
    }

    #[test]
    fn expiry_runs_the_redirect_hook() {
        let redirected = Arc::new(AtomicBool::new(false));
        let session = StaticSession::with_token("abc").with_redirect_hook({
            let redirected = redirected.clone();
            move || redirected.store(true, Ordering::SeqCst)
        });

        session.on_auth_expired();
        assert!(redirected.load(Ordering::SeqCst));
    }

    #[test]
    fn set_token_signs_back_in() {
        let session = StaticSession::signed_out();
        session.set_token("fresh");
        assert_eq!(session.bearer_token().unwrap().expose(), "fresh");
    }
}
