//! Session Port - the external credential collaborator.
//!
//! The session (login state, token storage, refresh) lives outside this
//! crate. The core reads the current credential through this port and
//! reports expiry back through it; it never touches credential storage
//! directly.
//!
//! # Contract
//!
//! Implementations must:
//! - Return the current bearer credential, or `None` when signed out
//! - Treat `on_auth_expired` as the signal to drop local session state and
//!   send the user to the login surface
//! - Expect `on_auth_expired` to fire at most once per failed attempt

/// Port for the session collaborator that owns the bearer credential.
pub trait SessionProvider: Send + Sync {
    /// The credential for the next protected call, if a session is active.
    fn bearer_token(&self) -> Option<crate::domain::foundation::BearerToken>;

    /// Called when the server rejected the credential (HTTP 401) or no
    /// credential was available. The collaborator redirects to login; the
    /// in-flight attempt has already been discarded.
    fn on_auth_expired(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn SessionProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn SessionProvider>>();
    }
}
