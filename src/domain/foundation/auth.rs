//! Bearer credential types.
//!
//! The credential that authenticates every protected call to the Litscout
//! API. It is owned and refreshed by the external session collaborator; this
//! crate only reads it. The raw token lives in a [`secrecy::Secret`] so it
//! never leaks through `Debug` output or logs.

use secrecy::{ExposeSecret, Secret};

/// Opaque bearer credential for the Litscout API.
///
/// Attached as `Authorization: Bearer <token>` to every protected call.
/// The session collaborator hands one out per request; the core never
/// stores or refreshes it.
#[derive(Clone)]
pub struct BearerToken(Secret<String>);

impl BearerToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// Exposes the raw token for building the Authorization header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Renders the full `Authorization` header value.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.expose())
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}
