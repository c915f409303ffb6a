//! Transient user notices with an explicit expiry.
//!
//! The duplicate-keyword message self-clears after a fixed delay. Instead of
//! a background timer owned by the data core, the notice carries its expiry
//! timestamp and the rendering layer drops it on its own tick once
//! [`TransientNotice::is_expired`] reports true.

use chrono::{DateTime, Duration, Utc};

/// Message shown when a keyword is added twice.
pub const DUPLICATE_KEYWORD_MESSAGE: &str = "This keyword already exists!";

/// How long a transient notice stays visible.
pub fn notice_ttl() -> Duration {
    Duration::seconds(3)
}

/// A short-lived message paired with the instant it stops being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientNotice {
    message: String,
    expires_at: DateTime<Utc>,
}

impl TransientNotice {
    /// Creates a notice expiring `ttl` after `now`.
    pub fn new(message: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: now + ttl,
        }
    }

    /// The duplicate-keyword notice with the standard expiry.
    pub fn duplicate_keyword(now: DateTime<Utc>) -> Self {
        Self::new(DUPLICATE_KEYWORD_MESSAGE, now, notice_ttl())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// True once the rendering layer should stop showing the notice.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
