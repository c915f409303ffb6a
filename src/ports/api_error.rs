//! Shared failure taxonomy for the Litscout API ports.
//!
//! Both the generation gateway and the persistence store classify failures
//! into this one enum so every call site handles errors the same way: 401
//! means the session is gone, a structured `{error}` payload is a business
//! rule the user can read, and everything else is a transport problem worth
//! retrying.

use thiserror::Error;

use crate::domain::research::FailureKind;

/// Errors produced by calls to the Litscout API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// HTTP 401: the bearer credential was rejected.
    #[error("authentication expired")]
    AuthExpired,

    /// Transport-level failure (connect, reset, DNS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response carrying a structured `{error: string}` payload.
    #[error("{0}")]
    Domain(String),

    /// The response body could not be parsed into the expected shape.
    #[error("failed to parse server response: {0}")]
    Parse(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl ApiError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a domain error from a server-reported message.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// True when the user must re-authenticate before retrying.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }

    /// True when retrying with unchanged input could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Parse(_) | ApiError::Timeout { .. }
        )
    }
}

impl From<ApiError> for FailureKind {
    /// Collapses the wire-level taxonomy into the UI-observable one: parse
    /// and timeout failures surface as the generic network notice, domain
    /// and auth failures keep their identity.
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthExpired => FailureKind::AuthExpired,
            ApiError::Domain(message) => FailureKind::Domain(message),
            ApiError::Network(message) => FailureKind::Network(message),
            ApiError::Parse(message) => FailureKind::Network(message),
            ApiError::Timeout { timeout_secs } => {
                FailureKind::Network(format!("request timed out after {}s", timeout_secs))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_expired_requires_reauthentication() {
        assert!(ApiError::AuthExpired.requires_reauthentication());
        assert!(!ApiError::network("reset").requires_reauthentication());
        assert!(!ApiError::domain("bad topic").requires_reauthentication());
    }

    #[test]
    fn transport_failures_are_retryable() {
        assert!(ApiError::network("reset").is_retryable());
        assert!(ApiError::parse("truncated").is_retryable());
        assert!(ApiError::Timeout { timeout_secs: 30 }.is_retryable());

        assert!(!ApiError::AuthExpired.is_retryable());
        assert!(!ApiError::domain("bad topic").is_retryable());
    }

    #[test]
    fn domain_error_displays_server_message_verbatim() {
        let err = ApiError::domain("Model generation failed");
        assert_eq!(err.to_string(), "Model generation failed");
    }

    #[test]
    fn failure_kind_collapse_keeps_identity() {
        assert_eq!(
            FailureKind::from(ApiError::AuthExpired),
            FailureKind::AuthExpired
        );
        assert_eq!(
            FailureKind::from(ApiError::domain("msg")),
            FailureKind::Domain("msg".to_string())
        );
        assert!(matches!(
            FailureKind::from(ApiError::parse("bad json")),
            FailureKind::Network(_)
        ));
        assert!(matches!(
            FailureKind::from(ApiError::Timeout { timeout_secs: 5 }),
            FailureKind::Network(_)
        ));
    }
}
