//! Unified error type exposed by **`promptforge-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the caller.  Every failure a submission can hit
//! maps onto exactly one variant, so callers can decide per kind whether to
//! display, log or retry — the library itself never retries.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ForgeError>;

#[derive(Debug, Error)]
pub enum ForgeError {
    /// A selected modifier key does not exist in the catalog the composer was
    /// handed.  This is a caller/configuration bug and is raised before any
    /// instruction text is produced.
    #[error("unknown modifier key `{key}`")]
    UnknownModifierKey { key: String },

    /// Input rejected before any network activity: empty utterance, missing
    /// credential, out-of-range generation parameter.  Recoverable by asking
    /// the user to correct the input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The endpoint rejected the configured credential (HTTP 401/403).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The endpoint throttled the request (HTTP 429).  Whether to back off
    /// and re-submit is the caller's decision.
    #[error("rate limited by endpoint: {0}")]
    RateLimited(String),

    /// The request did not complete within the configured bound.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The endpoint could not be reached at all (DNS, connect, TLS).
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The endpoint understood the transport but rejected the request itself,
    /// e.g. an unsupported model identifier.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Non-specific failure reported by the endpoint (5xx, malformed reply,
    /// empty choice list).
    #[error("upstream endpoint error: {0}")]
    Upstream(String),

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the endpoint.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ForgeError {
    /// Coarse classification of this error, for display grouping and for
    /// callers that branch on kind without matching every variant.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForgeError::UnknownModifierKey { .. } => ErrorKind::UnknownModifierKey,
            ForgeError::Validation(_) => ErrorKind::Validation,
            ForgeError::AuthenticationFailed(_) => ErrorKind::AuthenticationFailed,
            ForgeError::RateLimited(_) => ErrorKind::RateLimited,
            ForgeError::Timeout(_) => ErrorKind::Timeout,
            ForgeError::NetworkUnavailable(_) => ErrorKind::NetworkUnavailable,
            ForgeError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            ForgeError::Upstream(_) | ForgeError::Serialization(_) => ErrorKind::Upstream,
        }
    }

    /// True when the failure was raised locally, before any request was sent.
    pub fn is_pre_network(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::UnknownModifierKey | ErrorKind::Validation
        )
    }
}

/// The failure classes a submission can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownModifierKey,
    Validation,
    AuthenticationFailed,
    RateLimited,
    Timeout,
    NetworkUnavailable,
    InvalidRequest,
    Upstream,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification() {
        let err = ForgeError::UnknownModifierKey { key: "Pirate".into() };
        assert_eq!(err.kind(), ErrorKind::UnknownModifierKey);
        assert!(err.is_pre_network());

        let err = ForgeError::RateLimited("slow down".into());
        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert!(!err.is_pre_network());
    }

    #[test]
    fn messages_name_the_failure() {
        let err = ForgeError::Validation("question must not be empty".into());
        assert_eq!(err.to_string(), "validation failed: question must not be empty");

        let err = ForgeError::UnknownModifierKey { key: "Haiku".into() };
        assert!(err.to_string().contains("`Haiku`"));
    }
}
