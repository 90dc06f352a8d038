//! Gateway-internal error type and its mapping onto the workspace taxonomy.
//!
//! The HTTP client reports failures as [`OpenAiError`]; the `From`
//! implementation below is the single place where transport-level detail
//! (status codes, `reqwest` failure classes) is classified into
//! [`ForgeError`] variants, so callers never have to inspect raw transport
//! errors.

use promptforge_core::error::ForgeError;
use reqwest::StatusCode;

/// Every failure mode the HTTP client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn't serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("OpenAI format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for ForgeError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Http(err) => {
                if err.is_timeout() {
                    ForgeError::Timeout(err.to_string())
                } else if err.is_connect() {
                    ForgeError::NetworkUnavailable(err.to_string())
                } else {
                    ForgeError::Upstream(err.to_string())
                }
            }
            OpenAiError::Serde(err) => ForgeError::Serialization(err),
            OpenAiError::Api { status, body } => classify_status(status, body),
            OpenAiError::Format(msg) => ForgeError::Upstream(msg),
        }
    }
}

fn classify_status(status: StatusCode, body: String) -> ForgeError {
    match status.as_u16() {
        401 | 403 => ForgeError::AuthenticationFailed(format!("status {status}: {body}")),
        429 => ForgeError::RateLimited(format!("status {status}: {body}")),
        400 | 404 | 422 => ForgeError::InvalidRequest(format!("status {status}: {body}")),
        _ => ForgeError::Upstream(format!("status {status}: {body}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptforge_core::error::ErrorKind;

    fn kind_for(status: u16) -> ErrorKind {
        let err = OpenAiError::Api {
            status: StatusCode::from_u16(status).unwrap(),
            body: "details".into(),
        };
        ForgeError::from(err).kind()
    }

    #[test]
    fn classifies_auth_failures() {
        assert_eq!(kind_for(401), ErrorKind::AuthenticationFailed);
        assert_eq!(kind_for(403), ErrorKind::AuthenticationFailed);
    }

    #[test]
    fn classifies_rate_limiting() {
        assert_eq!(kind_for(429), ErrorKind::RateLimited);
    }

    #[test]
    fn classifies_rejected_requests() {
        assert_eq!(kind_for(400), ErrorKind::InvalidRequest);
        assert_eq!(kind_for(404), ErrorKind::InvalidRequest);
        assert_eq!(kind_for(422), ErrorKind::InvalidRequest);
    }

    #[test]
    fn other_statuses_are_upstream_errors() {
        assert_eq!(kind_for(500), ErrorKind::Upstream);
        assert_eq!(kind_for(503), ErrorKind::Upstream);
    }

    #[test]
    fn messages_keep_the_status_and_body() {
        let err = ForgeError::from(OpenAiError::Api {
            status: StatusCode::from_u16(429).unwrap(),
            body: "quota exhausted".into(),
        });
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("quota exhausted"));
    }
}
