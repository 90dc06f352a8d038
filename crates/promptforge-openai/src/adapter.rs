use std::{env, sync::Arc, time::Duration};

use promptforge_core::error::{ForgeError, Result};

use crate::client::{DEFAULT_TIMEOUT, OpenAiClient};

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value
/// implementing the provider traits from `promptforge-core`.
///
/// The adapter:
///
/// * stores the credential and endpoint configuration,
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * provides a fluent [`OpenAiAdapterBuilder`] so callers don't juggle
///   `Option<String>` manually.
///
/// The type itself exposes **no additional methods** — all user-facing
/// functionality sits on the provider traits (and on
/// `promptforge_session::Session` once the adapter is plugged in).
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use promptforge_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
///
/// The builder pattern keeps future options (proxy URL, organisation ID, …)
/// backwards compatible without breaking existing `build()` calls.
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder.  Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that loads `OPENAI_API_KEY` and, when set,
    /// `OPENAI_BASE_URL` from the environment.
    ///
    /// Missing variables only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a proxy or compatible self-hosted endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Bound each round-trip; a request still pending when the bound elapses
    /// resolves to a timeout failure.  Defaults to 30 s.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ForgeError::Validation`] – if the credential is missing.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self.api_key.ok_or(ForgeError::Validation(
            "missing credential: set `OPENAI_API_KEY` or supply an API key".into(),
        ))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .expect("building reqwest client");
        let client = OpenAiClient::with_http(api_key, http, self.base_url);

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}
