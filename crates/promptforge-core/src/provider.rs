//! Traits a **gateway** crate implements to turn a composed prompt into a
//! network call against a concrete endpoint (OpenAI, a proxy, a test stub).
//!
//! The surface is intentionally minimal:
//!
//! * **One associated type** – the in-memory `Message` representation the
//!   provider accepts.
//! * **One async-ish method** – `complete`, which performs a *single*
//!   non-streaming round-trip.  The gateway never retries on its own; a
//!   failed call surfaces its first error and the caller decides what to do.
//!
//! Streaming delivery is a separate, optional trait so simple backends (and
//! test stubs) don't have to fake it.

use std::{future::Future, pin::Pin};

use crate::{
    error::{ForgeError, Result},
    message::Completion,
    model::Model,
};
use futures_core::stream::Stream;

/// A backend capable of one-shot chat completion.
///
/// Implementations must be safe to invoke concurrently from independent
/// sessions sharing one process: a call may only read configuration, never
/// touch shared mutable state.
pub trait CompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute the request and return the generated text.  Exactly one
    /// attempt is made per call.
    fn complete<'p, M>(
        &'p self,
        params: CompletionParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

/// A provider that can deliver the model's answer **incrementally**.
///
/// The stream yields UTF-8 text deltas.  Dropping the stream mid-consumption
/// must release the underlying connection; implementations built on
/// `reqwest` get this for free.
pub trait StreamingCompletionProvider: CompletionProvider {
    /// The stream of text deltas returned by [`Self::complete_stream`].
    type Delta<'s>: Stream<Item = Result<String>> + Send + 's
    where
        Self: 's;

    /// Start a streaming completion.  Terminates after the final delta or on
    /// the first error.
    fn complete_stream<'p, M>(&'p self, params: CompletionParameters<M>) -> Self::Delta<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

/// Everything one round-trip needs: the role-tagged messages, the target
/// model and the generation parameters.  Constructed fresh per submission and
/// never mutated after hand-off.
#[derive(Debug, Clone)]
pub struct CompletionParameters<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl<M: Clone> CompletionParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Reject out-of-range generation parameters before any request is built.
    ///
    /// Temperature must lie in `[0.0, 2.0]`, `max_tokens` must be positive
    /// and at least one message must be present.  The returned error names
    /// the offending parameter.
    pub fn validate(&self) -> Result<()> {
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ForgeError::Validation(format!(
                    "temperature {t} is outside the allowed range [0.0, 2.0]"
                )));
            }
        }
        if let Some(m) = self.max_tokens {
            if m == 0 {
                return Err(ForgeError::Validation(
                    "max_tokens must be positive".into(),
                ));
            }
        }
        if self.messages.is_empty() {
            return Err(ForgeError::Validation(
                "at least one message is required".into(),
            ));
        }
        Ok(())
    }
}
