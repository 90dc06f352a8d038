//! The session driver: one value owning the backend handle, the modifier
//! catalog, the generation defaults and the conversation ledger.
//!
//! Each call to [`Session::submit`] walks a fixed pipeline:
//!
//! ```text
//! Validating -> Composing -> Calling -> { Succeeded | Failed }
//! ```
//!
//! * **Validating** rejects an empty utterance before anything else happens.
//! * **Composing** resolves the selected modifiers against the catalog and
//!   builds the message list; an unknown key or an out-of-range generation
//!   parameter fails here, before any network activity.
//! * **Calling** performs exactly one gateway round-trip, bounded by the
//!   adapter's request timeout.
//! * **Succeeded** appends exactly one [`Exchange`] to the ledger.  A failed
//!   submission appends nothing and returns the error for display.
//!
//! The session processes one submission at a time (`submit` takes `&mut
//! self`), which serialises ledger appends by construction.  The backend
//! behind the `Arc` may be shared freely across sessions.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use promptforge_core::{
    error::{ForgeError, Result},
    message::ChatMessage,
    model::{Model, OpenAiModel},
    provider::{CompletionParameters, CompletionProvider},
};
use promptforge_prompt::{
    catalog::ModifierCatalog, chain::MessageChain, compose::compose, context::ContextFields,
};

use crate::fragments::HistoryFragment;
use crate::ledger::{ConversationLedger, Exchange};

/// Generation defaults applied to every submission of a session.
///
/// The defaults mirror the stock prompt-builder form: gpt-3.5-turbo,
/// temperature 0.7, at most 2000 output tokens, single-shot requests.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub model: Model,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Leading text of every composed instruction.  Modifier templates are
    /// appended to this.
    pub base_instruction: String,
    /// When true, recorded exchanges are replayed as prior turns on each
    /// submission.  Off by default: a fresh request per question.
    pub multi_turn: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model: Model::OpenAi(OpenAiModel::Gpt35Turbo),
            temperature: 0.7,
            max_tokens: 2000,
            base_instruction: "You are a helpful AI assistant. ".into(),
            multi_turn: false,
        }
    }
}

impl SessionConfig {
    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_base_instruction(mut self, base_instruction: impl Into<String>) -> Self {
        self.base_instruction = base_instruction.into();
        self
    }

    pub fn with_multi_turn(mut self, multi_turn: bool) -> Self {
        self.multi_turn = multi_turn;
        self
    }
}

/// One submission as collected by the form renderer: the free-text question,
/// the modifier keys toggled on (in selection order) and the context fields.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub utterance: String,
    pub selected_modifiers: Vec<String>,
    pub context: ContextFields,
}

impl Submission {
    pub fn new(utterance: impl Into<String>) -> Self {
        Self {
            utterance: utterance.into(),
            selected_modifiers: vec![],
            context: ContextFields::new(),
        }
    }

    /// Toggle a modifier on.  Order of calls is selection order.
    pub fn with_modifier(mut self, key: impl Into<String>) -> Self {
        self.selected_modifiers.push(key.into());
        self
    }

    pub fn with_context(mut self, context: ContextFields) -> Self {
        self.context = context;
        self
    }
}

/// A running conversation bound to one backend.
///
/// Generic over the backend type `B` so the compiler guarantees the message
/// type produced here converts into what the backend expects — no dynamic
/// dispatch in user code.
pub struct Session<B> {
    backend: Arc<B>,
    config: SessionConfig,
    catalog: ModifierCatalog,
    ledger: ConversationLedger,
}

impl<B> Session<B>
where
    B: CompletionProvider,
    ChatMessage: Into<B::Message>,
{
    /// Create a session with an empty ledger.
    pub fn new(backend: B, catalog: ModifierCatalog, config: SessionConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            config,
            catalog,
            ledger: ConversationLedger::new(),
        }
    }

    /// Run one submission end to end and return the generated answer.
    ///
    /// On success the exchange is recorded in the ledger; on any failure the
    /// ledger is left untouched and the error is returned for display.
    pub async fn submit(&mut self, submission: Submission) -> Result<String> {
        if submission.utterance.trim().is_empty() {
            return Err(ForgeError::Validation("question must not be empty".into()));
        }

        let instruction = compose(
            &self.config.base_instruction,
            &submission.selected_modifiers,
            &self.catalog,
            &submission.context,
        )?;

        let mut chain = MessageChain::new().with(ChatMessage::system(instruction));
        if self.config.multi_turn {
            chain = chain.with(HistoryFragment::new(&self.ledger));
        }
        let messages = chain
            .with(ChatMessage::user(submission.utterance.clone()))
            .build();

        let params = CompletionParameters::new(messages, self.config.model.clone())
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);
        params.validate()?;

        debug!(
            model = ?self.config.model,
            modifiers = submission.selected_modifiers.len(),
            prior_exchanges = self.ledger.len(),
            "submitting composed prompt"
        );

        let completion = self.backend.complete(params).await?;

        self.ledger.append(Exchange {
            question: submission.utterance,
            answer: completion.text.clone(),
            modifiers_used: submission.selected_modifiers,
            context_snapshot: submission.context.to_pairs(),
            recorded_at: Utc::now(),
        });

        Ok(completion.text)
    }

    /// Recorded exchanges in insertion order, most recent last.
    pub fn history(&self) -> std::slice::Iter<'_, Exchange> {
        self.ledger.iter()
    }

    /// The session's ledger, e.g. for a most-recent-first display pass.
    pub fn ledger(&self) -> &ConversationLedger {
        &self.ledger
    }

    /// The catalog this session resolves modifier keys against.
    pub fn catalog(&self) -> &ModifierCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Mutable access so the form renderer can apply slider/selector changes
    /// between submissions.
    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptforge_core::message::Completion;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-process backend with a scripted reply.  Counts invocations and
    /// records the message lists it receives, so tests can assert that
    /// validation failures never reach the "network".
    struct ScriptedBackend {
        reply: Option<String>,
        calls: AtomicUsize,
        seen: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedBackend {
        fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.into()),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(vec![]),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(vec![]),
            }
        }
    }

    impl CompletionProvider for ScriptedBackend {
        type Message = ChatMessage;

        fn complete<'p, M>(
            &'p self,
            params: CompletionParameters<M>,
        ) -> Pin<Box<dyn Future<Output = promptforge_core::error::Result<Completion>> + Send + 'p>>
        where
            M: Into<Self::Message> + Clone + Send + Sync + 'p,
        {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = self.reply.clone();
            Box::pin(async move {
                let messages: Vec<ChatMessage> =
                    params.into_messages().into_iter().map(Into::into).collect();
                self.seen.lock().unwrap().push(messages);
                match reply {
                    Some(text) => Ok(Completion { text, usage: None }),
                    None => Err(ForgeError::Upstream("scripted failure".into())),
                }
            })
        }
    }

    fn session(backend: ScriptedBackend) -> Session<ScriptedBackend> {
        Session::new(backend, ModifierCatalog::builtin(), SessionConfig::default())
    }

    #[tokio::test]
    async fn success_appends_exactly_one_exchange() {
        let mut session = session(ScriptedBackend::replying("42"));
        let answer = session
            .submit(
                Submission::new("What is the answer?")
                    .with_modifier("Keep it concise")
                    .with_modifier("Data-driven"),
            )
            .await
            .unwrap();

        assert_eq!(answer, "42");
        assert_eq!(session.ledger().len(), 1);
        let exchange = session.ledger().latest().unwrap();
        assert_eq!(exchange.question, "What is the answer?");
        assert_eq!(exchange.answer, "42");
        assert_eq!(exchange.modifiers_used, vec!["Keep it concise", "Data-driven"]);
    }

    #[tokio::test]
    async fn failure_appends_nothing() {
        let mut session = session(ScriptedBackend::failing());
        let err = session.submit(Submission::new("hello")).await.unwrap_err();

        assert!(matches!(err, ForgeError::Upstream(_)));
        assert!(session.ledger().is_empty());
        assert_eq!(session.backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_utterance_never_reaches_the_backend() {
        let mut session = session(ScriptedBackend::replying("unused"));
        let err = session.submit(Submission::new("   ")).await.unwrap_err();

        assert!(matches!(err, ForgeError::Validation(_)));
        assert_eq!(session.backend.calls.load(Ordering::SeqCst), 0);
        assert!(session.ledger().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_temperature_never_reaches_the_backend() {
        let mut session = session(ScriptedBackend::replying("unused"));
        session.config_mut().temperature = 2.5;
        let err = session.submit(Submission::new("hello")).await.unwrap_err();

        assert!(err.to_string().contains("temperature"));
        assert_eq!(session.backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_modifier_never_reaches_the_backend() {
        let mut session = session(ScriptedBackend::replying("unused"));
        let err = session
            .submit(Submission::new("hello").with_modifier("Pirate voice"))
            .await
            .unwrap_err();

        assert!(matches!(err, ForgeError::UnknownModifierKey { .. }));
        assert_eq!(session.backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn single_shot_sends_system_and_user_only() {
        let mut session = session(ScriptedBackend::replying("a1"));
        session.submit(Submission::new("q1")).await.unwrap();
        session.submit(Submission::new("q2")).await.unwrap();

        let seen = session.backend.seen.lock().unwrap();
        assert_eq!(seen[1].len(), 2);
    }

    #[tokio::test]
    async fn multi_turn_replays_recorded_history() {
        let backend = ScriptedBackend::replying("a");
        let config = SessionConfig::default().with_multi_turn(true);
        let mut session = Session::new(backend, ModifierCatalog::builtin(), config);

        session.submit(Submission::new("q1")).await.unwrap();
        session.submit(Submission::new("q2")).await.unwrap();

        let seen = session.backend.seen.lock().unwrap();
        // system + q1/a1 + user
        assert_eq!(seen[1].len(), 4);
        assert_eq!(seen[1][1].content, "q1");
        assert_eq!(seen[1][2].content, "a");
        assert_eq!(seen[1][3].content, "q2");
    }

    #[tokio::test]
    async fn history_matches_ledger_order() {
        let mut session = session(ScriptedBackend::replying("a"));
        session.submit(Submission::new("first")).await.unwrap();
        session.submit(Submission::new("second")).await.unwrap();

        let questions: Vec<_> = session.history().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["first", "second"]);

        let reversed: Vec<_> = session
            .ledger()
            .iter_reversed()
            .map(|e| e.question.as_str())
            .collect();
        assert_eq!(reversed, vec!["second", "first"]);
    }
}
