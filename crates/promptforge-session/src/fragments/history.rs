//! A prompt fragment that replays recorded exchanges as prior chat turns.
//!
//! Single-shot deployments send only the composed instruction and the fresh
//! utterance.  When a deployment wants multi-turn memory, this fragment turns
//! the ledger into alternating user/assistant messages so the model sees the
//! conversation so far:
//!
//! ```text
//! user:      <question 1>
//! assistant: <answer 1>
//! user:      <question 2>
//! assistant: <answer 2>
//! ```
//!
//! The fragment borrows the ledger; it copies message content only when the
//! prompt is actually built.
//!
//! ```rust
//! use promptforge_session::{ConversationLedger, HistoryFragment};
//! use promptforge_prompt::chain::MessageChain;
//! use promptforge_core::message::ChatMessage;
//!
//! let ledger = ConversationLedger::new();
//! let messages: Vec<ChatMessage> = MessageChain::new()
//!     .with(HistoryFragment::new(&ledger))
//!     .build();
//!
//! assert!(messages.is_empty());
//! ```

use promptforge_core::{message::ChatMessage, template::IntoPrompt};

use crate::ledger::ConversationLedger;

/// Replays a ledger as alternating user/assistant messages.
pub struct HistoryFragment<'a> {
    ledger: &'a ConversationLedger,
    limit: Option<usize>,
}

impl<'a> HistoryFragment<'a> {
    /// Replay the whole ledger.
    pub fn new(ledger: &'a ConversationLedger) -> Self {
        Self {
            ledger,
            limit: None,
        }
    }

    /// Replay only the most recent `limit` exchanges, oldest first.  Bounds
    /// the prompt size of long-running sessions.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl IntoPrompt for HistoryFragment<'_> {
    type Message = ChatMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let skip = match self.limit {
            Some(limit) => self.ledger.len().saturating_sub(limit),
            None => 0,
        };

        self.ledger
            .iter()
            .skip(skip)
            .flat_map(|exchange| {
                [
                    ChatMessage::user(exchange.question.clone()),
                    ChatMessage::assistant(exchange.answer.clone()),
                ]
            })
            .collect()
    }
}
