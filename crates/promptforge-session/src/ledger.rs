//! The append-only record of a session's question/answer exchanges.
//!
//! The ledger is the explicit replacement for framework-managed conversation
//! state: it is a plain value owned by its [`crate::session::Session`],
//! created at session start and dropped at session end.  Only successful
//! submissions are recorded — a failed call leaves the ledger untouched and
//! surfaces its error to the caller instead.
//!
//! Reads never block and never fail.  Growth is unbounded for the session
//! lifetime; a deployment that keeps sessions alive for days can cap replayed
//! history at prompt-assembly time with
//! [`crate::fragments::HistoryFragment::with_limit`] without touching the
//! record itself.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One recorded question/answer pair plus the settings used to produce it.
/// Immutable once appended.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    /// The user's utterance, verbatim.
    pub question: String,
    /// The generated answer, verbatim.
    pub answer: String,
    /// Modifier keys active for this submission, in selection order.
    pub modifiers_used: Vec<String>,
    /// Context fields active for this submission, in declared order.
    pub context_snapshot: Vec<(String, String)>,
    /// When the exchange was recorded (UTC).
    pub recorded_at: DateTime<Utc>,
}

/// Ordered, append-only sequence of [`Exchange`]s for one running session.
#[derive(Debug, Clone, Default)]
pub struct ConversationLedger {
    entries: Vec<Exchange>,
}

impl ConversationLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an exchange.  The only mutator; entries are never removed.
    pub fn append(&mut self, exchange: Exchange) {
        self.entries.push(exchange);
    }

    /// Exchanges in insertion order, most recent last.  Lazy and restartable:
    /// call again for a fresh pass.
    pub fn iter(&self) -> std::slice::Iter<'_, Exchange> {
        self.entries.iter()
    }

    /// Exchanges in most-recent-first order, for display.
    pub fn iter_reversed(&self) -> std::iter::Rev<std::slice::Iter<'_, Exchange>> {
        self.entries.iter().rev()
    }

    /// The most recently recorded exchange, if any.
    pub fn latest(&self) -> Option<&Exchange> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConversationLedger {
    type Item = &'a Exchange;
    type IntoIter = std::slice::Iter<'a, Exchange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
