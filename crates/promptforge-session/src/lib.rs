//! # `promptforge-session`
//!
//! Session-scoped state and orchestration: the append-only
//! [`ledger::ConversationLedger`], the [`session::Session`] driver that walks
//! each submission through validation, composition and the gateway call, and
//! prompt fragments derived from recorded history.
//!
//! A [`session::Session`] owns its ledger outright — there is no ambient or
//! process-wide conversation state.  Create one session per user
//! conversation and drop it to end the conversation.

pub mod fragments;
pub mod ledger;
pub mod session;

pub use fragments::HistoryFragment;
pub use ledger::{ConversationLedger, Exchange};
pub use session::{Session, SessionConfig, Submission};
