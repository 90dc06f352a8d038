//! Chat message and completion types shared by every gateway crate.
//!
//! They deliberately mirror the concepts exposed by most provider APIs:
//! "system", "user" and "assistant" messages.  By staying minimal and
//! provider-agnostic we can:
//!
//! * convert them into provider-specific structs via a simple `From`/`Into`,
//! * serialize them without pulling in heavyweight dependencies, and
//! * use them in unit tests without mocking a full transport layer.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message, independent of any specific LLM provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Construct a message with an explicit role.
    pub fn new(content: impl Into<String>, role: ChatRole) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// A system-role message — global behaviour and style instructions.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(content, ChatRole::System)
    }

    /// A user-role message — the human utterance.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, ChatRole::User)
    }

    /// An assistant-role message — a prior model reply.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, ChatRole::Assistant)
    }
}

/// Chat roles recognised by the gateway.
///
/// The `Display` implementation renders the canonical lowercase name so the
/// value can be fed directly into JSON without extra mapping logic.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// Defines global behaviour — carries the composed instruction.
    System,
    /// Messages originating from the human user.
    User,
    /// Messages produced by the model.
    Assistant,
}

impl Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Successful result of one gateway round-trip.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The generated text.
    pub text: String,
    /// Token accounting, when the endpoint reports it.
    pub usage: Option<UsageReport>,
}

/// Token usage reported by the endpoint for one request.
#[derive(Debug, Clone, Copy)]
pub struct UsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
