//! Fluent accumulator over values implementing
//! [`IntoPrompt`](promptforge_core::template::IntoPrompt).
//!
//! A real submission lines up several message sources in a fixed order:
//!
//! * the composed system instruction,
//! * optionally the session's recorded history (prior turns),
//! * the user's utterance.
//!
//! `MessageChain` lets callers express that ordering linearly, without
//! mutable vectors or verbose `extend()` calls:
//!
//! ```rust
//! use promptforge_prompt::chain::MessageChain;
//! use promptforge_core::message::ChatMessage;
//!
//! let messages: Vec<ChatMessage> = MessageChain::new()
//!     .with(ChatMessage::system("You are a helpful AI assistant. "))
//!     .with(ChatMessage::user("Explain the borrow checker."))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
//!
//! The generic `Message` parameter lets back-ends plug in richer message
//! types while reusing the same chaining logic.

use promptforge_core::template::IntoPrompt;

/// Accumulates messages produced by [`IntoPrompt`] implementors.
///
/// The single `Vec` field is private so the only way to obtain the result is
/// through [`Self::build`], keeping the API fluent.
pub struct MessageChain<Message>(Vec<Message>);

impl<Message> Default for MessageChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> MessageChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `fragment`, preserving their order.
    pub fn with(mut self, fragment: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut fragment.into_prompt());
        self
    }

    /// Consume the chain and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptforge_core::message::{ChatMessage, ChatRole};

    #[test]
    fn preserves_fragment_order() {
        let messages = MessageChain::new()
            .with(ChatMessage::system("instruction"))
            .with(ChatMessage::user("question"))
            .build();
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);
    }
}
