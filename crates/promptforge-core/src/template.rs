//! The seam between prompt *fragments* and the message list a gateway sends.
//!
//! A fragment is any value that knows how to render itself as zero or more
//! chat messages: a static instruction, the session's recorded history, a
//! user utterance.  Fragments are lined up with
//! `promptforge_prompt::chain::MessageChain` and the result goes straight
//! into [`crate::provider::CompletionParameters`].
//!
//! The `Message` associated type keeps the trait flexible without dynamic
//! dispatch: provider crates typically use [`crate::message::ChatMessage`],
//! but a back-end can require its own richer struct.

/// Converts a value into a series of chat messages.
pub trait IntoPrompt {
    /// Chat message representation emitted by the fragment.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// Convenience implementation so a single [`crate::message::ChatMessage`] can
/// be chained directly without wrapping it in a struct.
impl IntoPrompt for crate::message::ChatMessage {
    type Message = crate::message::ChatMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
