//! # `promptforge-core`
//!
//! Provider-agnostic foundation of the Promptforge workspace: the unified
//! error taxonomy, chat message/role types, the model allow-list and the
//! provider traits every gateway crate implements.
//!
//! Nothing in this crate performs I/O.  Backend crates (e.g.
//! `promptforge-openai`) implement [`provider::CompletionProvider`] and map
//! their transport failures into [`error::ForgeError`] before returning.

pub mod error;
pub mod message;
pub mod model;
pub mod provider;
pub mod template;

pub use error::{ErrorKind, ForgeError, Result};
pub use message::{ChatMessage, ChatRole, Completion, UsageReport};
pub use model::{Model, OpenAiModel};
pub use provider::{CompletionParameters, CompletionProvider, StreamingCompletionProvider};
pub use template::IntoPrompt;
