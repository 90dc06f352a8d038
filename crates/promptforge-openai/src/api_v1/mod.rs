//! Request/response structs for the OpenAI *v1* chat-completions API.

pub mod common;

mod chat_completion;
mod chat_completion_stream;

pub use chat_completion::{
    ApiChatMessage, ApiResponseMessage, ApiRole, ChatCompletionChoice, ChatCompletionRequest,
    ChatCompletionResponse, FinishReason,
};
pub use chat_completion_stream::{ChatCompletionChunkResponse, ChunkChoice, ChunkDelta};
