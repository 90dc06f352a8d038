//! OpenAI back-end for the Promptforge SDK.
//!
//! [`OpenAiAdapter`] implements the provider traits from `promptforge-core`
//! against the `v1/chat/completions` endpoint: one request per call, no
//! hidden retry, transport failures classified into the workspace error
//! taxonomy, and an optional SSE token stream.

mod adapter;
mod model_map;
mod provider_impl_chat;
mod provider_impl_chat_stream;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;
