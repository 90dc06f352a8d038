//! # `promptforge` – The umbrella crate
//!
//! One-stop import that glues together the building-block crates in the
//! workspace:
//!
//! | Crate                    | What it provides                                                        |
//! |--------------------------|--------------------------------------------------------------------------|
//! | **`promptforge-core`**   | Provider-agnostic traits, chat messages, model allow-list, error taxonomy |
//! | **`promptforge-prompt`** | Modifier catalog, context fields, deterministic instruction composition   |
//! | **`promptforge-session`**| Conversation ledger and the per-submission session driver                 |
//! | **`promptforge-openai`** | Chat-completions HTTP gateway for the OpenAI *v1* API *(optional)*        |
//!
//! By default the crate re-exports everything including the OpenAI gateway.
//! Disable default features to stay 100 % provider-agnostic — your binary
//! then carries no `reqwest`, TLS or compression code:
//!
//! ```toml
//! [dependencies]
//! promptforge = { version = "0.1", default-features = false }
//! ```
//!
//! ## Design philosophy
//!
//! * **Opt-in providers** – enabling `openai` pulls in the HTTP stack,
//!   otherwise your binary stays lean.
//! * **No procedural macros** – ordinary traits and `impl`s only, so you can
//!   understand and extend the code without magic.
//! * **Deterministic prompts** – identical selections compose to
//!   byte-identical instructions, so behaviour is reproducible across runs.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use promptforge::prompt::catalog::ModifierCatalog;
//! use promptforge::session::{Session, SessionConfig, Submission};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = promptforge::openai::OpenAiAdapterBuilder::new_from_env().build()?;
//!
//!     let mut session = Session::new(
//!         backend,
//!         ModifierCatalog::builtin(),
//!         SessionConfig::default(),
//!     );
//!
//!     let answer = session
//!         .submit(
//!             Submission::new("Explain how machine learning works")
//!                 .with_modifier("Keep it concise")
//!                 .with_modifier("Simple language"),
//!         )
//!         .await?;
//!
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! The `pub use` statements below forward the public API of the individual
//! crates so users can write `promptforge::session::Session` instead of
//! juggling four separate dependencies.

pub use promptforge_core::*;
pub use promptforge_prompt as prompt;
pub use promptforge_session as session;

#[cfg(feature = "openai")]
pub use promptforge_openai as openai;
