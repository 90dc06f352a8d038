//! Model identifiers used throughout the **promptforge** workspace.
//!
//! The enum hierarchy doubles as the configured allow-list: application code
//! picks a variant instead of typing literal strings such as
//! `"gpt-3.5-turbo"`, and each provider crate maps the variants onto its own
//! naming scheme.  A model the provider cannot map is rejected with
//! [`crate::error::ForgeError::InvalidRequest`] before any request is sent.
//!
//! # Adding more models
//!
//! 1. Add the variant to the provider-specific sub-enum (`OpenAiModel`, …).
//! 2. Update the mapping function in the provider crate
//!    (`promptforge-openai::model_map::map_model`, etc.).
//! 3. The compiler flags any provider match statement you forgot.

/// Universal identifier for a text-generation model.
///
/// * `OpenAi` – enumerated list of models the OpenAI gateway accepts.
/// * `Custom` – explicit escape hatch for self-hosted or beta deployments;
///   passed through to the provider verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in OpenAI models (chat completion API).
    OpenAi(OpenAiModel),
    /// Fully qualified model name forwarded without validation.
    Custom(&'static str),
}

/// The models the OpenAI back-end officially supports.
///
/// Keeping the list small avoids accidental typos while still allowing
/// arbitrary names through [`Model::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt35Turbo,
    Gpt4,
    Gpt4Turbo,
    Gpt4o,
    Gpt4oMini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
