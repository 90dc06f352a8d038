use std::borrow::Cow;

use promptforge_core::model::{Model, OpenAiModel};

pub const GPT35_TURBO: &str = "gpt-3.5-turbo";
pub const GPT4: &str = "gpt-4";
pub const GPT4_TURBO: &str = "gpt-4-turbo-preview";
pub const GPT4_O: &str = "gpt-4o";
pub const GPT4_O_MINI: &str = "gpt-4o-mini";

/// Translate a workspace [`Model`] into the endpoint's naming scheme.
/// Returning `None` means the model is not on this backend's allow-list and
/// the request is rejected before it is built.
pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) => Some(Cow::Borrowed(custom)),
        Model::OpenAi(openai_model) => Some(Cow::Borrowed(match openai_model {
            OpenAiModel::Gpt35Turbo => GPT35_TURBO,
            OpenAiModel::Gpt4 => GPT4,
            OpenAiModel::Gpt4Turbo => GPT4_TURBO,
            OpenAiModel::Gpt4o => GPT4_O,
            OpenAiModel::Gpt4oMini => GPT4_O_MINI,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_allow_list() {
        assert_eq!(
            map_model(&Model::OpenAi(OpenAiModel::Gpt35Turbo)).unwrap(),
            "gpt-3.5-turbo"
        );
        assert_eq!(
            map_model(&Model::OpenAi(OpenAiModel::Gpt4Turbo)).unwrap(),
            "gpt-4-turbo-preview"
        );
    }

    #[test]
    fn custom_models_pass_through() {
        assert_eq!(map_model(&Model::Custom("my-proxy-model")).unwrap(), "my-proxy-model");
    }
}
