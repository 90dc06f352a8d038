use promptforge_core::error::ForgeError;
use promptforge_core::message::{ChatMessage, ChatRole};
use promptforge_core::provider::CompletionParameters;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ApiChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ApiChatMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            max_tokens: None,
            stream: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    max_tokens: u32,
    stream: bool
);

impl<M> TryFrom<CompletionParameters<M>> for ChatCompletionRequest
where
    M: Into<ApiChatMessage> + Clone,
{
    type Error = ForgeError;

    fn try_from(value: CompletionParameters<M>) -> Result<Self, Self::Error> {
        Ok(Self {
            model: map_model(&value.model)
                .ok_or(ForgeError::InvalidRequest(format!(
                    "backend does not support selected model: {:?}",
                    value.model
                )))?
                .into(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
            max_tokens: value.max_tokens,
            stream: None,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApiRole {
    System,
    User,
    Assistant,
}

impl From<ChatRole> for ApiRole {
    fn from(value: ChatRole) -> Self {
        match value {
            ChatRole::System => ApiRole::System,
            ChatRole::User => ApiRole::User,
            ChatRole::Assistant => ApiRole::Assistant,
        }
    }
}

impl From<ApiRole> for ChatRole {
    fn from(value: ApiRole) -> Self {
        match value {
            ApiRole::System => ChatRole::System,
            ApiRole::User => ChatRole::User,
            ApiRole::Assistant => ChatRole::Assistant,
        }
    }
}

/// A message as serialised on the wire.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiChatMessage {
    pub role: ApiRole,
    pub content: String,
}

impl From<ChatMessage> for ApiChatMessage {
    fn from(value: ChatMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

/// The assistant message inside a response choice.  `content` is optional on
/// the wire; an absent body is handled by the provider impl.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiResponseMessage {
    pub role: ApiRole,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ApiResponseMessage,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<common::Usage>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    /// Anything the endpoint adds later; surfaced as an upstream error.
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptforge_core::model::{Model, OpenAiModel};

    #[test]
    fn request_serialization_omits_unset_optionals() {
        let request = ChatCompletionRequest::new(
            "gpt-3.5-turbo".into(),
            vec![ApiChatMessage::from(ChatMessage::user("hi"))],
        );
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
        assert!(!json.contains("stream"));
    }

    #[test]
    fn request_serialization_keeps_set_parameters() {
        let request = ChatCompletionRequest::new(
            "gpt-4".into(),
            vec![ApiChatMessage::from(ChatMessage::system("be brief"))],
        )
        .temperature(0.7)
        .max_tokens(2000);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["max_tokens"], 2000);
        assert_eq!(json["messages"][0]["role"], "system");
    }

    #[test]
    fn parameters_convert_with_model_mapping() {
        let params = CompletionParameters::new(
            vec![ChatMessage::user("hello")],
            Model::OpenAi(OpenAiModel::Gpt35Turbo),
        )
        .with_temperature(0.2);
        let request: ChatCompletionRequest = params.try_into().unwrap();
        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.messages.len(), 1);
    }

    #[test]
    fn response_fixture_parses() {
        let data = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello there."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16}
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Hello there.")
        );
        assert_eq!(parsed.choices[0].finish_reason, Some(FinishReason::Stop));
        assert_eq!(parsed.usage.unwrap().total_tokens, 16);
    }

    #[test]
    fn unknown_finish_reason_parses_as_other() {
        let data = r#"{
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": null},
                "finish_reason": "tool_calls"
            }]
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.choices[0].finish_reason, Some(FinishReason::Other));
        assert!(parsed.choices[0].message.content.is_none());
    }
}
