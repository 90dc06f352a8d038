use serde::Deserialize;

use super::chat_completion::ApiRole;
use super::common;

/// A single SSE `data: {...}` frame of a streaming completion.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkResponse {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
    #[serde(default)]
    pub usage: Option<common::Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkChoice {
    pub index: i64,
    pub delta: ChunkDelta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The incremental payload — the first chunk carries the role, subsequent
/// chunks carry content fragments, the last chunk carries neither.
#[derive(Debug, Deserialize)]
pub struct ChunkDelta {
    #[serde(default)]
    pub role: Option<ApiRole>,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_content_delta() {
        let data = r#"{"choices":[{"index":0,"delta":{"content":"Hel"},"finish_reason":null}]}"#;
        let parsed: ChatCompletionChunkResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.choices[0].delta.content.as_deref(), Some("Hel"));
        assert!(parsed.choices[0].finish_reason.is_none());
    }

    #[test]
    fn parses_the_leading_role_chunk() {
        let data =
            r#"{"choices":[{"index":0,"delta":{"role":"assistant","content":""},"finish_reason":null}]}"#;
        let parsed: ChatCompletionChunkResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.choices[0].delta.role, Some(ApiRole::Assistant));
    }

    #[test]
    fn parses_the_finish_chunk() {
        let data = r#"{"choices":[{"index":0,"delta":{},"finish_reason":"stop"}]}"#;
        let parsed: ChatCompletionChunkResponse = serde_json::from_str(data).unwrap();
        assert!(parsed.choices[0].delta.content.is_none());
        assert_eq!(parsed.choices[0].finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn parses_a_trailing_usage_chunk() {
        let data = r#"{"choices":[],"usage":{"prompt_tokens":10,"completion_tokens":5,"total_tokens":15}}"#;
        let parsed: ChatCompletionChunkResponse = serde_json::from_str(data).unwrap();
        assert!(parsed.choices.is_empty());
        assert_eq!(parsed.usage.unwrap().total_tokens, 15);
    }
}
