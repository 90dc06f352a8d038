use std::pin::Pin;
use std::sync::Arc;

use promptforge_core::{
    error::Result,
    message::{Completion, UsageReport},
    provider::{CompletionParameters, CompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ApiChatMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl CompletionProvider for OpenAiAdapter {
    type Message = ApiChatMessage;

    fn complete<'p, M>(
        &'p self,
        params: CompletionParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            params.validate()?;
            let request: ChatCompletionRequest = params.try_into()?;

            let response = client.chat_completion(request).await?;

            let usage = response.usage.map(|u| UsageReport {
                prompt_tokens: u.prompt_tokens as i64,
                completion_tokens: u.completion_tokens as i64,
                total_tokens: u.total_tokens as i64,
            });

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            match first_choice.finish_reason {
                None | Some(FinishReason::Stop) | Some(FinishReason::Length) => {
                    let text = first_choice.message.content.ok_or_else(|| {
                        OpenAiError::Format("choice carried no textual content".into())
                    })?;
                    Ok(Completion { text, usage })
                }
                Some(FinishReason::ContentFilter) => Err(OpenAiError::Format(
                    "response was withheld by the endpoint's content filter".into(),
                )
                .into()),
                Some(FinishReason::Other) => Err(OpenAiError::Format(
                    "unhandled finish reason on API".into(),
                )
                .into()),
            }
        })
    }
}
