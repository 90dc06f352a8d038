use std::pin::Pin;
use std::sync::Arc;

use crate::api_v1::ChatCompletionRequest;
use promptforge_core::error::{ForgeError, Result};
use promptforge_core::provider::{CompletionParameters, StreamingCompletionProvider};

use crate::OpenAiAdapter;
use futures_core::stream::Stream;

impl StreamingCompletionProvider for OpenAiAdapter {
    type Delta<'s>
        = Pin<Box<dyn Stream<Item = Result<String>> + Send + 's>>
    where
        Self: 's;

    fn complete_stream<'p, M>(&'p self, params: CompletionParameters<M>) -> Self::Delta<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async_stream::try_stream! {
            use futures_util::StreamExt;

            params.validate()?;
            let request: ChatCompletionRequest = params.try_into()?;

            let stream = client.chat_completion_stream(request);
            futures_util::pin_mut!(stream);

            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(ForgeError::from)?;
                for choice in chunk.choices {
                    if let Some(text) = choice.delta.content {
                        yield text;
                    }
                }
            }
        })
    }
}
