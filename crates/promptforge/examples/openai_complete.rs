use promptforge::openai::OpenAiAdapterBuilder;
use promptforge::{
    message::ChatMessage,
    model::{Model, OpenAiModel},
    provider::{CompletionParameters, CompletionProvider as _},
};

/// # Chat Completion – Direct `complete` Example
///
/// Bypasses the session layer and calls the gateway directly.  That means:
///
/// 1. **You** assemble the full list of chat messages.
/// 2. **You** pick the model and generation parameters.
/// 3. The backend returns a [`promptforge::message::Completion`] containing
///    the answer text plus token usage statistics.
///
/// ```bash
/// export OPENAI_API_KEY=sk-…      # mandatory
/// cargo run -p promptforge --example openai_complete
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;

    let messages = vec![
        ChatMessage::system("You are a concise, witty assistant."),
        ChatMessage::user("Why is the Rust borrow checker important?"),
    ];

    let params = CompletionParameters::new(messages, Model::OpenAi(OpenAiModel::Gpt4oMini))
        .with_temperature(0.7)
        .with_max_tokens(500);

    let completion = backend.complete(params).await?;

    println!("Assistant: {}", completion.text);

    if let Some(usage) = completion.usage {
        println!(
            "Tokens – prompt: {}, completion: {}, total: {}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(())
}
