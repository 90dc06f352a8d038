use std::io::Write as _;

use futures_util::StreamExt;
use promptforge::openai::OpenAiAdapterBuilder;
use promptforge::prompt::{catalog::ModifierCatalog, compose, context::ContextFields};
use promptforge::{
    message::ChatMessage,
    model::{Model, OpenAiModel},
    provider::{CompletionParameters, StreamingCompletionProvider as _},
};

/// # Streaming – incremental token delivery
///
/// Composes an instruction from the builtin catalog, then consumes the
/// gateway's delta stream and prints tokens as they arrive.  Dropping the
/// stream early (e.g. on ctrl-c) releases the connection.
///
/// ```bash
/// export OPENAI_API_KEY=sk-…      # mandatory
/// cargo run -p promptforge --example openai_stream
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;

    let instruction = compose(
        "You are a helpful AI assistant. ",
        &["Step by step", "Simple language"],
        &ModifierCatalog::builtin(),
        &ContextFields::new(),
    )?;

    let messages = vec![
        ChatMessage::system(instruction),
        ChatMessage::user("How does DNS resolution work?"),
    ];

    let params = CompletionParameters::new(messages, Model::OpenAi(OpenAiModel::Gpt4oMini))
        .with_max_tokens(800);

    let stream = backend.complete_stream(params);
    futures_util::pin_mut!(stream);

    while let Some(delta) = stream.next().await {
        print!("{}", delta?);
        std::io::stdout().flush()?;
    }
    println!();

    Ok(())
}
