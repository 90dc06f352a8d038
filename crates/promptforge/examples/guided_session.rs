use promptforge::openai::OpenAiAdapterBuilder;
use promptforge::prompt::catalog::ModifierCatalog;
use promptforge::prompt::context::ContextFields;
use promptforge::session::{Session, SessionConfig, Submission};

/// # Guided Session – the full prompt-builder flow
///
/// Mirrors what an interactive form renderer drives: the user toggles
/// modifiers, fills a couple of context fields, types a question and hits
/// submit.  The session composes the instruction, calls the gateway once and
/// records the exchange.
///
/// ```bash
/// export OPENAI_API_KEY=sk-…      # mandatory
/// cargo run -p promptforge --example guided_session
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;

    let mut session = Session::new(
        backend,
        ModifierCatalog::builtin(),
        SessionConfig::default(),
    );

    let context = ContextFields::new()
        .with("Audience", "junior engineers")
        .with("Format", "short paragraphs");

    let answer = session
        .submit(
            Submission::new("Explain how machine learning works")
                .with_modifier("Keep it concise")
                .with_modifier("Include examples")
                .with_context(context),
        )
        .await?;

    println!("Assistant: {answer}\n");

    println!("--- history (most recent first) ---");
    for exchange in session.ledger().iter_reversed() {
        println!(
            "[{}] Q: {} | modifiers: {}",
            exchange.recorded_at.format("%H:%M:%S"),
            exchange.question,
            exchange.modifiers_used.join(", ")
        );
    }

    Ok(())
}
