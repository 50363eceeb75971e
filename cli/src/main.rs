use clap::Parser;
use tracing_subscriber::EnvFilter;

use eli5_ai::enrich::{self, KeyWord};
use eli5_ai::explain::explain_topic;
use eli5_ai::llm::openai_llm::{OpenAiLlm, DEFAULT_API_URL};
use eli5_ai::wiki::rest_client::{WikiLang, WikipediaClient};
use eli5_core::domain::RefineOptions;
use eli5_core::error::AppError;

/// Explain a topic like you would to a five-year-old.
///
/// Fetches the topic's Wikipedia summary, asks the model for a simplified
/// explanation, and re-simplifies until the Flesch-Kincaid grade level
/// meets the target or the iteration cap is hit.
#[derive(Parser, Debug)]
#[command(name = "eli5", version)]
struct Cli {
    /// Topic to look up on Wikipedia and explain
    topic: String,

    /// Readability target (Flesch-Kincaid grade level)
    #[arg(long, default_value_t = 7.0)]
    target_grade: f64,

    /// Maximum number of simplification passes
    #[arg(long, default_value_t = 3)]
    max_iterations: u32,

    /// Chat model to use
    #[arg(long, default_value = "gpt-4.1")]
    model: String,

    /// Wikipedia edition to read from ("en" or "simple")
    #[arg(long, default_value = "en")]
    lang: String,

    /// OpenAI-compatible API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Print only the explanation, skipping key words and example sections
    #[arg(long)]
    plain: bool,
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
        AppError::new(
            "LLM_API_KEY_MISSING",
            "OPENAI_API_KEY must be set in the environment",
        )
    })?;
    let llm = OpenAiLlm::new(&cli.api_url, &api_key)?;
    let lang = WikiLang::parse(&cli.lang)?;
    let source = WikipediaClient::new(lang);
    let options = RefineOptions {
        target_grade: cli.target_grade,
        max_iterations: cli.max_iterations,
    };

    tracing::info!(topic = %cli.topic, model = %cli.model, "starting explanation run");
    let outcome = explain_topic(&source, &llm, &cli.model, &cli.topic, &options)?;

    if cli.plain {
        println!("{}", outcome.explanation.trim());
    } else {
        let mut key_words: Vec<KeyWord> = Vec::new();
        for term in enrich::key_terms(&outcome.explanation, 2) {
            let definition = enrich::define_jargon_term(&llm, &cli.model, &term)?;
            key_words.push(KeyWord { term, definition });
        }
        let example =
            enrich::factual_example(&llm, &cli.model, &cli.topic, &outcome.explanation)?;
        println!(
            "{}",
            enrich::assemble_markdown(&cli.topic, &outcome, &key_words, Some(&example))
        );
        println!("{}", enrich::history_markdown(&outcome));
    }

    println!();
    println!(
        "Final grade level: {:.1} (target {:.1})",
        outcome.grade_level, cli.target_grade
    );
    println!("Simplification passes: {}", outcome.iterations_used);
    if !outcome.target_met {
        println!(
            "Note: target not reached within {} passes; best-effort explanation shown.",
            cli.max_iterations
        );
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        if let Some(details) = &err.details {
            eprintln!("  {details}");
        }
        std::process::exit(1);
    }
}
