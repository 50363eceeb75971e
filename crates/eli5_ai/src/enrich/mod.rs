use eli5_core::domain::RefineOutcome;
use eli5_core::error::AppError;
use eli5_core::readability::syllable_count;

use crate::llm::Llm;
use crate::prompts;

/// A key term and its child-level definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyWord {
    pub term: String,
    pub definition: String,
}

/// Pick up to `limit` candidate jargon terms from an explanation: the
/// longest many-syllable words, deduplicated case-insensitively, in order
/// of first appearance.
pub fn key_terms(text: &str, limit: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out: Vec<String> = Vec::new();
    for token in text.split_whitespace() {
        let word: String = token
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        if word.len() < 6 || syllable_count(&word) < 3 {
            continue;
        }
        let lower = word.to_ascii_lowercase();
        if seen.contains(&lower) {
            continue;
        }
        seen.push(lower);
        out.push(word);
        if out.len() == limit {
            break;
        }
    }
    out
}

/// One-sentence child-level definition of a jargon term.
pub fn define_jargon_term(llm: &dyn Llm, model: &str, term: &str) -> Result<String, AppError> {
    let out = llm.generate(model, &prompts::jargon_prompt(term))?;
    Ok(out.trim().to_string())
}

/// Named real-world example(s) of the topic. Factual instances only, no
/// analogies.
pub fn factual_example(
    llm: &dyn Llm,
    model: &str,
    topic: &str,
    concept: &str,
) -> Result<String, AppError> {
    let out = llm.generate(model, &prompts::factual_example_prompt(topic, concept))?;
    Ok(out.trim().to_string())
}

/// Assemble the final markdown: explanation, optional key words, optional
/// example.
pub fn assemble_markdown(
    topic: &str,
    outcome: &RefineOutcome,
    key_words: &[KeyWord],
    example: Option<&str>,
) -> String {
    let mut md = format!("**What is {topic}?**\n{}\n", outcome.explanation.trim());

    if !key_words.is_empty() {
        md.push_str("\n**Key Words**\n");
        for kw in key_words {
            md.push_str(&format!("**{}:** {}\n", kw.term, kw.definition));
        }
    }

    if let Some(example) = example {
        md.push_str(&format!("\n**For Example**\n{}\n", example.trim()));
    }

    md
}

/// Render the simplification history: one line per scored draft.
pub fn history_markdown(outcome: &RefineOutcome) -> String {
    let mut md = String::from("**Simplification History**\n");
    for (i, attempt) in outcome.history.iter().enumerate() {
        md.push_str(&format!(
            "*   **Attempt {} (Grade: {:.1}):** \"{}\"\n",
            i + 1,
            attempt.grade_level,
            attempt.text.trim()
        ));
    }
    md
}
