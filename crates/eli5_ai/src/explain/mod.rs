use eli5_core::domain::{RefineOptions, RefineOutcome, RefinementAttempt};
use eli5_core::error::AppError;
use eli5_core::preprocess::clean_text;
use eli5_core::readability::flesch_kincaid_grade;

use crate::llm::Llm;
use crate::prompts;
use crate::wiki::SummarySource;

/// States of the refinement machine. Score decides, Refine rewrites, Done
/// is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefineStep {
    Score,
    Refine,
    Done,
}

/// Iteratively simplify `explanation` until its Flesch-Kincaid grade level
/// drops to the target or the iteration cap is hit.
///
/// Semantics:
/// - A score exactly equal to the target counts as success.
/// - Hitting the cap with the score still above target is a best-effort
///   outcome (`target_met == false`), reported rather than failed.
/// - A rewritten draft replaces the current one unconditionally, even when
///   its score turns out worse on the next pass. There is no rollback to a
///   better earlier draft; the source system behaves this way and the
///   history makes any regression visible to the caller.
pub fn refine_to_target(
    llm: &dyn Llm,
    model: &str,
    explanation: String,
    options: &RefineOptions,
) -> Result<RefineOutcome, AppError> {
    let mut current = explanation;
    let mut iterations: u32 = 0;
    let mut target_met = false;
    let mut history: Vec<RefinementAttempt> = Vec::new();
    let mut step = RefineStep::Score;

    loop {
        match step {
            RefineStep::Score => {
                let grade = flesch_kincaid_grade(&current);
                history.push(RefinementAttempt {
                    text: current.clone(),
                    grade_level: grade,
                });
                tracing::debug!(grade, iterations, "scored explanation");
                if grade <= options.target_grade {
                    target_met = true;
                    step = RefineStep::Done;
                } else if iterations >= options.max_iterations {
                    step = RefineStep::Done;
                } else {
                    step = RefineStep::Refine;
                }
            }
            RefineStep::Refine => {
                let prompt = prompts::refine_prompt(&current);
                current = llm.generate(model, &prompt)?;
                iterations += 1;
                tracing::debug!(iterations, "rewrote explanation");
                step = RefineStep::Score;
            }
            RefineStep::Done => {
                // Score always runs before Done, so history is non-empty
                // and its last entry scores the current draft.
                let grade_level = history.last().map(|a| a.grade_level).unwrap_or_default();
                return Ok(RefineOutcome {
                    explanation: current,
                    grade_level,
                    iterations_used: iterations,
                    target_met,
                    history,
                });
            }
        }
    }
}

/// Full pipeline for one topic: fetch summary, clean it, ask for an initial
/// ELI5 rendering, then refine to the readability target.
pub fn explain_topic(
    source: &dyn SummarySource,
    llm: &dyn Llm,
    model: &str,
    topic: &str,
    options: &RefineOptions,
) -> Result<RefineOutcome, AppError> {
    if topic.trim().is_empty() {
        return Err(AppError::new("WIKI_TOPIC_EMPTY", "Topic must be non-empty"));
    }

    let raw = source.fetch_summary(topic)?;
    let cleaned = clean_text(&raw);
    tracing::info!(topic, chars = cleaned.len(), "fetched and cleaned summary");
    if cleaned.is_empty() {
        return Err(
            AppError::new("WIKI_NOT_FOUND", "Summary was empty after cleaning")
                .with_details(format!("topic={topic}")),
        );
    }

    let first = llm.generate(model, &prompts::eli5_prompt(&cleaned))?;
    refine_to_target(llm, model, first, options)
}
