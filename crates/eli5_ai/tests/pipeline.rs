use std::cell::{Cell, RefCell};

use eli5_ai::explain::explain_topic;
use eli5_ai::llm::Llm;
use eli5_ai::wiki::SummarySource;
use eli5_core::domain::RefineOptions;
use eli5_core::error::AppError;

const STUB_SUMMARY: &str = "Water is the wet stuff we drink.[1] Rain is made of water.";
const FIRST_DRAFT: &str = "Water is an inorganic compound that constitutes a transparent, tasteless, odorless, and nearly colorless chemical substance present throughout the hydrosphere.";
const REFINED: &str = "Water is the wet stuff we drink. Rain is made of water.";

struct StubSource {
    summary: String,
    calls: Cell<u32>,
}

impl SummarySource for StubSource {
    fn fetch_summary(&self, _topic: &str) -> Result<String, AppError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.summary.clone())
    }
}

struct NotFoundSource;

impl SummarySource for NotFoundSource {
    fn fetch_summary(&self, topic: &str) -> Result<String, AppError> {
        Err(AppError::new("WIKI_NOT_FOUND", "Topic not found on Wikipedia")
            .with_details(format!("topic={topic}")))
    }
}

/// Scripted outputs in order; records every prompt it sees.
struct ScriptedLlm {
    outputs: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedLlm {
    fn new(outputs: &[&str]) -> Self {
        Self {
            outputs: RefCell::new(outputs.iter().rev().map(|s| s.to_string()).collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Llm for ScriptedLlm {
    fn generate(&self, _model: &str, prompt: &str) -> Result<String, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.outputs
            .borrow_mut()
            .pop()
            .ok_or_else(|| AppError::new("TEST_SCRIPT_EXHAUSTED", "No scripted output left"))
    }
}

#[test]
fn end_to_end_refines_once_for_water() {
    let source = StubSource {
        summary: STUB_SUMMARY.to_string(),
        calls: Cell::new(0),
    };
    let llm = ScriptedLlm::new(&[FIRST_DRAFT, REFINED]);
    let outcome = explain_topic(
        &source,
        &llm,
        "mock",
        "Water",
        &RefineOptions::default(),
    )
    .expect("pipeline should succeed");

    assert_eq!(outcome.explanation, REFINED);
    assert_eq!(outcome.iterations_used, 1);
    assert!(outcome.target_met);
    assert_eq!(source.calls.get(), 1);

    // The initial prompt carries the cleaned summary, citation marker gone.
    let prompts = llm.prompts.borrow();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Water is the wet stuff we drink. Rain is made of water."));
    assert!(!prompts[0].contains("[1]"));
}

#[test]
fn not_found_aborts_before_any_model_call() {
    let llm = ScriptedLlm::new(&[]);
    let err = explain_topic(
        &NotFoundSource,
        &llm,
        "mock",
        "Nonexistent Topic",
        &RefineOptions::default(),
    )
    .expect_err("missing article should abort the pipeline");
    assert!(err.is_not_found());
    assert!(llm.prompts.borrow().is_empty());
}

#[test]
fn empty_topic_is_rejected_before_fetching() {
    let source = StubSource {
        summary: STUB_SUMMARY.to_string(),
        calls: Cell::new(0),
    };
    let llm = ScriptedLlm::new(&[]);
    for topic in ["", "   "] {
        let err = explain_topic(&source, &llm, "mock", topic, &RefineOptions::default())
            .expect_err("empty topic should be rejected");
        assert_eq!(err.code, "WIKI_TOPIC_EMPTY");
    }
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn summary_that_cleans_to_nothing_is_not_found() {
    let source = StubSource {
        summary: "[1][2] [edit]".to_string(),
        calls: Cell::new(0),
    };
    let llm = ScriptedLlm::new(&[]);
    let err = explain_topic(&source, &llm, "mock", "Water", &RefineOptions::default())
        .expect_err("marker-only summary should abort");
    assert!(err.is_not_found());
    assert!(llm.prompts.borrow().is_empty());
}
