use serde::{Deserialize, Serialize};

/// Tuning knobs for the refinement loop.
///
/// Defaults match the base design: stop once the Flesch-Kincaid grade level
/// drops to 7.0 or below, with at most 3 simplification passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefineOptions {
    pub target_grade: f64,
    pub max_iterations: u32,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            target_grade: 7.0,
            max_iterations: 3,
        }
    }
}

/// One scored draft of the explanation. The loop keeps every draft so the
/// caller can show the full simplification history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefinementAttempt {
    pub text: String,
    pub grade_level: f64,
}

/// Terminal result of the refinement loop.
///
/// Notes:
/// - `target_met == false` is a best-effort outcome, not a failure: the cap
///   was reached with the score still above target, and this is reported.
/// - `history` holds every scored draft in order, the final one included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefineOutcome {
    pub explanation: String,
    pub grade_level: f64,
    pub iterations_used: u32,
    pub target_met: bool,
    pub history: Vec<RefinementAttempt>,
}
