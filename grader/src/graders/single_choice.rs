//! Single-choice grader: exact match on canonical option identifiers, awarded on an all-or-nothing basis.

use crate::types::{AnswerValue, GradingResult};

/// Correct iff both sides stringify to the same option identifier.
///
/// Identifiers are compared as strings, so a numeric-looking id stored as a
/// number and the same id submitted as a string grade as equal.
pub fn grade(correct: &AnswerValue, answer: &AnswerValue, points: f64) -> GradingResult {
    super::all_or_nothing(
        correct.canonical_string() == answer.canonical_string(),
        points,
    )
}
