//! True/false grader: loose boolean coercion on both sides, awarded on an all-or-nothing basis.

use crate::types::{AnswerValue, GradingResult};

/// Correct iff the loose boolean coercions of both sides agree.
///
/// The boolean `true` or the string `"true"` coerce to true; every other
/// value coerces to false.
pub fn grade(correct: &AnswerValue, answer: &AnswerValue, points: f64) -> GradingResult {
    super::all_or_nothing(correct.as_bool_loose() == answer.as_bool_loose(), points)
}
