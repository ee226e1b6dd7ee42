//! Multi-choice grader: set equality over selected option identifiers, awarded on an all-or-nothing basis.

use crate::types::{AnswerValue, GradingResult};

/// Correct iff the selected set equals the correct set.
///
/// Order is ignored and duplicate selections collapse. A non-list value on
/// either side is treated as selecting nothing.
pub fn grade(correct: &AnswerValue, answer: &AnswerValue, points: f64) -> GradingResult {
    super::all_or_nothing(correct.as_choice_set() == answer.as_choice_set(), points)
}
