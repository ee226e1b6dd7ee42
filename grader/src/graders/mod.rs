//! # Graders
//!
//! This module provides the per-type answer graders, one module per
//! auto-gradable question type:
//!
//! - [`single_choice`]: exact match on canonical option identifiers.
//! - [`multi_choice`]: set equality over the selected option identifiers.
//! - [`true_false`]: loose boolean coercion on both sides.
//! - [`numeric`]: tolerance-window comparison of parsed numbers.
//! - [`short_text`]: normalized equality with an opt-in `/pattern/` mode.
//!
//! [`grade_answer`] is the single dispatch point: it applies the no-answer
//! short-circuit, routes objective types to their grader, flags essay and
//! canvas answers for manual review, and degrades unknown type tags to an
//! incorrect result instead of failing the attempt.

pub mod multi_choice;
pub mod numeric;
pub mod short_text;
pub mod single_choice;
pub mod true_false;

use crate::types::{GradingInput, GradingResult, QuestionType};

/// All-or-nothing result shared by the objective graders.
pub(crate) fn all_or_nothing(is_correct: bool, points: f64) -> GradingResult {
    GradingResult {
        is_correct: Some(is_correct),
        points_awarded: if is_correct { points } else { 0.0 },
        needs_manual_grading: false,
    }
}

/// Grade one answer.
///
/// Total: every input, however malformed, produces a well-formed result.
/// Wrongness is a result, not an error.
pub fn grade_answer(input: &GradingInput) -> GradingResult {
    // A missing answer grades as wrong for every type, essay included. This
    // runs before type dispatch, so an unanswered essay never reaches the
    // manual-review branch.
    if input.answer.is_null() {
        return GradingResult {
            is_correct: Some(false),
            points_awarded: 0.0,
            needs_manual_grading: false,
        };
    }

    match input.question_type {
        QuestionType::McqSingle => {
            single_choice::grade(&input.correct, &input.answer, input.points)
        }
        QuestionType::McqMulti => multi_choice::grade(&input.correct, &input.answer, input.points),
        QuestionType::TrueFalse => true_false::grade(&input.correct, &input.answer, input.points),
        QuestionType::Numeric => numeric::grade(
            &input.correct,
            &input.answer,
            input.points,
            input.tolerance.unwrap_or(0.0),
        ),
        QuestionType::ShortText => short_text::grade(&input.correct, &input.answer, input.points),
        QuestionType::Essay | QuestionType::Canvas => GradingResult {
            is_correct: None,
            points_awarded: 0.0,
            needs_manual_grading: true,
        },
        QuestionType::Unknown => GradingResult {
            is_correct: Some(false),
            points_awarded: 0.0,
            needs_manual_grading: false,
        },
    }
}
