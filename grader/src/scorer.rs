//! # Scorer Module
//!
//! Attempt-level aggregation: grades every answer of an attempt and folds the
//! results into a total/max score pair plus a pending-manual-grading flag.

use crate::graders::grade_answer;
use crate::types::{AttemptAnswer, GradingResult};

/// Round a float to two decimal places.
#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// A graded answer, tagged with its question for downstream display.
#[derive(Debug, Clone)]
pub struct AnswerGrade {
    pub question_id: i64,
    /// Maximum points for this question, passed through from the input.
    pub points: f64,
    pub result: GradingResult,
}

/// The aggregate outcome of grading one attempt.
#[derive(Debug, Clone)]
pub struct AttemptGrade {
    pub total_score: f64,
    pub max_score: f64,
    /// True when any answer awaits manual review.
    pub needs_manual_grading: bool,
    /// Per-answer results in submission order.
    pub answers: Vec<AnswerGrade>,
}

/// Grade every answer of an attempt and fold the results.
///
/// `total_score` is the sum of awarded points and `max_score` the sum of
/// possible points; both accumulations are commutative, so input order only
/// affects the order of `answers`. An attempt with no answers grades to zero
/// across the board. Point values are passed through unvalidated.
pub fn grade_attempt(answers: &[AttemptAnswer]) -> AttemptGrade {
    let mut total_score = 0.0;
    let mut max_score = 0.0;
    let mut needs_manual_grading = false;
    let mut graded = Vec::with_capacity(answers.len());

    for entry in answers {
        let result = grade_answer(&entry.input);
        total_score += result.points_awarded;
        max_score += entry.input.points;
        needs_manual_grading |= result.needs_manual_grading;
        graded.push(AnswerGrade {
            question_id: entry.question_id,
            points: entry.input.points,
            result,
        });
    }

    AttemptGrade {
        total_score: round2(total_score),
        max_score: round2(max_score),
        needs_manual_grading,
        answers: graded,
    }
}

/// Integer percentage (0–100) of `earned` over `possible`.
///
/// A non-positive `possible` yields 0 rather than dividing by zero.
pub fn compute_percentage(earned: f64, possible: f64) -> u32 {
    if possible <= 0.0 {
        return 0;
    }
    ((earned / possible) * 100.0).round() as u32
}
