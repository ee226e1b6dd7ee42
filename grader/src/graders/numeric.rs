//! Numeric grader: tolerance-window comparison, awarded on an all-or-nothing basis.

use crate::types::{AnswerValue, GradingResult};

/// Correct iff both sides parse as numbers and the submitted value is within
/// `tolerance` of the correct value.
///
/// A tolerance of zero requires an exact match. An unparseable value on
/// either side grades as incorrect rather than failing.
pub fn grade(
    correct: &AnswerValue,
    answer: &AnswerValue,
    points: f64,
    tolerance: f64,
) -> GradingResult {
    let is_correct = match (correct.as_number(), answer.as_number()) {
        (Some(expected), Some(submitted)) => (expected - submitted).abs() <= tolerance,
        _ => false,
    };
    super::all_or_nothing(is_correct, points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_tolerance_is_correct() {
        let result = grade(
            &AnswerValue::Number(10.0),
            &AnswerValue::Number(10.4),
            6.0,
            0.5,
        );
        assert_eq!(result.is_correct, Some(true));
        assert_eq!(result.points_awarded, 6.0);
    }

    #[test]
    fn test_outside_tolerance_is_incorrect() {
        let result = grade(
            &AnswerValue::Number(10.0),
            &AnswerValue::Number(10.6),
            6.0,
            0.5,
        );
        assert_eq!(result.is_correct, Some(false));
        assert_eq!(result.points_awarded, 0.0);
    }

    #[test]
    fn test_zero_tolerance_requires_exact_match() {
        let exact = grade(
            &AnswerValue::Number(10.0),
            &AnswerValue::Text("10".to_string()),
            6.0,
            0.0,
        );
        assert_eq!(exact.is_correct, Some(true));

        let off = grade(
            &AnswerValue::Number(10.0),
            &AnswerValue::Number(10.01),
            6.0,
            0.0,
        );
        assert_eq!(off.is_correct, Some(false));
    }

    #[test]
    fn test_unparseable_answer_is_incorrect() {
        let result = grade(
            &AnswerValue::Number(10.0),
            &AnswerValue::Text("ten".to_string()),
            6.0,
            0.5,
        );
        assert_eq!(result.is_correct, Some(false));
        assert_eq!(result.points_awarded, 0.0);
    }

    #[test]
    fn test_unparseable_correct_value_is_incorrect() {
        let result = grade(
            &AnswerValue::Text("n/a".to_string()),
            &AnswerValue::Number(10.0),
            6.0,
            0.5,
        );
        assert_eq!(result.is_correct, Some(false));
    }

    #[test]
    fn test_text_numbers_parse_after_trimming() {
        let result = grade(
            &AnswerValue::Text("10.5".to_string()),
            &AnswerValue::Text("  10.5 ".to_string()),
            6.0,
            0.0,
        );
        assert_eq!(result.is_correct, Some(true));
    }
}
