//! Short-text grader: normalized equality with an opt-in pattern mode.
//!
//! Authors can wrap the canonical answer in `/.../` to have it treated as a
//! case-insensitive regular expression instead of a literal.

use crate::types::{AnswerValue, GradingResult};
use regex::RegexBuilder;
use tracing::warn;

/// Correct iff the normalized answer equals the normalized canonical value,
/// or matches it when the canonical value is written as a `/pattern/`.
///
/// Both sides are trimmed and lower-cased first. A delimited pattern that
/// fails to compile falls back to literal equality against the delimited
/// text; grading never fails on a malformed pattern.
pub fn grade(correct: &AnswerValue, answer: &AnswerValue, points: f64) -> GradingResult {
    let expected = normalize(&correct.canonical_string());
    let submitted = normalize(&answer.canonical_string());

    let is_correct = match pattern_body(&expected) {
        Some(pattern) => match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => regex.is_match(&submitted),
            Err(_) => {
                warn!(
                    "invalid short-text answer pattern {:?}, comparing literally",
                    expected
                );
                expected == submitted
            }
        },
        None => expected == submitted,
    };

    super::all_or_nothing(is_correct, points)
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The interior of a `/.../`-delimited canonical value, if it is one.
fn pattern_body(expected: &str) -> Option<&str> {
    if expected.len() >= 2 && expected.starts_with('/') && expected.ends_with('/') {
        Some(&expected[1..expected.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> AnswerValue {
        AnswerValue::Text(s.to_string())
    }

    #[test]
    fn test_exact_match_after_trim_and_case_fold() {
        let result = grade(&text("Paris"), &text("  paris "), 3.0);
        assert_eq!(result.is_correct, Some(true));
        assert_eq!(result.points_awarded, 3.0);
    }

    #[test]
    fn test_plain_mismatch_awards_zero() {
        let result = grade(&text("Paris"), &text("London"), 3.0);
        assert_eq!(result.is_correct, Some(false));
        assert_eq!(result.points_awarded, 0.0);
    }

    #[test]
    fn test_delimited_pattern_matches_case_insensitively() {
        let result = grade(&text("/^cat.*$/"), &text("Catnip"), 3.0);
        assert_eq!(result.is_correct, Some(true));
    }

    #[test]
    fn test_delimited_pattern_rejects_non_match() {
        let result = grade(&text("/^cat.*$/"), &text("dog"), 3.0);
        assert_eq!(result.is_correct, Some(false));
    }

    #[test]
    fn test_invalid_delimited_pattern_falls_back_to_literal() {
        // "/[abc/" does not compile; the submitted answer must then equal the
        // delimited text itself.
        let miss = grade(&text("/[abc/"), &text("abc"), 3.0);
        assert_eq!(miss.is_correct, Some(false));

        let hit = grade(&text("/[abc/"), &text("/[abc/"), 3.0);
        assert_eq!(hit.is_correct, Some(true));
    }

    #[test]
    fn test_unterminated_pattern_is_a_literal() {
        // No trailing slash, so this is never treated as a pattern.
        let miss = grade(&text("/[unterminated"), &text("anything"), 3.0);
        assert_eq!(miss.is_correct, Some(false));

        let hit = grade(&text("/[unterminated"), &text("/[unterminated"), 3.0);
        assert_eq!(hit.is_correct, Some(true));
    }

    #[test]
    fn test_lone_slash_is_a_literal() {
        let result = grade(&text("/"), &text("/"), 3.0);
        assert_eq!(result.is_correct, Some(true));
    }
}
