//! # Types Module
//!
//! Core value types for the grading engine. Raw answer data arrives from the
//! datastore as JSON; [`AnswerValue`] is the typed form it is converted into
//! at that boundary, and the helpers on it implement the per-type coercion
//! rules the graders dispatch on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The closed set of question types the engine understands.
///
/// Tags match the surrounding system's stored type strings. `Canvas`
/// submissions are hand-drawn and always manually graded; the engine treats
/// them exactly like `Essay`. Unrecognized tags map to `Unknown` rather than
/// failing the whole attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    McqSingle,
    McqMulti,
    TrueFalse,
    Numeric,
    ShortText,
    Essay,
    Canvas,
    Unknown,
}

impl QuestionType {
    /// Map a stored type tag to its variant.
    ///
    /// Total: an unrecognized tag becomes [`QuestionType::Unknown`], which
    /// grades as incorrect instead of rejecting the attempt.
    pub fn from_tag(tag: &str) -> QuestionType {
        serde_json::from_value(serde_json::Value::String(tag.to_string()))
            .unwrap_or(QuestionType::Unknown)
    }
}

/// A canonical or submitted answer value.
///
/// Mirrors the JSON shapes the question bank stores per question type:
/// strings, numbers, booleans, lists of option identifiers, or null. `Null`
/// doubles as "no answer submitted".
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Choices(Vec<String>),
}

impl AnswerValue {
    /// Convert a raw stored JSON value into its typed form.
    ///
    /// List entries are coerced to their canonical string form, so `[1, "2"]`
    /// becomes the choices `["1", "2"]`. Objects have no meaning to any
    /// grader and normalize to their JSON text.
    pub fn from_json(value: &serde_json::Value) -> AnswerValue {
        use serde_json::Value;

        match value {
            Value::Null => AnswerValue::Null,
            Value::Bool(b) => AnswerValue::Bool(*b),
            Value::Number(n) => AnswerValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => AnswerValue::Text(s.clone()),
            Value::Array(items) => AnswerValue::Choices(
                items
                    .iter()
                    .map(|item| AnswerValue::from_json(item).canonical_string())
                    .collect(),
            ),
            Value::Object(_) => AnswerValue::Text(value.to_string()),
        }
    }

    /// True when no answer value is present.
    pub fn is_null(&self) -> bool {
        matches!(self, AnswerValue::Null)
    }

    /// Canonical string form used for option-identifier comparison.
    ///
    /// Numeric-looking identifiers and string identifiers compare equal:
    /// `3` and `"3"` both stringify to `"3"`.
    pub fn canonical_string(&self) -> String {
        match self {
            AnswerValue::Null => "null".to_string(),
            AnswerValue::Bool(b) => b.to_string(),
            AnswerValue::Number(n) => n.to_string(),
            AnswerValue::Text(s) => s.clone(),
            AnswerValue::Choices(items) => items.join(","),
        }
    }

    /// Loose boolean coercion: the boolean `true` or the string `"true"` are
    /// true, every other value is false.
    pub fn as_bool_loose(&self) -> bool {
        match self {
            AnswerValue::Bool(b) => *b,
            AnswerValue::Text(s) => s == "true",
            _ => false,
        }
    }

    /// Parse the value as a floating-point number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Interpret the value as a set of option identifiers.
    ///
    /// Duplicates collapse; any non-list value is the empty set.
    pub fn as_choice_set(&self) -> BTreeSet<String> {
        match self {
            AnswerValue::Choices(items) => items.iter().cloned().collect(),
            _ => BTreeSet::new(),
        }
    }
}

/// Everything needed to grade a single answer.
#[derive(Debug, Clone)]
pub struct GradingInput {
    pub question_type: QuestionType,
    /// The canonical correct answer from the question bank.
    pub correct: AnswerValue,
    /// The student's submitted answer; `Null` when nothing was submitted.
    pub answer: AnswerValue,
    /// Maximum points for this question.
    pub points: f64,
    /// Allowed absolute numeric deviation; only meaningful for `Numeric`.
    pub tolerance: Option<f64>,
}

/// The outcome of grading a single answer.
///
/// `is_correct` is `None` when correctness cannot be determined
/// algorithmically (essay and canvas answers awaiting manual review).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingResult {
    pub is_correct: Option<bool>,
    pub points_awarded: f64,
    pub needs_manual_grading: bool,
}

/// One attempt answer: a grading input tagged with its question.
#[derive(Debug, Clone)]
pub struct AttemptAnswer {
    pub question_id: i64,
    pub input: GradingInput,
}
