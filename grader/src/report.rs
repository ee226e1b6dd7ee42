//! # Attempt Report Module
//!
//! This module defines the data structures and response envelope for
//! returning grading results to the submission handler. It provides a
//! standardized, serializable format for reporting per-answer results,
//! overall score, and the pending-manual-grading state of an attempt.
//!
//! The engine itself persists nothing; the caller stores the report back
//! onto the attempt record.

use crate::scorer::{compute_percentage, AttemptGrade};
use serde::Serialize;

/// Earned/total score pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Score {
    pub earned: f64,
    pub total: f64,
}

/// One graded answer as presented in the report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportAnswer {
    pub question_id: i64,
    /// `None` while the answer awaits manual grading.
    pub is_correct: Option<bool>,
    pub awarded: f64,
    pub possible: f64,
    pub needs_manual_grading: bool,
}

/// The full grading report for one attempt.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptReport {
    pub attempt_id: String,
    pub graded_at: String,
    pub score: Score,
    /// Integer percentage (0–100) of earned over total.
    pub percentage: u32,
    /// Whether the percentage meets the configured pass mark. Provisional
    /// while any answer still awaits manual grading.
    pub passed: bool,
    pub needs_manual_grading: bool,
    /// Per-answer entries in submission order.
    pub answers: Vec<ReportAnswer>,
}

/// The response envelope for grading results.
///
/// Wraps an [`AttemptReport`] with top-level `success` and `message` fields
/// for consistency with the surrounding system's API responses.
#[derive(Debug, Serialize)]
pub struct AttemptReportResponse {
    success: bool,
    message: String,
    pub data: AttemptReport,
}

impl From<AttemptReport> for AttemptReportResponse {
    fn from(report: AttemptReport) -> Self {
        AttemptReportResponse {
            success: true,
            message: "Grading complete.".to_string(),
            data: report,
        }
    }
}

/// Assemble the report for a graded attempt.
pub fn generate_attempt_report(
    attempt_id: String,
    graded_at: String,
    grade: AttemptGrade,
    pass_mark: u32,
) -> AttemptReport {
    let percentage = compute_percentage(grade.total_score, grade.max_score);
    let answers = grade
        .answers
        .into_iter()
        .map(|a| ReportAnswer {
            question_id: a.question_id,
            is_correct: a.result.is_correct,
            awarded: a.result.points_awarded,
            possible: a.points,
            needs_manual_grading: a.result.needs_manual_grading,
        })
        .collect();

    AttemptReport {
        attempt_id,
        graded_at,
        score: Score {
            earned: grade.total_score,
            total: grade.max_score,
        },
        percentage,
        passed: percentage >= pass_mark,
        needs_manual_grading: grade.needs_manual_grading,
        answers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::AnswerGrade;
    use crate::types::GradingResult;
    use serde_json::Value;

    fn grade_fixture() -> AttemptGrade {
        AttemptGrade {
            total_score: 7.0,
            max_score: 10.0,
            needs_manual_grading: false,
            answers: vec![
                AnswerGrade {
                    question_id: 1,
                    points: 2.0,
                    result: GradingResult {
                        is_correct: Some(true),
                        points_awarded: 2.0,
                        needs_manual_grading: false,
                    },
                },
                AnswerGrade {
                    question_id: 2,
                    points: 8.0,
                    result: GradingResult {
                        is_correct: Some(false),
                        points_awarded: 5.0,
                        needs_manual_grading: false,
                    },
                },
            ],
        }
    }

    #[test]
    fn test_report_fields() {
        let report = generate_attempt_report(
            "attempt-9".to_string(),
            "2025-01-01T00:00:00+00:00".to_string(),
            grade_fixture(),
            50,
        );
        assert_eq!(report.attempt_id, "attempt-9");
        assert_eq!(report.score.earned, 7.0);
        assert_eq!(report.score.total, 10.0);
        assert_eq!(report.percentage, 70);
        assert!(report.passed);
        assert_eq!(report.answers.len(), 2);
        assert_eq!(report.answers[0].question_id, 1);
        assert_eq!(report.answers[1].awarded, 5.0);
    }

    #[test]
    fn test_pass_mark_boundary() {
        let passed = generate_attempt_report(
            "a".to_string(),
            "t".to_string(),
            grade_fixture(),
            70,
        );
        assert!(passed.passed);

        let failed = generate_attempt_report(
            "a".to_string(),
            "t".to_string(),
            grade_fixture(),
            71,
        );
        assert!(!failed.passed);
    }

    #[test]
    fn test_response_envelope_serialization() {
        let report = generate_attempt_report(
            "attempt-9".to_string(),
            "2025-01-01T00:00:00+00:00".to_string(),
            grade_fixture(),
            50,
        );
        let response: AttemptReportResponse = report.into();
        let value: Value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Grading complete.");
        assert_eq!(value["data"]["attempt_id"], "attempt-9");
        assert_eq!(value["data"]["score"]["earned"], 7.0);
        assert_eq!(value["data"]["score"]["total"], 10.0);
        assert_eq!(value["data"]["percentage"], 70);
        assert_eq!(value["data"]["answers"][0]["is_correct"], true);
        assert_eq!(value["data"]["answers"][1]["awarded"], 5.0);
    }

    #[test]
    fn test_manual_grading_serializes_as_null_correctness() {
        let grade = AttemptGrade {
            total_score: 0.0,
            max_score: 4.0,
            needs_manual_grading: true,
            answers: vec![AnswerGrade {
                question_id: 7,
                points: 4.0,
                result: GradingResult {
                    is_correct: None,
                    points_awarded: 0.0,
                    needs_manual_grading: true,
                },
            }],
        };
        let report = generate_attempt_report("a".to_string(), "t".to_string(), grade, 50);
        let value: Value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["answers"][0]["is_correct"], Value::Null);
        assert_eq!(value["needs_manual_grading"], true);
    }

    #[test]
    fn test_empty_attempt_report() {
        let grade = AttemptGrade {
            total_score: 0.0,
            max_score: 0.0,
            needs_manual_grading: false,
            answers: vec![],
        };
        let report = generate_attempt_report("empty".to_string(), "t".to_string(), grade, 50);
        assert_eq!(report.percentage, 0);
        assert!(!report.passed);
        assert!(report.answers.is_empty());
    }
}
