//! # Grader Library
//!
//! This crate provides the core logic for deterministic grading of exam
//! attempts. It turns a student's raw submitted answers into correctness
//! judgments and point totals, aggregates them into an attempt report, and
//! computes the shuffled exam layout used when an attempt starts.
//!
//! ## Key Concepts
//! - **GradingJob**: the entry point for grading one submitted attempt.
//! - **Graders**: per-question-type grading rules (single/multi choice,
//!   true/false, numeric, short text); essay and canvas answers are routed
//!   to manual review instead of being auto-scored.
//! - **Reports**: structured output with per-answer results, totals, and a
//!   pass/fail determination.
//! - **Assembly**: deterministic per-attempt question/option ordering.
//!
//! Grading is total by design: malformed inputs grade as incorrect rather
//! than raising, so a submission request can never be crashed by bad answer
//! data.

pub mod assembly;
pub mod graders;
pub mod report;
pub mod scorer;
pub mod types;

pub use graders::grade_answer;
pub use scorer::grade_attempt;

use crate::report::{generate_attempt_report, AttemptReportResponse};
use crate::types::AttemptAnswer;
use chrono::Utc;
use util::exam_config::ExamConfig;

/// Represents the grading of a single submitted attempt.
///
/// Encapsulates the per-answer grading inputs plus the exam configuration
/// that applies at report time. The caller collects each question's type,
/// canonical answer, submitted answer, and point value from storage, runs
/// the job, and persists the returned report.
///
/// # Fields
/// - `attempt_id`: identifier carried through onto the report.
/// - `answers`: grading inputs in submission order.
/// - `config`: exam configuration (pass mark).
pub struct GradingJob {
    attempt_id: String,
    answers: Vec<AttemptAnswer>,
    config: ExamConfig,
}

impl GradingJob {
    /// Create a grading job for one attempt.
    ///
    /// # Arguments
    /// * `attempt_id` - Identifier carried through onto the report.
    /// * `answers` - Grading inputs in submission order.
    pub fn new(attempt_id: impl Into<String>, answers: Vec<AttemptAnswer>) -> Self {
        Self {
            attempt_id: attempt_id.into(),
            answers,
            config: ExamConfig::default_config(),
        }
    }

    /// Use a specific exam configuration for this job.
    pub fn with_config(mut self, config: ExamConfig) -> Self {
        self.config = config;
        self
    }

    /// Grade the attempt and build its report.
    ///
    /// Grading is total, so there is no error path: malformed answers grade
    /// as incorrect and essay/canvas answers surface through the report's
    /// `needs_manual_grading` flag.
    pub fn grade(self) -> AttemptReportResponse {
        let grade = scorer::grade_attempt(&self.answers);
        let report = generate_attempt_report(
            self.attempt_id,
            Utc::now().to_rfc3339(),
            grade,
            self.config.marking.pass_mark,
        );
        report.into()
    }
}
