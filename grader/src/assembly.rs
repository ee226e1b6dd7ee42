//! # Exam Assembly Module
//!
//! Computes the question and option order a student sees when an attempt
//! starts. With a seed (the attempt id, or one derived from student and exam
//! ids via [`util::shuffle::derive_seed`]) the layout is stable across page
//! reloads of the same attempt.

use serde::Serialize;
use util::exam_config::ExamConfig;
use util::shuffle::{derive_seed, shuffle};

/// One authored question with its option identifiers in authored order.
#[derive(Debug, Clone)]
pub struct ExamQuestion {
    pub question_id: i64,
    /// Option identifiers; empty for question types without options.
    pub options: Vec<String>,
}

/// The ordering of questions and options presented to one attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ExamLayout {
    pub questions: Vec<LayoutQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutQuestion {
    pub question_id: i64,
    pub options: Vec<String>,
}

/// Build the layout for one attempt.
///
/// Question order is shuffled when `shuffle_questions` is set; each
/// question's options are shuffled independently when `shuffle_options` is
/// set, seeded per question off the attempt seed and question id so a
/// question's option order does not depend on its position in the exam.
/// With both flags off the authored order is preserved. Always succeeds.
pub fn assemble_exam(
    questions: &[ExamQuestion],
    config: &ExamConfig,
    seed: Option<u64>,
) -> ExamLayout {
    let ordered: Vec<ExamQuestion> = if config.shuffle.shuffle_questions {
        shuffle(questions, seed)
    } else {
        questions.to_vec()
    };

    let questions = ordered
        .into_iter()
        .map(|question| {
            let options = if config.shuffle.shuffle_options {
                let option_seed = seed.map(|s| derive_seed(s as i64, question.question_id));
                shuffle(&question.options, option_seed)
            } else {
                question.options
            };
            LayoutQuestion {
                question_id: question.question_id,
                options,
            }
        })
        .collect();

    ExamLayout { questions }
}
