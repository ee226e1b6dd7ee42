//! Exam-level configuration consumed by the grading and assembly pipeline.
//!
//! Mirrors the JSON document the surrounding system stores per exam: shuffle
//! flags applied at attempt-assembly time and marking options applied when a
//! report is generated. Every field has a default so a partial or empty
//! document still deserializes.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct ShuffleOptions {
    /// Randomize question order per attempt.
    #[serde(default = "default_shuffle_questions")]
    pub shuffle_questions: bool,

    /// Randomize option order per question.
    #[serde(default = "default_shuffle_options")]
    pub shuffle_options: bool,
}

impl Default for ShuffleOptions {
    fn default() -> Self {
        Self {
            shuffle_questions: default_shuffle_questions(),
            shuffle_options: default_shuffle_options(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct MarkingOptions {
    /// Minimum percentage required to pass (0–100).
    #[serde(default = "default_pass_mark")]
    pub pass_mark: u32,
}

impl Default for MarkingOptions {
    fn default() -> Self {
        Self {
            pass_mark: default_pass_mark(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExamConfig {
    #[serde(default)]
    pub shuffle: ShuffleOptions,

    #[serde(default)]
    pub marking: MarkingOptions,
}

impl ExamConfig {
    pub fn default_config() -> Self {
        ExamConfig {
            shuffle: ShuffleOptions::default(),
            marking: MarkingOptions::default(),
        }
    }

    /// Parse a config from its JSON document.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|_| "Invalid exam config JSON format".to_string())
    }

    /// Load a config file from disk.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        use std::io::ErrorKind;

        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => "Exam config file not found".to_string(),
            ErrorKind::PermissionDenied => "Permission denied reading exam config".to_string(),
            _ => format!("Failed to read exam config ({})", e.kind()),
        })?;
        Self::from_json(&raw)
    }
}

fn default_shuffle_questions() -> bool {
    false
}

fn default_shuffle_options() -> bool {
    false
}

fn default_pass_mark() -> u32 {
    50
}
