pub mod exam_config;
pub mod shuffle;
