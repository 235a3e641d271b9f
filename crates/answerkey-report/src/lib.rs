//! answerkey-report — Output for generated answer keys.
//!
//! Writes one answer file per student and packs them into a zip archive.

pub mod archive;
pub mod files;

pub use archive::write_archive;
pub use files::{answer_file_name, write_answer_files, AnswerFile, SUMMARY_FILE};
