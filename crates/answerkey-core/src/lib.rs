//! answerkey-core — Quiz parsing and per-student error injection.
//!
//! This crate defines the quiz data model, the lenient text parsers for
//! quizzes and rosters, and the generator that turns one quiz into a
//! differently-wrong answer key for every student.

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod report;
pub mod sampler;
pub mod writer;

pub use error::QuizError;
pub use model::{QuizDocument, Question, Roster, StudentAnswerSet};
