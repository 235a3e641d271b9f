//! Core data model types for answerkey.
//!
//! A quiz is parsed once into a [`QuizDocument`], the roster once into a
//! [`Roster`]; both are then shared read-only while every student gets an
//! independent [`StudentAnswerSet`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position of the question in the quiz.
    pub number: usize,
    /// Question text, without the numeric header prefix.
    pub text: String,
    /// Answer options in source order.
    #[serde(default)]
    pub options: Vec<String>,
    /// Indices into `options` that are marked correct.
    ///
    /// For a corrupted student copy this may contain repeated indices.
    #[serde(default)]
    pub correct_indices: Vec<usize>,
}

impl Question {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            options: Vec::new(),
            correct_indices: Vec::new(),
        }
    }

    /// Append an option, marking it correct if requested.
    pub fn push_option(&mut self, option: impl Into<String>, correct: bool) {
        self.options.push(option.into());
        if correct {
            self.correct_indices.push(self.options.len() - 1);
        }
    }

    /// Option indices that are not marked correct, in ascending order.
    pub fn wrong_indices(&self) -> Vec<usize> {
        (0..self.options.len())
            .filter(|i| !self.correct_indices.contains(i))
            .collect()
    }

    /// Whether option `index` is marked correct.
    pub fn is_correct(&self, index: usize) -> bool {
        self.correct_indices.contains(&index)
    }

    /// The options selected by `correct_indices`, in index order.
    ///
    /// Indices outside the option range are skipped.
    pub fn selected_options(&self) -> impl Iterator<Item = &str> {
        self.correct_indices
            .iter()
            .filter_map(|&i| self.options.get(i).map(String::as_str))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.text)
    }
}

/// A parsed quiz: questions keyed by their dense 1-based number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDocument {
    questions: Vec<Question>,
}

impl QuizDocument {
    /// Build a document from questions already numbered `1..=n` in order.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        debug_assert!(questions
            .iter()
            .enumerate()
            .all(|(i, q)| q.number == i + 1));
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&Question> {
        number.checked_sub(1).and_then(|i| self.questions.get(i))
    }

    /// Mutable lookup by 1-based number.
    pub fn get_mut(&mut self, number: usize) -> Option<&mut Question> {
        number
            .checked_sub(1)
            .and_then(move |i| self.questions.get_mut(i))
    }

    /// Questions in ascending number order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuizDocument {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// Ordered student identifiers, duplicates and empty lines included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub students: Vec<String>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.students.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// One student's synthesized answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAnswerSet {
    /// Roster identifier of the student.
    pub student_id: String,
    /// The student's own copy of the quiz, with corrupted questions rewritten.
    pub answers: QuizDocument,
    /// Number of errors drawn for this student before any were skipped.
    pub error_target: u32,
    /// Number of questions actually corrupted.
    pub error_count: u32,
    /// Numbers of the corrupted questions, in the order they were sampled.
    pub error_questions: Vec<usize>,
}

impl StudentAnswerSet {
    /// Number of questions left with their original correct answers.
    pub fn correct_count(&self) -> usize {
        self.answers.len().saturating_sub(self.error_count as usize)
    }
}
