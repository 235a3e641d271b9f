//! Answer-key text serialization.

use std::fmt::Write as _;

use crate::model::{QuizDocument, StudentAnswerSet};

/// Serialize a student's answer set as an answer-key file.
pub fn serialize(answers: &StudentAnswerSet) -> String {
    serialize_quiz(&answers.answers)
}

/// Serialize a quiz's marked answers.
///
/// Each question becomes its header line, one line per selected option
/// (repeats included), and a blank separator. A question with nothing
/// selected still gets an empty answer line.
pub fn serialize_quiz(quiz: &QuizDocument) -> String {
    let mut out = String::new();
    for number in 1..=quiz.len() {
        let Some(question) = quiz.get(number) else {
            continue;
        };
        let _ = writeln!(out, "{question}");
        let selected: Vec<&str> = question.selected_options().collect();
        out.push_str(&selected.join("\n"));
        out.push_str("\n\n");
    }
    out
}
