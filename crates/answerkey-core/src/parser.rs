//! Plain-text quiz and roster parsers.
//!
//! Both formats are line oriented and parsed leniently: unrecognised lines
//! are either attached to the current question or ignored, never rejected.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{QuizDocument, Question, Roster};

/// Marker prefix for a correct option line.
pub const CORRECT_MARKER: char = '+';

/// Question header: digits (any script), a dot, one whitespace character.
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Split text into lines on `\r\n`, `\n` or a bare `\r`.
///
/// A trailing terminator does not produce an extra empty line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(i) => {
                let line = &rest[..i];
                let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Parse quiz text into a [`QuizDocument`].
///
/// Questions are numbered by the order their headers appear; the digits
/// written in the header are ignored.
pub fn parse_quiz_str(content: &str) -> QuizDocument {
    let mut questions: Vec<Question> = Vec::new();
    let mut current: Option<Question> = None;

    for raw in split_lines(content) {
        let line = raw.trim();

        if let Some(header) = RE_HEADER.find(line) {
            let text = &line[header.end()..];
            if let Some(done) = current.take() {
                questions.push(done);
            }
            current = Some(Question::new(questions.len() + 1, text));
            continue;
        }

        let Some(question) = current.as_mut() else {
            continue;
        };

        if let Some(rest) = line.strip_prefix(CORRECT_MARKER) {
            question.push_option(rest.trim(), true);
        } else if !line.is_empty() {
            question.push_option(line, false);
        }
    }

    if let Some(done) = current {
        questions.push(done);
    }

    tracing::debug!(questions = questions.len(), "parsed quiz");
    QuizDocument::from_questions(questions)
}

/// Read and parse a quiz file.
pub fn parse_quiz(path: &Path) -> Result<QuizDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;
    Ok(parse_quiz_str(&content))
}

/// Parse roster text: one trimmed identifier per line, blanks kept.
pub fn parse_roster_str(content: &str) -> Roster {
    let roster: Roster = split_lines(content).map(str::trim).collect();
    tracing::debug!(students = roster.len(), "parsed roster");
    roster
}

/// Read and parse a roster file.
pub fn parse_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;
    Ok(parse_roster_str(&content))
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a parsed quiz for questions that generation cannot handle well.
pub fn validate_quiz(quiz: &QuizDocument) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "no question headers found (expected lines like \"1. Question\")".into(),
        });
    }

    for q in quiz {
        let message = if q.options.is_empty() {
            "question has no options"
        } else if q.correct_indices.is_empty() {
            "question has no correct option (mark one with '+')"
        } else if q.wrong_indices().is_empty() {
            "every option is correct, errors can never be injected here"
        } else {
            continue;
        };
        warnings.push(ValidationWarning {
            question: Some(q.number),
            message: message.into(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_QUIZ: &str = "\
1. What is 2+2?
3
+4
5
2. Pick all primes
+2
+3
4
";

    #[test]
    fn parse_sample_quiz() {
        let quiz = parse_quiz_str(SAMPLE_QUIZ);
        assert_eq!(quiz.len(), 2);

        let q1 = quiz.get(1).unwrap();
        assert_eq!(q1.number, 1);
        assert_eq!(q1.text, "What is 2+2?");
        assert_eq!(q1.options, vec!["3", "4", "5"]);
        assert_eq!(q1.correct_indices, vec![1]);

        let q2 = quiz.get(2).unwrap();
        assert_eq!(q2.text, "Pick all primes");
        assert_eq!(q2.options, vec!["2", "3", "4"]);
        assert_eq!(q2.correct_indices, vec![0, 1]);
    }

    #[test]
    fn parse_is_idempotent() {
        assert_eq!(parse_quiz_str(SAMPLE_QUIZ), parse_quiz_str(SAMPLE_QUIZ));
    }

    #[test]
    fn header_digits_are_renumbered() {
        let quiz = parse_quiz_str("7. First\n+a\n\n42. Second\n+b\n");
        let numbers: Vec<usize> = quiz.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(quiz.get(2).unwrap().text, "Second");
    }

    #[test]
    fn lines_before_first_header_are_ignored() {
        let quiz = parse_quiz_str("Title of the quiz\n+stray\n\n1. Only\n+yes\nno\n");
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz.get(1).unwrap().options, vec!["yes", "no"]);
    }

    #[test]
    fn blank_and_padded_lines() {
        let quiz = parse_quiz_str("  1. Padded  \r\n\r\n   +  right  \r\n\twrong\t\r\n");
        let q = quiz.get(1).unwrap();
        assert_eq!(q.text, "Padded");
        assert_eq!(q.options, vec!["right", "wrong"]);
        assert_eq!(q.correct_indices, vec![0]);
    }

    #[test]
    fn header_requires_dot_and_whitespace() {
        let quiz = parse_quiz_str("1. Q\n2.5\n3.\n10)x\n");
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz.get(1).unwrap().options, vec!["2.5", "3.", "10)x"]);
    }

    #[test]
    fn empty_questions_are_kept() {
        let quiz = parse_quiz_str("1. No options\n2. No correct\na\nb\n");
        assert_eq!(quiz.len(), 2);
        assert!(quiz.get(1).unwrap().options.is_empty());
        assert!(quiz.get(2).unwrap().correct_indices.is_empty());
    }

    #[test]
    fn no_headers_yields_empty_document() {
        assert!(parse_quiz_str("just\nsome\ntext\n").is_empty());
        assert!(parse_quiz_str("").is_empty());
    }

    #[test]
    fn roster_keeps_order_duplicates_and_blanks() {
        let roster = parse_roster_str("alice\n  bob \n\nalice\r\n");
        assert_eq!(roster.students, vec!["alice", "bob", "", "alice"]);
    }

    #[test]
    fn unicode_digit_headers() {
        let quiz = parse_quiz_str("\u{FF11}. Fullwidth one\n+a\nb\n\u{0661}. Arabic one\n+c\nd\n");
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.get(1).unwrap().text, "Fullwidth one");
        assert_eq!(quiz.get(2).unwrap().text, "Arabic one");
        assert_eq!(quiz.get(2).unwrap().correct_indices, vec![0]);
    }

    #[test]
    fn header_keeps_text_after_first_whitespace() {
        let quiz = parse_quiz_str("1.\tTabbed\n2.  Two spaces\n");
        assert_eq!(quiz.get(1).unwrap().text, "Tabbed");
        assert_eq!(quiz.get(2).unwrap().text, " Two spaces");
    }

    #[test]
    fn quiz_with_bare_carriage_returns() {
        let quiz = parse_quiz_str("1. Q\r+a\rb\r2. R\r+c\rd\r");
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.get(1).unwrap().text, "Q");
        assert_eq!(quiz.get(1).unwrap().options, vec!["a", "b"]);
        assert_eq!(quiz.get(2).unwrap().correct_indices, vec![0]);
    }

    #[test]
    fn roster_with_mixed_line_endings() {
        let roster = parse_roster_str("alice\rbob\r\ncarol\n\rdave");
        assert_eq!(roster.students, vec!["alice", "bob", "carol", "", "dave"]);
    }

    #[test]
    fn split_lines_terminators() {
        assert_eq!(split_lines("a\r\nb\rc\n").collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\n\n").collect::<Vec<_>>(), vec!["a", ""]);
        assert_eq!(split_lines("\r").collect::<Vec<_>>(), vec![""]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn roster_empty_text() {
        assert!(parse_roster_str("").is_empty());
    }

    #[test]
    fn validate_flags_degenerate_questions() {
        let quiz = parse_quiz_str("1. Empty\n2. None right\na\n3. All right\n+a\n+b\n4. Fine\n+a\nb\n");
        let warnings = validate_quiz(&quiz);
        let flagged: Vec<Option<usize>> = warnings.iter().map(|w| w.question).collect();
        assert_eq!(flagged, vec![Some(1), Some(2), Some(3)]);
        assert!(warnings[2].message.contains("every option is correct"));
    }

    #[test]
    fn validate_flags_empty_quiz() {
        let warnings = validate_quiz(&QuizDocument::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].question.is_none());
    }

    #[test]
    fn parse_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let quiz_path = dir.path().join("quiz.txt");
        let roster_path = dir.path().join("roster.txt");
        std::fs::write(&quiz_path, SAMPLE_QUIZ).unwrap();
        std::fs::write(&roster_path, "alice\nbob\n").unwrap();

        assert_eq!(parse_quiz(&quiz_path).unwrap().len(), 2);
        assert_eq!(parse_roster(&roster_path).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = parse_quiz(Path::new("definitely-missing-quiz.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("definitely-missing-quiz.txt"));
    }
}
