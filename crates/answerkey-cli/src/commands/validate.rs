//! The `answerkey validate` command.

use std::path::PathBuf;

use anyhow::Result;

use answerkey_core::parser;

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let quiz = parser::parse_quiz(&quiz_path)?;

    println!("Quiz: {} ({} questions)", quiz_path.display(), quiz.len());
    println!();

    for question in &quiz {
        println!("Question {}: {}", question.number, question.text);
        println!("Options:");
        for (i, option) in question.options.iter().enumerate() {
            let marker = if question.is_correct(i) { " ✓" } else { "" };
            println!("  {}. {option}{marker}", i + 1);
        }
        println!();
    }

    let warnings = parser::validate_quiz(&quiz);
    for w in &warnings {
        let prefix = w
            .question
            .map(|n| format!("  [Q{n}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Quiz is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
