//! The `answerkey generate` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use answerkey_core::config::load_config_from;
use answerkey_core::error::parse_max_errors;
use answerkey_core::generator::{AnswerGenerator, ProgressReporter};
use answerkey_core::model::StudentAnswerSet;
use answerkey_core::parser;
use answerkey_core::report::GenerationReport;
use answerkey_report::{write_answer_files, write_archive, SUMMARY_FILE};

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_student_complete(&self, answers: &StudentAnswerSet) {
        eprintln!(
            "  Done: {} ({} of {} targeted errors injected)",
            answers.student_id, answers.error_count, answers.error_target
        );
    }

    fn on_run_complete(&self, students: usize, total_errors: u64, elapsed: Duration) {
        eprintln!(
            "\nComplete: {students} answer keys, {total_errors} errors injected ({:.1}ms)",
            elapsed.as_secs_f64() * 1000.0
        );
    }
}

pub fn execute(
    quiz_path: PathBuf,
    roster_path: PathBuf,
    max_errors_arg: Option<String>,
    seed_arg: Option<u64>,
    output_arg: Option<PathBuf>,
    archive: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // Reject a bad ceiling before touching anything else
    let max_errors_flag = max_errors_arg
        .as_deref()
        .map(parse_max_errors)
        .transpose()?;

    let config = load_config_from(config_path.as_deref())?;
    let max_errors = max_errors_flag.unwrap_or(config.max_errors);
    let output = output_arg.unwrap_or_else(|| config.output_dir.clone());
    let seed = seed_arg.or(config.seed).unwrap_or_else(rand::random);

    let generator = AnswerGenerator::new(max_errors);

    let quiz = parser::parse_quiz(&quiz_path)?;
    let roster = parser::parse_roster(&roster_path)?;
    if quiz.is_empty() {
        tracing::warn!("no questions found in {}", quiz_path.display());
    }
    if roster.is_empty() {
        tracing::warn!("no students found in {}", roster_path.display());
    }

    eprintln!(
        "answerkey v{} — {} questions x {} students, max {} errors (seed {})",
        env!("CARGO_PKG_VERSION"),
        quiz.len(),
        roster.len(),
        max_errors,
        seed
    );
    eprintln!();

    let mut rng = StdRng::seed_from_u64(seed);
    let answers = generator.generate(&quiz, &roster, &mut rng, &ConsoleReporter);

    let files = write_answer_files(&answers, &output, &config.file_suffix)?;
    eprintln!("Answer files written to: {}", output.display());

    let mut report = GenerationReport::new(seed, max_errors, quiz.len(), &answers);
    for (summary, file) in report.students.iter_mut().zip(&files) {
        summary.file = Some(file.file_name());
    }
    let summary_path = output.join(SUMMARY_FILE);
    report.save_json(&summary_path)?;
    eprintln!("Summary saved to: {}", summary_path.display());

    if let Some(archive_path) = &archive {
        write_archive(&files, archive_path)?;
        eprintln!(
            "Created ZIP archive with {} student answer files: {}",
            files.len(),
            archive_path.display()
        );
    }

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Student", "Correct", "Errors", "Error Questions", "File"]);

    for s in &report.students {
        let questions = s
            .error_questions
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&s.student_id),
            Cell::new(format!("{}/{}", s.correct_count, report.question_count)),
            Cell::new(s.error_count),
            Cell::new(questions),
            Cell::new(s.file.as_deref().unwrap_or("-")),
        ]);
    }

    println!("{table}");
}
