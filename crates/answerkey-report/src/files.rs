//! Per-student answer files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use answerkey_core::model::StudentAnswerSet;
use answerkey_core::writer::serialize;

/// Run summary written next to the answer files; never used for a student.
pub const SUMMARY_FILE: &str = "summary.json";

/// An answer file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFile {
    /// Roster identifier the file belongs to.
    pub student_id: String,
    /// Full path of the written file.
    pub path: PathBuf,
}

impl AnswerFile {
    /// File name without the directory, as stored in archives.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Turn a student id into a safe file name stem.
fn sanitize_stem(student_id: &str) -> String {
    let stem: String = student_id
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.is_empty() {
        "unnamed".to_string()
    } else {
        stem
    }
}

/// File name for a student's answer key.
pub fn answer_file_name(student_id: &str, suffix: &str) -> String {
    format!("{}{suffix}", sanitize_stem(student_id))
}

/// Write one answer file per student into `output_dir`.
///
/// Students whose sanitized names collide with each other or with
/// [`SUMMARY_FILE`] get `-2`, `-3`, ... appended so that no file is
/// overwritten. Stops at the first I/O failure.
pub fn write_answer_files(
    answers: &[StudentAnswerSet],
    output_dir: &Path,
    suffix: &str,
) -> Result<Vec<AnswerFile>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let mut used = HashSet::from([SUMMARY_FILE.to_string()]);
    let mut written = Vec::with_capacity(answers.len());

    for set in answers {
        let stem = sanitize_stem(&set.student_id);
        let mut name = format!("{stem}{suffix}");
        let mut n = 2;
        while !used.insert(name.clone()) {
            name = format!("{stem}-{n}{suffix}");
            n += 1;
        }

        let path = output_dir.join(&name);
        std::fs::write(&path, serialize(set))
            .with_context(|| format!("failed to write answer file: {}", path.display()))?;
        tracing::debug!(student = %set.student_id, "wrote {}", path.display());

        written.push(AnswerFile {
            student_id: set.student_id.clone(),
            path,
        });
    }

    Ok(written)
}
