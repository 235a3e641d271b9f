//! Run summary with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::StudentAnswerSet;

/// Summary of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Seed the run was generated with; rerunning with it reproduces every key.
    pub seed: u64,
    /// Error ceiling requested for the run.
    pub max_errors: u32,
    /// Number of questions in the quiz.
    pub question_count: usize,
    /// Per-student outcome, in roster order.
    pub students: Vec<StudentSummary>,
}

/// Outcome for a single student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub student_id: String,
    pub error_target: u32,
    pub error_count: u32,
    pub error_questions: Vec<usize>,
    pub correct_count: usize,
    /// Answer file written for this student, if any.
    #[serde(default)]
    pub file: Option<String>,
}

impl From<&StudentAnswerSet> for StudentSummary {
    fn from(set: &StudentAnswerSet) -> Self {
        Self {
            student_id: set.student_id.clone(),
            error_target: set.error_target,
            error_count: set.error_count,
            error_questions: set.error_questions.clone(),
            correct_count: set.correct_count(),
            file: None,
        }
    }
}

impl GenerationReport {
    pub fn new(
        seed: u64,
        max_errors: u32,
        question_count: usize,
        answers: &[StudentAnswerSet],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            seed,
            max_errors,
            question_count,
            students: answers.iter().map(StudentSummary::from).collect(),
        }
    }

    /// Total errors injected across all students.
    pub fn total_errors(&self) -> u64 {
        self.students.iter().map(|s| u64::from(s.error_count)).sum()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GenerationReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
