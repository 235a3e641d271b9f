//! Per-student answer synthesis.
//!
//! Every student receives a deep copy of the quiz in which a sampled number
//! of questions have their correct options swapped for wrong ones. All
//! randomness comes from the generator passed in, drawn in a fixed order
//! (error target, question sample, substitutions), so a seeded run is
//! fully reproducible.

use std::time::{Duration, Instant};

use rand::seq::index;
use rand::Rng;

use crate::model::{QuizDocument, Roster, StudentAnswerSet};
use crate::sampler::ErrorSampler;

/// Progress reporting trait.
pub trait ProgressReporter {
    fn on_student_complete(&self, answers: &StudentAnswerSet);
    fn on_run_complete(&self, students: usize, total_errors: u64, elapsed: Duration);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_student_complete(&self, _: &StudentAnswerSet) {}
    fn on_run_complete(&self, _: usize, _: u64, _: Duration) {}
}

/// Build one student's answer set.
pub fn synthesize<R: Rng + ?Sized>(
    quiz: &QuizDocument,
    student_id: &str,
    sampler: &ErrorSampler,
    rng: &mut R,
) -> StudentAnswerSet {
    let mut answers = quiz.clone();
    let error_target = sampler.sample(rng);

    let total = quiz.len();
    let amount = (error_target as usize).min(total);
    let targeted = index::sample(rng, total, amount);

    let mut error_count = 0u32;
    let mut error_questions = Vec::new();

    for idx in targeted.iter() {
        let number = idx + 1;
        let (Some(original), Some(copy)) = (quiz.get(number), answers.get_mut(number)) else {
            continue;
        };

        let wrong = original.wrong_indices();
        if wrong.is_empty() {
            tracing::trace!(student = student_id, question = number, "no wrong option, skipped");
            continue;
        }

        error_count += 1;
        error_questions.push(number);
        copy.correct_indices = original
            .correct_indices
            .iter()
            .map(|_| wrong[rng.gen_range(0..wrong.len())])
            .collect();
    }

    tracing::debug!(
        student = student_id,
        error_target,
        error_count,
        ?error_questions,
        "synthesized answers"
    );

    StudentAnswerSet {
        student_id: student_id.to_string(),
        answers,
        error_target,
        error_count,
        error_questions,
    }
}

/// Generates answer sets for a whole roster against one quiz.
#[derive(Debug, Clone)]
pub struct AnswerGenerator {
    sampler: ErrorSampler,
}

impl AnswerGenerator {
    pub fn new(max_errors: u32) -> Self {
        Self {
            sampler: ErrorSampler::new(max_errors),
        }
    }

    pub fn max_errors(&self) -> u32 {
        self.sampler.max_errors()
    }

    /// Synthesize one answer set per roster entry, in roster order.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        quiz: &QuizDocument,
        roster: &Roster,
        rng: &mut R,
        reporter: &dyn ProgressReporter,
    ) -> Vec<StudentAnswerSet> {
        let start = Instant::now();
        tracing::info!(
            questions = quiz.len(),
            students = roster.len(),
            max_errors = self.max_errors(),
            "generating answer keys"
        );

        let mut results = Vec::with_capacity(roster.len());
        for student in roster.iter() {
            let answers = synthesize(quiz, student, &self.sampler, rng);
            reporter.on_student_complete(&answers);
            results.push(answers);
        }

        let total_errors = results.iter().map(|r| u64::from(r.error_count)).sum();
        reporter.on_run_complete(results.len(), total_errors, start.elapsed());
        results
    }
}
