//! One quiz run: the undrawn question pool, the random source and the answers.

use std::collections::BTreeSet;

use rand::Rng;

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::record::{AnswerSheet, Likert, Question, RawScores};
use crate::sampler::draw_one;

/// Clamp check for a requested question count.
///
/// Returns `None` when `requested` is outside `1..=pool_len`, meaning the
/// caller must ask again.
#[must_use]
pub fn clamp_question_count(requested: usize, pool_len: usize) -> Option<usize> {
    (1..=pool_len).contains(&requested).then_some(requested)
}

/// State of a running quiz.
pub struct QuizSession<R> {
    pool: BTreeSet<Question>,
    rng: R,
    answers: AnswerSheet,
}

impl<R: Rng> QuizSession<R> {
    /// Start a session over `pool`, drawing with `rng`.
    pub fn new(pool: BTreeSet<Question>, rng: R) -> Self {
        Self {
            pool,
            rng,
            answers: AnswerSheet::new(),
        }
    }

    /// Draw the next question; it leaves the pool for good.
    ///
    /// # Errors
    ///
    /// [`crate::QuizError::EmptyPool`] once every question has been drawn.
    pub fn next_question(&mut self) -> Result<Question> {
        draw_one(&mut self.pool, &mut self.rng)
    }

    /// Record the answer to a drawn question.
    pub fn answer(&mut self, question: Question, answer: Likert) {
        if let Some(previous) = self.answers.record(question, answer) {
            log::debug!("answer replaced (was {})", previous.value());
        }
    }

    /// Questions still in the pool.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Number of answered questions.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Answers collected so far.
    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Raw factor scores for the answers so far.
    #[must_use]
    pub fn scores(&self) -> RawScores {
        aggregate(&self.answers)
    }
}
