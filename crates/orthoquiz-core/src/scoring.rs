//! Scoring of an answer state against a quiz.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerState;
use crate::model::Quiz;

/// The frozen outcome of grading an answer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Number of questions whose selected choice is correct.
    pub score: u32,
    /// Number of questions in the quiz.
    pub total: u32,
    pub submitted: bool,
}

/// How a submitted result is summarised to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Every question answered correctly.
    Perfect,
    Good,
}

impl SubmissionResult {
    /// `score == total`. A zero-question quiz counts as perfect.
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }

    pub fn verdict(&self) -> Verdict {
        if self.is_perfect() {
            Verdict::Perfect
        } else {
            Verdict::Good
        }
    }

    /// Score as a fraction in `[0.0, 1.0]`; `0.0` when there are no questions.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 / self.total as f64
        }
    }
}

/// Grade `answers` against `quiz`.
///
/// For each question in order, the selected choice is looked up among that
/// question's choices (first id match); a correct match adds one point.
/// Unanswered questions and selections naming no choice of the question add
/// nothing.
pub fn score(quiz: &Quiz, answers: &AnswerState) -> SubmissionResult {
    let score = quiz
        .questions
        .iter()
        .filter(|question| {
            answers
                .selected(&question.id)
                .and_then(|choice_id| question.choice(choice_id))
                .is_some_and(|choice| choice.is_correct)
        })
        .count();

    SubmissionResult {
        score: saturating_count(score),
        total: quiz.total(),
        submitted: true,
    }
}

/// Question counts saturate at `u32::MAX` instead of wrapping.
pub(crate) fn saturating_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
