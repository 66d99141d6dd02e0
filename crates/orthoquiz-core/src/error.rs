//! Engine error types.
//!
//! These are contract violations by the caller, not user-facing failures.
//! A rejected call never changes the session.

use thiserror::Error;

use crate::engine::{Action, Phase};

/// Errors returned by [`QuizSession`](crate::engine::QuizSession) transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The transition is not valid in the current phase.
    #[error("cannot {action} while {phase}")]
    InvalidTransition { action: Action, phase: Phase },

    /// The question id is not part of the loaded quiz.
    #[error("unknown question: {question_id}")]
    UnknownQuestion { question_id: String },

    /// The choice id does not belong to the question.
    #[error("unknown choice {choice_id} for question {question_id}")]
    UnknownChoice {
        question_id: String,
        choice_id: String,
    },
}

impl QuizError {
    /// Returns `true` for errors caused by ids missing from the quiz.
    pub fn is_unknown_reference(&self) -> bool {
        matches!(
            self,
            QuizError::UnknownQuestion { .. } | QuizError::UnknownChoice { .. }
        )
    }
}
