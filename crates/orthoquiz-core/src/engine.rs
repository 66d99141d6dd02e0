//! Quiz evaluation engine.
//!
//! A [`QuizSession`] owns one loaded quiz and moves between two phases:
//! `Answering` (selections accepted) and `Submitted` (selections frozen,
//! result available). Every transition returns a [`Snapshot`] so a view layer
//! can render straight from the return value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answers::AnswerState;
use crate::error::QuizError;
use crate::model::{Choice, Question, Quiz};
use crate::scoring::{self, SubmissionResult};

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Answering,
    Submitted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Answering => write!(f, "answering"),
            Phase::Submitted => write!(f, "submitted"),
        }
    }
}

/// A session transition, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Select,
    Submit,
    Reset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Select => write!(f, "select"),
            Action::Submit => write!(f, "submit"),
            Action::Reset => write!(f, "reset"),
        }
    }
}

/// Visual feedback class for one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChoiceFeedback {
    /// Answering, and this choice is the current selection.
    Selected,
    /// Answering, not selected.
    Neutral,
    CorrectSelected,
    IncorrectSelected,
    /// Submitted, not selected, but flagged correct.
    MissedCorrect,
    /// Submitted, neither selected nor correct.
    Dimmed,
}

impl ChoiceFeedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceFeedback::Selected => "selected",
            ChoiceFeedback::Neutral => "neutral",
            ChoiceFeedback::CorrectSelected => "correct-selected",
            ChoiceFeedback::IncorrectSelected => "incorrect-selected",
            ChoiceFeedback::MissedCorrect => "missed-correct",
            ChoiceFeedback::Dimmed => "dimmed",
        }
    }
}

impl fmt::Display for ChoiceFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The session view returned by every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    /// Number of answered questions.
    pub answered: usize,
    /// Whether `submit` should currently be offered to the learner.
    pub submit_allowed: bool,
    pub result: Option<SubmissionResult>,
}

/// Classified choices of one question, in quiz order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFeedback {
    pub question_id: String,
    pub text: String,
    pub choices: Vec<ChoiceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceEntry {
    pub choice_id: String,
    pub text: String,
    pub feedback: ChoiceFeedback,
}

/// One learner's attempt at one quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    answers: AnswerState,
    result: Option<SubmissionResult>,
}

impl QuizSession {
    /// Start answering `quiz` with no selections.
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            answers: AnswerState::new(),
            result: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    pub fn phase(&self) -> Phase {
        if self.result.is_some() {
            Phase::Submitted
        } else {
            Phase::Answering
        }
    }

    /// The graded result, present only while submitted.
    pub fn current_result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// True iff answering and at least one question is answered.
    pub fn is_submit_allowed(&self) -> bool {
        self.phase() == Phase::Answering && !self.answers.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            answered: self.answers.len(),
            submit_allowed: self.is_submit_allowed(),
            result: self.result,
        }
    }

    /// Select `choice_id` for `question_id`, replacing any earlier selection.
    ///
    /// Rejected once submitted, and for ids not present in the quiz.
    pub fn select(&mut self, question_id: &str, choice_id: &str) -> Result<Snapshot, QuizError> {
        self.expect_phase(Action::Select, Phase::Answering)?;

        let question = self
            .quiz
            .question(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion {
                question_id: question_id.to_string(),
            })?;
        if question.choice(choice_id).is_none() {
            tracing::warn!(question_id, choice_id, "selection names an unknown choice");
            return Err(QuizError::UnknownChoice {
                question_id: question_id.to_string(),
                choice_id: choice_id.to_string(),
            });
        }

        if let Some(previous) = self.answers.record(question_id, choice_id) {
            tracing::debug!(question_id, previous = %previous, choice_id, "selection replaced");
        } else {
            tracing::debug!(question_id, choice_id, "selection recorded");
        }
        Ok(self.snapshot())
    }

    /// Grade the current selections and freeze them.
    ///
    /// Grading an empty answer state is permitted and scores zero; callers
    /// gate the learner-facing action on [`is_submit_allowed`](Self::is_submit_allowed).
    pub fn submit(&mut self) -> Result<Snapshot, QuizError> {
        self.expect_phase(Action::Submit, Phase::Answering)?;

        let result = scoring::score(&self.quiz, &self.answers);
        tracing::debug!(
            quiz_id = %self.quiz.id,
            score = result.score,
            total = result.total,
            "quiz submitted"
        );
        self.result = Some(result);
        Ok(self.snapshot())
    }

    /// Clear selections and result, returning to answering.
    pub fn reset(&mut self) -> Result<Snapshot, QuizError> {
        self.expect_phase(Action::Reset, Phase::Submitted)?;

        self.answers.clear();
        self.result = None;
        tracing::debug!(quiz_id = %self.quiz.id, "quiz reset");
        Ok(self.snapshot())
    }

    /// Feedback class for `choice` of `question` in the current state.
    pub fn classify(&self, question: &Question, choice: &Choice) -> ChoiceFeedback {
        let selected = self.answers.is_selected(&question.id, &choice.id);
        match (self.phase(), selected, choice.is_correct) {
            (Phase::Answering, true, _) => ChoiceFeedback::Selected,
            (Phase::Answering, false, _) => ChoiceFeedback::Neutral,
            (Phase::Submitted, true, true) => ChoiceFeedback::CorrectSelected,
            (Phase::Submitted, true, false) => ChoiceFeedback::IncorrectSelected,
            (Phase::Submitted, false, true) => ChoiceFeedback::MissedCorrect,
            (Phase::Submitted, false, false) => ChoiceFeedback::Dimmed,
        }
    }

    /// Classify every choice of every question, in quiz order.
    pub fn feedback(&self) -> Vec<QuestionFeedback> {
        self.quiz
            .questions
            .iter()
            .map(|question| QuestionFeedback {
                question_id: question.id.clone(),
                text: question.text.clone(),
                choices: question
                    .choices
                    .iter()
                    .map(|choice| ChoiceEntry {
                        choice_id: choice.id.clone(),
                        text: choice.text.clone(),
                        feedback: self.classify(question, choice),
                    })
                    .collect(),
            })
            .collect()
    }

    fn expect_phase(&self, action: Action, required: Phase) -> Result<(), QuizError> {
        let phase = self.phase();
        if phase == required {
            Ok(())
        } else {
            Err(QuizError::InvalidTransition { action, phase })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_question_quiz() -> Quiz {
        Quiz {
            id: "quiz-1".into(),
            title: "Scenario".into(),
            lesson_id: Some("lesson-1".into()),
            questions: vec![
                Question {
                    id: "q1".into(),
                    text: "First".into(),
                    choices: vec![Choice::new("c1", "one", true), Choice::new("c2", "two", false)],
                },
                Question {
                    id: "q2".into(),
                    text: "Second".into(),
                    choices: vec![
                        Choice::new("c3", "three", false),
                        Choice::new("c4", "four", true),
                    ],
                },
            ],
        }
    }

    fn empty_quiz() -> Quiz {
        Quiz {
            id: "empty".into(),
            title: "Nothing here".into(),
            lesson_id: None,
            questions: vec![],
        }
    }

    fn classify_ids(session: &QuizSession, question_id: &str, choice_id: &str) -> ChoiceFeedback {
        let question = session.quiz().question(question_id).unwrap();
        let choice = question.choice(choice_id).unwrap();
        session.classify(question, choice)
    }

    #[test]
    fn starts_answering_and_empty() {
        let session = QuizSession::new(two_question_quiz());
        assert_eq!(session.phase(), Phase::Answering);
        assert!(session.answers().is_empty());
        assert!(session.current_result().is_none());
        assert!(!session.is_submit_allowed());
    }

    #[test]
    fn scenario_one_of_two() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q1", "c1").unwrap();
        session.select("q2", "c3").unwrap();
        let snapshot = session.submit().unwrap();

        let result = snapshot.result.unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 2);
        assert_eq!(snapshot.phase, Phase::Submitted);
        assert!(!snapshot.submit_allowed);

        assert_eq!(classify_ids(&session, "q1", "c1"), ChoiceFeedback::CorrectSelected);
        assert_eq!(classify_ids(&session, "q1", "c2"), ChoiceFeedback::Dimmed);
        assert_eq!(classify_ids(&session, "q2", "c4"), ChoiceFeedback::MissedCorrect);
        assert_eq!(classify_ids(&session, "q2", "c3"), ChoiceFeedback::IncorrectSelected);
    }

    #[test]
    fn reselect_keeps_only_latest_choice() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q1", "c1").unwrap();
        let snapshot = session.select("q1", "c2").unwrap();
        assert_eq!(snapshot.answered, 1);
        assert_eq!(session.answers().selected("q1"), Some("c2"));

        let result = session.submit().unwrap().result.unwrap();
        assert_eq!(result.score, 0);
    }

    #[test]
    fn empty_quiz_submits_zero_of_zero() {
        let mut session = QuizSession::new(empty_quiz());
        assert!(!session.is_submit_allowed());
        let result = session.submit().unwrap().result.unwrap();
        assert_eq!((result.score, result.total), (0, 0));
    }

    #[test]
    fn submit_allowed_after_any_answer() {
        let mut session = QuizSession::new(two_question_quiz());
        let snapshot = session.select("q2", "c4").unwrap();
        assert!(snapshot.submit_allowed);
        assert!(session.is_submit_allowed());
    }

    #[test]
    fn selection_locked_after_submit() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q1", "c1").unwrap();
        session.submit().unwrap();

        let err = session.select("q1", "c2").unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidTransition {
                action: Action::Select,
                phase: Phase::Submitted
            }
        );
        assert_eq!(err.to_string(), "cannot select while submitted");
        assert_eq!(session.answers().selected("q1"), Some("c1"));
        assert_eq!(session.current_result().unwrap().score, 1);
    }

    #[test]
    fn double_submit_rejected() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q1", "c1").unwrap();
        session.submit().unwrap();
        assert!(matches!(
            session.submit(),
            Err(QuizError::InvalidTransition {
                action: Action::Submit,
                ..
            })
        ));
    }

    #[test]
    fn reset_only_after_submit() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q1", "c1").unwrap();
        assert!(matches!(
            session.reset(),
            Err(QuizError::InvalidTransition {
                action: Action::Reset,
                phase: Phase::Answering
            })
        ));
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q1", "c1").unwrap();
        session.select("q2", "c4").unwrap();
        session.submit().unwrap();

        let snapshot = session.reset().unwrap();
        assert_eq!(snapshot.phase, Phase::Answering);
        assert_eq!(snapshot.answered, 0);
        assert!(snapshot.result.is_none());
        assert!(session.answers().is_empty());
        assert!(session.current_result().is_none());

        session.select("q1", "c2").unwrap();
        assert_eq!(classify_ids(&session, "q1", "c2"), ChoiceFeedback::Selected);
    }

    #[test]
    fn unknown_references_leave_state_untouched() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q1", "c1").unwrap();

        let err = session.select("q9", "c1").unwrap_err();
        assert!(err.is_unknown_reference());
        assert!(matches!(err, QuizError::UnknownQuestion { .. }));

        let err = session.select("q1", "c4").unwrap_err();
        assert_eq!(
            err,
            QuizError::UnknownChoice {
                question_id: "q1".into(),
                choice_id: "c4".into()
            }
        );
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.answers().selected("q1"), Some("c1"));
    }

    #[test]
    fn classify_while_answering() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q1", "c2").unwrap();
        assert_eq!(classify_ids(&session, "q1", "c2"), ChoiceFeedback::Selected);
        assert_eq!(classify_ids(&session, "q1", "c1"), ChoiceFeedback::Neutral);
        assert_eq!(classify_ids(&session, "q2", "c4"), ChoiceFeedback::Neutral);
    }

    #[test]
    fn classify_is_idempotent() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q2", "c3").unwrap();
        session.submit().unwrap();
        let before = session.snapshot();
        let first = classify_ids(&session, "q2", "c3");
        for _ in 0..10 {
            assert_eq!(classify_ids(&session, "q2", "c3"), first);
        }
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn score_is_bounded_for_every_selection_pattern() {
        let quiz = two_question_quiz();
        let q1 = ["c1", "c2", ""];
        let q2 = ["c3", "c4", ""];
        for a in q1 {
            for b in q2 {
                let mut session = QuizSession::new(quiz.clone());
                if !a.is_empty() {
                    session.select("q1", a).unwrap();
                }
                if !b.is_empty() {
                    session.select("q2", b).unwrap();
                }
                let result = session.submit().unwrap().result.unwrap();
                assert!(result.score <= result.total);
                assert_eq!(result.total, 2);
            }
        }
    }

    #[test]
    fn feedback_covers_every_choice_in_order() {
        let mut session = QuizSession::new(two_question_quiz());
        session.select("q1", "c1").unwrap();
        session.submit().unwrap();
        let feedback = session.feedback();
        assert_eq!(feedback.len(), 2);
        let classes: Vec<&str> = feedback
            .iter()
            .flat_map(|q| q.choices.iter().map(|c| c.feedback.as_str()))
            .collect();
        assert_eq!(
            classes,
            vec!["correct-selected", "dimmed", "dimmed", "missed-correct"]
        );
    }

    #[test]
    fn feedback_serializes_kebab_case() {
        let json = serde_json::to_string(&ChoiceFeedback::MissedCorrect).unwrap();
        assert_eq!(json, "\"missed-correct\"");
        assert_eq!(ChoiceFeedback::IncorrectSelected.to_string(), "incorrect-selected");
    }
}
