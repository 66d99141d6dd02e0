//! orthoquiz-core: Quiz model, evaluation engine, and scoring.
//!
//! This crate defines the quiz data model, the answering/submitted state
//! machine, and the pure scoring and feedback logic that the rest of
//! orthoquiz renders.

pub mod answers;
pub mod engine;
pub mod error;
pub mod locale;
pub mod model;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod traits;

pub use answers::AnswerState;
pub use engine::{ChoiceEntry, ChoiceFeedback, Phase, QuestionFeedback, QuizSession, Snapshot};
pub use error::QuizError;
pub use locale::{Language, UiText};
pub use model::{Choice, Question, Quiz};
pub use scoring::{SubmissionResult, Verdict};
