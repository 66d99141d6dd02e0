//! Trait for collaborators that supply quizzes.
//!
//! Implemented by the `orthoquiz-client` crate for the platform backend and
//! for tests.

use async_trait::async_trait;

use crate::model::Quiz;

/// A place quizzes are fetched from, keyed by lesson.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Human-readable source name (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch the quiz attached to a lesson.
    async fn fetch_quiz(&self, lesson_id: &str) -> anyhow::Result<Quiz>;
}
