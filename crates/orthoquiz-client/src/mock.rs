//! Mock quiz source for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use orthoquiz_core::model::Quiz;
use orthoquiz_core::traits::QuizSource;

use crate::error::ClientError;

/// Serves quizzes from memory, keyed by lesson id.
///
/// Unknown lessons fail with [`ClientError::QuizNotFound`], like the backend.
pub struct MockQuizSource {
    quizzes: HashMap<String, Quiz>,
    call_count: AtomicU32,
}

impl MockQuizSource {
    pub fn new(quizzes: HashMap<String, Quiz>) -> Self {
        Self {
            quizzes,
            call_count: AtomicU32::new(0),
        }
    }

    /// A source that knows a single lesson.
    pub fn with_quiz(lesson_id: &str, quiz: Quiz) -> Self {
        Self::new(HashMap::from([(lesson_id.to_string(), quiz)]))
    }

    /// Get the number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl QuizSource for MockQuizSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_quiz(&self, lesson_id: &str) -> anyhow::Result<Quiz> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.quizzes
            .get(lesson_id)
            .cloned()
            .ok_or_else(|| ClientError::QuizNotFound(lesson_id.to_string()).into())
    }
}
