//! Fetching several lessons at once.

use futures::stream::{self, StreamExt};

use orthoquiz_core::model::Quiz;
use orthoquiz_core::traits::QuizSource;

/// Fetch quizzes for `lesson_ids` with at most `concurrency` requests in
/// flight. Results come back in input order, one per lesson; a failed lesson
/// does not stop the others.
pub async fn fetch_many(
    source: &dyn QuizSource,
    lesson_ids: &[String],
    concurrency: usize,
) -> Vec<(String, anyhow::Result<Quiz>)> {
    stream::iter(lesson_ids)
        .map(|lesson_id| async move {
            let result = source.fetch_quiz(lesson_id).await;
            if let Err(e) = &result {
                tracing::warn!(lesson_id = %lesson_id, "fetch failed: {e:#}");
            }
            (lesson_id.clone(), result)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
