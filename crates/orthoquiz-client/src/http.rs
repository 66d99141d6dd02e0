//! Platform backend quiz source.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use tracing::instrument;

use orthoquiz_core::model::Quiz;
use orthoquiz_core::traits::QuizSource;

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches quizzes from `GET {base_url}/quizzes/{lesson_id}`.
pub struct HttpQuizSource {
    base_url: String,
    base: Url,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpQuizSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let base_url = base.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .with_context(|| format!("invalid API base URL: {base_url}"))?;
        anyhow::ensure!(
            !base.cannot_be_a_base(),
            "invalid API base URL: {base_url}"
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url,
            base,
            timeout_secs,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/quizzes/{lesson_id}` with the lesson id as one encoded path segment.
    fn quiz_url(&self, lesson_id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("quizzes").push(lesson_id);
        }
        url
    }
}

#[async_trait]
impl QuizSource for HttpQuizSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_quiz(&self, lesson_id: &str) -> anyhow::Result<Quiz> {
        let response = self
            .client
            .get(self.quiz_url(lesson_id))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    ClientError::NetworkError(format!(
                        "backend not reachable at {}",
                        self.base_url
                    ))
                } else {
                    ClientError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(ClientError::QuizNotFound(lesson_id.to_string()).into());
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                status,
                message: body,
            }
            .into());
        }

        let quiz: Quiz = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidPayload(e.to_string()))?;

        tracing::debug!(quiz_id = %quiz.id, questions = quiz.questions.len(), "quiz fetched");
        Ok(quiz)
    }
}
