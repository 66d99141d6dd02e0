//! Attempt reports with JSON persistence and a Markdown summary.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answers::AnswerState;
use crate::engine::{ChoiceFeedback, QuestionFeedback, QuizSession};
use crate::locale::{Language, UiText};
use crate::scoring::SubmissionResult;

/// A graded attempt, frozen for display or storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Interface language the attempt was taken in.
    pub language: Language,
    pub quiz: QuizSummary,
    pub answers: AnswerState,
    pub result: SubmissionResult,
    /// Classified choices for every question.
    pub feedback: Vec<QuestionFeedback>,
}

/// Summary of a quiz (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lesson_id: Option<String>,
    pub question_count: usize,
}

impl AttemptReport {
    /// Freeze a submitted session. Returns `None` while still answering.
    pub fn from_session(session: &QuizSession, language: Language) -> Option<Self> {
        let result = *session.current_result()?;
        let quiz = session.quiz();
        Some(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            language,
            quiz: QuizSummary {
                id: quiz.id.clone(),
                title: quiz.title.clone(),
                lesson_id: quiz.lesson_id.clone(),
                question_count: quiz.questions.len(),
            },
            answers: session.answers().clone(),
            result,
            feedback: session.feedback(),
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AttemptReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    pub fn text(&self) -> &'static UiText {
        UiText::for_language(self.language)
    }

    /// Render the report as Markdown.
    pub fn to_markdown(&self) -> String {
        let text = self.text();
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", self.quiz.title));
        md.push_str(&format!(
            "**{}:** {} / {}\n\n",
            text.score_label, self.result.score, self.result.total
        ));
        md.push_str(&format!(
            "_{}_\n\n",
            text.verdict_message(self.result.verdict())
        ));

        for (index, question) in self.feedback.iter().enumerate() {
            md.push_str(&format!("## {}. {}\n\n", index + 1, question.text));
            for choice in &question.choices {
                md.push_str(&format!(
                    "- {} {}\n",
                    marker(choice.feedback),
                    choice.text
                ));
            }
            md.push('\n');
        }

        md
    }
}

fn marker(feedback: ChoiceFeedback) -> &'static str {
    match feedback {
        ChoiceFeedback::CorrectSelected => "[x] ✓",
        ChoiceFeedback::IncorrectSelected => "[x] ✗",
        ChoiceFeedback::MissedCorrect => "[ ] ✓",
        ChoiceFeedback::Selected => "[x]",
        ChoiceFeedback::Neutral | ChoiceFeedback::Dimmed => "[ ]",
    }
}
