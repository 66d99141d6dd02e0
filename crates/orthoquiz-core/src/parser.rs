//! Quiz file parser.
//!
//! Loads quizzes from JSON (backend payloads) or TOML (hand-authored) files,
//! validates them, and reads scripted answer sheets.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, Quiz};

/// On-disk quiz encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFormat {
    Json,
    Toml,
}

impl QuizFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(QuizFormat::Json),
            Some("toml") => Some(QuizFormat::Toml),
            _ => None,
        }
    }
}

/// Intermediate TOML structure: a `[quiz]` header plus `[[questions]]`.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    lesson_id: Option<String>,
}

/// Parse a single quiz file.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let format = QuizFormat::from_path(path)
        .with_context(|| format!("unsupported quiz file extension: {}", path.display()))?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, format, path)
}

/// Parse quiz content from a string (useful for testing).
pub fn parse_quiz_str(content: &str, format: QuizFormat, source_path: &Path) -> Result<Quiz> {
    match format {
        QuizFormat::Json => serde_json::from_str(content)
            .with_context(|| format!("failed to parse JSON: {}", source_path.display())),
        QuizFormat::Toml => {
            let parsed: TomlQuizFile = toml::from_str(content)
                .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;
            Ok(Quiz {
                id: parsed.quiz.id,
                title: parsed.quiz.title,
                lesson_id: parsed.quiz.lesson_id,
                questions: parsed.questions,
            })
        }
    }
}

/// Recursively load every quiz file in a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if QuizFormat::from_path(&path).is_some() {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a quiz for authoring mistakes.
///
/// Nothing here is fatal: the engine grades loose quizzes as they are.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "quiz has no questions".into(),
        });
    }

    let mut seen_questions = HashSet::new();
    for question in &quiz.questions {
        let warn = |message: String| ValidationWarning {
            question_id: Some(question.id.clone()),
            message,
        };

        if !seen_questions.insert(question.id.as_str()) {
            warnings.push(warn(format!("duplicate question ID: {}", question.id)));
        }

        if question.text.trim().is_empty() {
            warnings.push(warn("question text is empty".into()));
        }

        if question.choices.is_empty() {
            warnings.push(warn("question has no choices".into()));
            continue;
        }

        let mut seen_choices = HashSet::new();
        for choice in &question.choices {
            if !seen_choices.insert(choice.id.as_str()) {
                warnings.push(warn(format!("duplicate choice ID: {}", choice.id)));
            }
        }

        match question.correct_count() {
            0 => warnings.push(warn("no choice is marked correct".into())),
            1 => {}
            n => warnings.push(warn(format!("{n} choices are marked correct"))),
        }
    }

    warnings
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerSheetFile {
    Wrapped { answers: BTreeMap<String, String> },
    Bare(BTreeMap<String, String>),
}

/// Read a scripted answer sheet mapping question id to choice id.
///
/// TOML sheets use an `[answers]` table; JSON sheets may wrap the map in
/// `"answers"` or be the bare object.
pub fn parse_answer_sheet(path: &Path) -> Result<BTreeMap<String, String>> {
    let format = QuizFormat::from_path(path)
        .with_context(|| format!("unsupported answer sheet extension: {}", path.display()))?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer sheet: {}", path.display()))?;

    let sheet: AnswerSheetFile = match format {
        QuizFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))?,
        QuizFormat::Toml => toml::from_str(&content)
            .with_context(|| format!("failed to parse TOML: {}", path.display()))?,
    };

    Ok(match sheet {
        AnswerSheetFile::Wrapped { answers } => answers,
        AnswerSheetFile::Bare(answers) => answers,
    })
}
