//! The `orthoquiz fetch` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use orthoquiz_client::config::load_config_from;
use orthoquiz_client::{create_source, fetch_many};

const MAX_IN_FLIGHT: usize = 4;

pub async fn execute(
    lessons: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let output = output.unwrap_or_else(|| config.output_dir.clone());

    let lesson_ids: Vec<String> = lessons
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    anyhow::ensure!(!lesson_ids.is_empty(), "no lesson ids given");
    for lesson_id in &lesson_ids {
        anyhow::ensure!(
            is_safe_file_stem(lesson_id),
            "lesson id {lesson_id:?} cannot be used as a file name"
        );
    }

    let source = create_source(&config)?;
    let results = fetch_many(source.as_ref(), &lesson_ids, MAX_IN_FLIGHT).await;

    std::fs::create_dir_all(&output)
        .with_context(|| format!("failed to create output directory: {}", output.display()))?;

    let mut failed = 0usize;
    for (lesson_id, result) in &results {
        match result {
            Ok(quiz) => {
                let path = output.join(format!("quiz-{lesson_id}.json"));
                let json =
                    serde_json::to_string_pretty(quiz).context("failed to serialize quiz")?;
                std::fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!(
                    "Saved {} ({} questions) to {}",
                    quiz.title,
                    quiz.questions.len(),
                    path.display()
                );
            }
            Err(e) => {
                eprintln!("  ERROR: lesson {lesson_id}: {e:#}");
                failed += 1;
            }
        }
    }

    anyhow::ensure!(
        failed == 0,
        "{failed} of {} lesson(s) could not be fetched",
        results.len()
    );
    Ok(())
}

/// Lesson ids become `quiz-{id}.json` inside the output directory.
fn is_safe_file_stem(lesson_id: &str) -> bool {
    !lesson_id.starts_with('.')
        && !lesson_id
            .chars()
            .any(|c| matches!(c, '/' | '\\' | ':') || c.is_control())
}
