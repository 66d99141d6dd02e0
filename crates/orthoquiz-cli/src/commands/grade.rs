//! The `orthoquiz grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use orthoquiz_client::config::load_config_from;
use orthoquiz_core::parser;
use orthoquiz_core::report::AttemptReport;
use orthoquiz_core::QuizSession;
use orthoquiz_report::html::{generate_html, write_html_report};

use super::resolve_language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
    Markdown,
    Html,
}

impl std::str::FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => {
                anyhow::bail!("Unknown format: {other} (expected text, json, markdown or html)")
            }
        }
    }
}

pub fn execute(
    quiz_path: PathBuf,
    answers_path: PathBuf,
    lang: Option<String>,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let format: ReportFormat = format.parse()?;
    let config = load_config_from(config_path.as_deref())?;
    let language = resolve_language(lang.as_deref(), &config)?;

    let quiz = parser::parse_quiz(&quiz_path)?;
    let sheet = parser::parse_answer_sheet(&answers_path)?;

    let mut session = QuizSession::new(quiz);
    for (question_id, choice_id) in &sheet {
        session
            .select(question_id, choice_id)
            .with_context(|| format!("answer sheet entry {question_id} = {choice_id}"))?;
    }

    anyhow::ensure!(
        session.is_submit_allowed(),
        "answer sheet selects no choices; nothing to submit"
    );
    session.submit()?;

    let report = AttemptReport::from_session(&session, language)
        .context("session did not reach the submitted phase")?;
    tracing::info!(
        quiz_id = %report.quiz.id,
        score = report.result.score,
        total = report.result.total,
        "attempt graded"
    );

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Markdown => println!("{}", report.to_markdown()),
        ReportFormat::Html => {
            if output.is_none() {
                println!("{}", generate_html(&report));
            }
        }
        ReportFormat::Text => print_text(&report),
    }

    if let Some(dir) = output {
        let json_path = dir.join(format!("attempt-{}.json", report.quiz.id));
        report.save_json(&json_path)?;
        eprintln!("Report saved to {}", json_path.display());

        if format == ReportFormat::Html {
            let html_path = dir.join(format!("attempt-{}.html", report.quiz.id));
            write_html_report(&report, &html_path)?;
            eprintln!("HTML report saved to {}", html_path.display());
        }
    }

    Ok(())
}

fn print_text(report: &AttemptReport) {
    let text = report.text();
    println!(
        "Quiz: {} ({} questions)",
        report.quiz.title, report.quiz.question_count
    );
    println!(
        "{}: {} / {}",
        text.score_label, report.result.score, report.result.total
    );
    println!("{}", text.verdict_message(report.result.verdict()));

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Choice", "Feedback"]);
    for (index, question) in report.feedback.iter().enumerate() {
        for choice in &question.choices {
            table.add_row(vec![
                (index + 1).to_string(),
                question.text.clone(),
                choice.text.clone(),
                choice.feedback.to_string(),
            ]);
        }
    }
    println!("\n{table}");
}
