//! HTML results page generator.
//!
//! Produces a self-contained HTML file with all CSS inlined. Each choice is
//! rendered with a CSS class named after its feedback classification.

use anyhow::Result;
use std::path::Path;

use orthoquiz_core::locale::Language;
use orthoquiz_core::report::AttemptReport;
use orthoquiz_core::ChoiceFeedback;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn lang_attr(language: Language) -> &'static str {
    match language {
        Language::En => "en",
        Language::Am => "am",
    }
}

fn icon(feedback: ChoiceFeedback) -> &'static str {
    match feedback {
        ChoiceFeedback::CorrectSelected => "<span class=\"icon\">&#10004;</span>",
        ChoiceFeedback::IncorrectSelected => "<span class=\"icon\">&#10008;</span>",
        _ => "",
    }
}

/// Generate the results page for a graded attempt.
pub fn generate_html(report: &AttemptReport) -> String {
    let text = report.text();
    let mut html = String::new();

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n",
        lang_attr(report.language)
    ));
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n",
        html_escape(&report.quiz.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<p class=\"subheading\">{}</p>\n",
        html_escape(text.subheading)
    ));
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&report.quiz.title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} | {}</p>\n",
        report.quiz.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score card
    html.push_str("<section class=\"score-card\">\n");
    html.push_str(&format!(
        "<p class=\"score-label\">{}</p>\n",
        html_escape(text.score_label)
    ));
    html.push_str(&format!(
        "<h2 class=\"score\">{} <span class=\"total\">/ {}</span></h2>\n",
        report.result.score, report.result.total
    ));
    html.push_str(&format!(
        "<p class=\"verdict\">{}</p>\n",
        html_escape(text.verdict_message(report.result.verdict()))
    ));
    html.push_str("</section>\n");

    // Questions
    html.push_str("<section class=\"questions\">\n");
    for (index, question) in report.feedback.iter().enumerate() {
        html.push_str("<article class=\"question\">\n");
        html.push_str(&format!(
            "<h3><span class=\"number\">{}</span> {}</h3>\n",
            index + 1,
            html_escape(&question.text)
        ));
        html.push_str("<ul class=\"choices\">\n");
        for choice in &question.choices {
            html.push_str(&format!(
                "<li class=\"choice {}\" data-choice-id=\"{}\">{}{}</li>\n",
                choice.feedback,
                html_escape(&choice.choice_id),
                html_escape(&choice.text),
                icon(choice.feedback)
            ));
        }
        html.push_str("</ul>\n</article>\n");
    }
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the results page to a file.
pub fn write_html_report(report: &AttemptReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #1a1614; --card: #26211e; --fg: #f9fafb; --accent: #f59e0b; --ok: #22c55e; --bad: #ef4444; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
header, section { max-width: 56rem; margin: 0 auto; }
.subheading { color: var(--accent); letter-spacing: 0.3em; text-transform: uppercase; font-weight: 900; text-align: center; }
h1 { text-align: center; }
.meta { color: #9ca3af; text-align: center; }
.score-card { background: var(--card); border: 1px solid var(--accent); border-radius: 2rem; padding: 2rem; text-align: center; margin: 2rem auto; }
.score { font-size: 4rem; margin: 0.5rem 0; }
.total { color: #6b7280; font-size: 2rem; }
.question { background: var(--card); border-radius: 2rem; padding: 2rem; margin: 2rem 0; }
.number { background: var(--accent); color: var(--bg); border-radius: 0.5rem; padding: 0 0.6rem; }
.choices { list-style: none; padding: 0; }
.choice { border: 2px solid #374151; border-radius: 1rem; padding: 1rem 1.5rem; margin: 0.75rem 0; display: flex; justify-content: space-between; }
.choice.selected { border-color: var(--accent); background: var(--accent); color: var(--bg); font-weight: 900; }
.choice.correct-selected { border-color: var(--ok); color: var(--ok); }
.choice.incorrect-selected { border-color: var(--bad); color: var(--bad); }
.choice.missed-correct { border-color: var(--ok); border-style: dashed; color: var(--ok); opacity: 0.6; }
.choice.dimmed { border-color: transparent; opacity: 0.2; }
"#;
