//! The `orthoquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create orthoquiz.toml
    if std::path::Path::new("orthoquiz.toml").exists() {
        println!("orthoquiz.toml already exists, skipping.");
    } else {
        std::fs::write("orthoquiz.toml", SAMPLE_CONFIG)?;
        println!("Created orthoquiz.toml");
    }

    // Create example quiz
    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.toml");
    if example_path.exists() {
        println!("quizzes/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit orthoquiz.toml to point at your platform API");
    println!("  2. Run: orthoquiz validate --quiz quizzes/example.toml");
    println!("  3. Run: orthoquiz play --quiz quizzes/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# orthoquiz configuration

api_base_url = "http://localhost:5000/api"
language = "EN"
timeout_secs = 30
output_dir = "./orthoquiz-results"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
id = "example"
title = "Example Quiz"
lesson_id = "example-lesson"

[[questions]]
id = "q1"
text = "How many holy mysteries (sacraments) does the Church celebrate?"

[[questions.choices]]
id = "q1-a"
text = "Seven"
is_correct = true

[[questions.choices]]
id = "q1-b"
text = "Two"

[[questions]]
id = "q2"
text = "Which feast celebrates the Baptism of Christ?"

[[questions.choices]]
id = "q2-a"
text = "Meskel"

[[questions.choices]]
id = "q2-b"
text = "Timkat"
is_correct = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use orthoquiz_core::parser::{parse_quiz_str, validate_quiz, QuizFormat};

    #[test]
    fn example_quiz_is_valid() {
        let quiz = parse_quiz_str(EXAMPLE_QUIZ, QuizFormat::Toml, Path::new("example.toml")).unwrap();
        assert_eq!(quiz.questions.len(), 2);
        assert!(validate_quiz(&quiz).is_empty());
    }

    #[test]
    fn sample_config_parses() {
        let config: orthoquiz_client::OrthoquizConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.timeout_secs, 30);
    }
}
