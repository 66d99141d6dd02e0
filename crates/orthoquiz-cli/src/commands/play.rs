//! The `orthoquiz play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use orthoquiz_client::config::load_config_from;
use orthoquiz_client::{create_source, ClientError};
use orthoquiz_core::locale::UiText;
use orthoquiz_core::traits::QuizSource;
use orthoquiz_core::{parser, ChoiceFeedback, Quiz, QuizSession, SubmissionResult};

use super::resolve_language;

pub async fn execute(
    quiz_path: Option<PathBuf>,
    lesson: Option<String>,
    lang: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let language = resolve_language(lang.as_deref(), &config)?;
    let text = UiText::for_language(language);

    let quiz = match (quiz_path, lesson) {
        (Some(path), None) => parser::parse_quiz(&path)?,
        (None, Some(lesson_id)) => {
            let source = create_source(&config)?;
            eprintln!("{}", text.loading);
            source.fetch_quiz(&lesson_id).await.map_err(|e| {
                let not_found = matches!(
                    e.downcast_ref::<ClientError>(),
                    Some(ClientError::QuizNotFound(_))
                );
                if not_found {
                    anyhow::anyhow!("{}", text.error)
                } else {
                    e
                }
            })?
        }
        _ => anyhow::bail!("pass exactly one of --quiz or --lesson"),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(quiz, text, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Drive one quiz session over a line-based terminal.
///
/// Returns the last submitted result, or `None` if nothing was submitted.
pub fn run_session<R: BufRead, W: Write>(
    quiz: Quiz,
    text: &UiText,
    input: &mut R,
    out: &mut W,
) -> Result<Option<SubmissionResult>> {
    let mut session = QuizSession::new(quiz);

    loop {
        writeln!(out, "{}\n{}", text.subheading, session.quiz().title)?;

        let questions = session.quiz().questions.clone();
        'questions: for (index, question) in questions.iter().enumerate() {
            writeln!(out, "\n{}. {}", index + 1, question.text)?;
            for (n, choice) in question.choices.iter().enumerate() {
                writeln!(out, "  {}) {}", n + 1, choice.text)?;
            }
            if question.choices.is_empty() {
                continue;
            }

            loop {
                write!(out, "> ")?;
                out.flush()?;
                let Some(line) = read_line(input)? else {
                    break 'questions;
                };
                if line.is_empty() {
                    break;
                }
                match line.parse::<usize>() {
                    Ok(n) if (1..=question.choices.len()).contains(&n) => {
                        session.select(&question.id, &question.choices[n - 1].id)?;
                        break;
                    }
                    _ => writeln!(
                        out,
                        "Enter a number between 1 and {}, or leave blank to skip.",
                        question.choices.len()
                    )?,
                }
            }
        }

        if !session.is_submit_allowed() {
            writeln!(out, "\nNo answers selected; nothing to submit.")?;
            return Ok(None);
        }

        writeln!(out, "\n{}", text.finish)?;
        let snapshot = session.submit()?;
        let Some(result) = snapshot.result else {
            return Ok(None);
        };

        writeln!(out, "{}: {} / {}", text.score_label, result.score, result.total)?;
        writeln!(out, "{}", text.verdict_message(result.verdict()))?;
        for (index, question) in session.feedback().iter().enumerate() {
            writeln!(out, "\n{}. {}", index + 1, question.text)?;
            for choice in &question.choices {
                writeln!(out, "  {} {}", marker(choice.feedback), choice.text)?;
            }
        }

        write!(out, "\n{}? [y/N] ", text.retry)?;
        out.flush()?;
        match read_line(input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {
                session.reset()?;
                writeln!(out)?;
            }
            _ => return Ok(Some(result)),
        }
    }
}

/// Next trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn marker(feedback: ChoiceFeedback) -> &'static str {
    match feedback {
        ChoiceFeedback::CorrectSelected => "[✓]",
        ChoiceFeedback::IncorrectSelected => "[✗]",
        ChoiceFeedback::MissedCorrect => "( ✓ )",
        ChoiceFeedback::Selected => "[•]",
        ChoiceFeedback::Neutral | ChoiceFeedback::Dimmed => "   ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use orthoquiz_core::locale::Language;
    use orthoquiz_core::{Choice, Question};

    fn quiz() -> Quiz {
        Quiz {
            id: "feasts".into(),
            title: "Great Feasts".into(),
            lesson_id: None,
            questions: vec![
                Question {
                    id: "q1".into(),
                    text: "When is Timkat celebrated?".into(),
                    choices: vec![
                        Choice::new("c1", "January", true),
                        Choice::new("c2", "June", false),
                    ],
                },
                Question {
                    id: "q2".into(),
                    text: "Meskel commemorates the finding of what?".into(),
                    choices: vec![
                        Choice::new("c3", "The True Cross", true),
                        Choice::new("c4", "The Ark", false),
                    ],
                },
            ],
        }
    }

    fn play(input: &str) -> (Option<SubmissionResult>, String) {
        let text = UiText::for_language(Language::En);
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run_session(quiz(), text, &mut reader, &mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn answers_all_and_submits() {
        let (result, out) = play("1\n1\nn\n");
        let result = result.unwrap();
        assert_eq!((result.score, result.total), (2, 2));
        assert!(out.contains("Final Score: 2 / 2"));
        assert!(out.contains("Excellent! You've mastered this lesson."));
        assert!(out.contains("[✓] January"));
    }

    #[test]
    fn skipped_question_counts_zero() {
        let (result, out) = play("2\n\n\n");
        assert_eq!(result.unwrap().score, 0);
        assert!(out.contains("[✗] June"));
        assert!(out.contains("( ✓ ) The True Cross"));
    }

    #[test]
    fn invalid_input_is_reprompted() {
        let (result, out) = play("9\nabc\n1\n2\n");
        assert!(out.contains("Enter a number between 1 and 2"));
        assert_eq!(result.unwrap().score, 1);
    }

    #[test]
    fn nothing_answered_is_not_submitted() {
        let (result, out) = play("\n\n");
        assert!(result.is_none());
        assert!(out.contains("nothing to submit"));
        assert!(!out.contains("Final Score"));
    }

    #[test]
    fn retry_resets_the_session() {
        let (result, out) = play("2\n2\ny\n1\n1\n\n");
        assert_eq!(result.unwrap().score, 2);
        assert!(out.contains("Final Score: 0 / 2"));
        assert!(out.contains("Final Score: 2 / 2"));
    }

    #[test]
    fn end_of_input_submits_what_was_answered() {
        let (result, _) = play("1\n");
        assert_eq!(result.unwrap().score, 1);
    }
}
