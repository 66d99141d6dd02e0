//! orthoquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "orthoquiz", version, about = "Lesson quiz player and grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate quiz files
    Validate {
        /// Path to a .toml/.json quiz or a directory of them
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Grade a scripted answer sheet against a quiz
    Grade {
        /// Quiz file
        #[arg(long)]
        quiz: PathBuf,

        /// Answer sheet mapping question id to choice id
        #[arg(long)]
        answers: PathBuf,

        /// Interface language: en, am
        #[arg(long)]
        lang: Option<String>,

        /// Output format: text, json, markdown, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Directory to save the attempt report in
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Take a quiz interactively
    Play {
        /// Quiz file
        #[arg(long, conflicts_with = "lesson")]
        quiz: Option<PathBuf>,

        /// Lesson id to fetch the quiz for
        #[arg(long)]
        lesson: Option<String>,

        /// Interface language: en, am
        #[arg(long)]
        lang: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Download lesson quizzes from the platform API
    Fetch {
        /// Lesson ids (comma-separated)
        #[arg(long)]
        lesson: String,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example quiz
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orthoquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Grade {
            quiz,
            answers,
            lang,
            format,
            output,
            config,
        } => commands::grade::execute(quiz, answers, lang, format, output, config),
        Commands::Play {
            quiz,
            lesson,
            lang,
            config,
        } => commands::play::execute(quiz, lesson, lang, config).await,
        Commands::Fetch {
            lesson,
            output,
            config,
        } => commands::fetch::execute(lesson, output, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
