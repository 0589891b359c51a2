//! learnease CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "learnease", version, about = "Quiz-driven study plan generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a study plan from quiz results
    Plan {
        /// Path to .toml quiz file or directory
        #[arg(long)]
        quiz: PathBuf,

        /// Study hours per day (clamped to 1-10)
        #[arg(long)]
        hours_per_day: Option<f64>,

        /// Plan length in days (clamped to 1-14)
        #[arg(long)]
        days: Option<u32>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, markdown, html, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Analyze quiz performance without generating a plan
    Analyze {
        /// Path to .toml quiz file or directory
        #[arg(long)]
        quiz: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Classify a question text or every question in a quiz
    Classify {
        /// The question text
        #[arg(long)]
        text: Option<String>,

        /// Path to a .toml quiz file
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Score a saved plan against a follow-up quiz
    Evaluate {
        /// Plan report JSON
        #[arg(long)]
        report: PathBuf,

        /// Follow-up quiz file
        #[arg(long)]
        followup: PathBuf,

        /// Progress log TOML
        #[arg(long)]
        progress: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create starter config and example quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("learnease=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan {
            quiz,
            hours_per_day,
            days,
            output,
            format,
            config,
        } => commands::plan::execute(quiz, hours_per_day, days, output, format, config),
        Commands::Analyze { quiz, format } => commands::analyze::execute(quiz, format),
        Commands::Classify { text, quiz, format } => {
            commands::classify::execute(text, quiz, format)
        }
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Evaluate {
            report,
            followup,
            progress,
            format,
        } => commands::evaluate::execute(report, followup, progress, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
