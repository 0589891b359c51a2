//! The `learnease analyze` command.

use std::path::PathBuf;

use anyhow::Result;

use learnease_core::analysis::{analyze_quiz, SubjectAnalysis};
use learnease_core::quiz::{load_quiz_directory, parse_quiz_file};

pub fn execute(quiz_path: PathBuf, format: String) -> Result<()> {
    let sessions = if quiz_path.is_dir() {
        load_quiz_directory(&quiz_path)?
    } else {
        vec![parse_quiz_file(&quiz_path)?]
    };
    anyhow::ensure!(
        !sessions.is_empty(),
        "no quiz files found in {}",
        quiz_path.display()
    );

    for session in &sessions {
        let outcome = session.classify();
        let analyses = analyze_quiz(&outcome.questions, &outcome.answers);

        if format == "json" {
            println!("{}", serde_json::to_string_pretty(&analyses)?);
            continue;
        }

        println!(
            "Quiz: {} ({} questions, {} answered, {} correct)",
            session.name,
            outcome.questions.len(),
            outcome.answers.len(),
            outcome.answers.iter().filter(|a| a.is_correct).count()
        );
        print_analyses(&analyses);
        println!();
    }

    Ok(())
}

fn print_analyses(analyses: &[SubjectAnalysis]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Subject", "Overall", "Priority", "Strong", "Weak topics"]);

    for analysis in analyses {
        let weak = analysis
            .weak_topics
            .iter()
            .map(|t| format!("{} ({:.2})", t.topic.name(), t.normalized_score))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(analysis.subject),
            Cell::new(format!("{:.2}", analysis.overall_score)),
            Cell::new(format!("{:.2}", analysis.priority)),
            Cell::new(analysis.strong_topics.len()),
            Cell::new(if weak.is_empty() { "-".to_string() } else { weak }),
        ]);
    }

    println!("{table}");
}
