//! The `learnease validate` command.

use std::path::PathBuf;

use anyhow::Result;

use learnease_core::quiz::{load_quiz_directory, parse_quiz_file, validate_quiz};

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let sessions = if quiz_path.is_dir() {
        load_quiz_directory(&quiz_path)?
    } else {
        vec![parse_quiz_file(&quiz_path)?]
    };

    let mut total_warnings = 0;

    for session in &sessions {
        println!(
            "Quiz: {} ({} questions)",
            session.name,
            session.questions.len()
        );

        let warnings = validate_quiz(session);
        for w in &warnings {
            let prefix = w
                .question
                .map(|i| format!("  [question {i}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
