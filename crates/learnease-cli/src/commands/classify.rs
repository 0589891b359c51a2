//! The `learnease classify` command.

use std::path::PathBuf;

use anyhow::Result;

use learnease_core::classifier::{classify, Classification};
use learnease_core::quiz::parse_quiz_file;

pub fn execute(text: Option<String>, quiz: Option<PathBuf>, format: String) -> Result<()> {
    match (text, quiz) {
        (Some(text), _) => {
            let classification = classify(&text);
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&classification)?);
            } else {
                print_classification(&classification);
            }
        }
        (None, Some(path)) => {
            let session = parse_quiz_file(&path)?;
            let classifications: Vec<Classification> =
                session.questions.iter().map(|q| classify(&q.text)).collect();
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&classifications)?);
            } else {
                for (question, classification) in session.questions.iter().zip(&classifications) {
                    println!("Question:   {}", question.text);
                    print_classification(classification);
                    println!();
                }
            }
        }
        (None, None) => anyhow::bail!("pass --text or --quiz"),
    }

    Ok(())
}

fn print_classification(c: &Classification) {
    println!("Subject:    {}", c.subject);
    println!("Topic:      {}", c.topic);
    println!("Subtopic:   {}", c.subtopic.as_deref().unwrap_or("-"));
    println!("Difficulty: {}", c.difficulty);
}
