//! The `learnease init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create learnease.toml
    if std::path::Path::new("learnease.toml").exists() {
        println!("learnease.toml already exists, skipping.");
    } else {
        std::fs::write("learnease.toml", SAMPLE_CONFIG)?;
        println!("Created learnease.toml");
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
    println!("  1. Record your quiz answers in quizzes/example.toml");
    println!("  2. Run: learnease validate --quiz quizzes/example.toml");
    println!("  3. Run: learnease plan --quiz quizzes/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# learnease configuration

default_hours_per_day = 2.0
default_days = 7
output_dir = "./learnease-results"
default_format = "json"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
id = "example"
name = "Example Science Quiz"
description = "A short mixed quiz to get started"

[[questions]]
text = "Define velocity and state its SI unit"
options = ["m/s", "m/s^2", "N"]
selected = "m/s"
correct = "m/s"

[[questions]]
text = "Calculate the acceleration of a car going from rest to 20 m/s in 4 s"
options = ["4 m/s^2", "5 m/s^2", "80 m/s^2"]
selected = "4 m/s^2"
correct = "5 m/s^2"

[[questions]]
text = "Explain why sublimation is a change of state"
options = ["Solid to gas directly", "Liquid to gas"]
selected = "Solid to gas directly"
correct = "Solid to gas directly"

[[questions]]
text = "Name the organelle known as the powerhouse of the cell"
options = ["Nucleus", "Mitochondria", "Ribosome"]
selected = "Mitochondria"
correct = "Mitochondria"

[[questions]]
text = "Describe the function of xylem tissue in plants"
correct = "Transports water"
"#;
