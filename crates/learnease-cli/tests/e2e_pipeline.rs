//! End-to-end pipeline tests: plan a quiz, then evaluate the saved plan
//! against a follow-up quiz.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn learnease() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("learnease").unwrap()
}

const BASELINE_QUIZ: &str = r#"[quiz]
id = "midterm"
name = "Midterm Check"

[[questions]]
text = "Calculate the velocity of a train covering 120 km in 2 hours"
options = ["30 km/h", "60 km/h", "240 km/h"]
selected = "30 km/h"
correct = "60 km/h"

[[questions]]
text = "Explain the difference between speed and acceleration"
options = ["They are the same", "Speed is scalar, acceleration is rate of velocity change"]
selected = "They are the same"
correct = "Speed is scalar, acceleration is rate of velocity change"

[[questions]]
text = "Define frequency of a sound wave"
options = ["Oscillations per second", "Distance per oscillation"]
selected = "Oscillations per second"
correct = "Oscillations per second"

[[questions]]
text = "Name the powerhouse of the cell"
options = ["Nucleus", "Mitochondria"]
selected = "Mitochondria"
correct = "Mitochondria"
"#;

const FOLLOWUP_QUIZ: &str = r#"[quiz]
id = "midterm-retake"
name = "Midterm Retake"

[[questions]]
text = "Calculate the velocity of a train covering 120 km in 2 hours"
options = ["30 km/h", "60 km/h", "240 km/h"]
selected = "60 km/h"
correct = "60 km/h"

[[questions]]
text = "Explain the difference between speed and acceleration"
options = ["They are the same", "Speed is scalar, acceleration is rate of velocity change"]
selected = "Speed is scalar, acceleration is rate of velocity change"
correct = "Speed is scalar, acceleration is rate of velocity change"

[[questions]]
text = "Define frequency of a sound wave"
options = ["Oscillations per second", "Distance per oscillation"]
selected = "Oscillations per second"
correct = "Oscillations per second"

[[questions]]
text = "Name the powerhouse of the cell"
options = ["Nucleus", "Mitochondria"]
selected = "Mitochondria"
correct = "Mitochondria"
"#;

const PROGRESS_LOG: &str = r#"[[session_completion]]
day = 1
completed = true
time_spent_minutes = 60

[[session_completion]]
day = 2
completed = true
time_spent_minutes = 45

[feedback]
rating = 4.5
comments = "Focused sessions helped"
"#;

struct Pipeline {
    _dir: TempDir,
    baseline: PathBuf,
    followup: PathBuf,
    progress: PathBuf,
    report: PathBuf,
}

/// Run `plan` on the baseline quiz and locate the JSON report it wrote.
fn run_plan() -> Pipeline {
    let dir = TempDir::new().unwrap();
    let baseline = dir.path().join("baseline.toml");
    let followup = dir.path().join("followup.toml");
    let progress = dir.path().join("progress.toml");
    std::fs::write(&baseline, BASELINE_QUIZ).unwrap();
    std::fs::write(&followup, FOLLOWUP_QUIZ).unwrap();
    std::fs::write(&progress, PROGRESS_LOG).unwrap();

    let results = dir.path().join("results");
    learnease()
        .arg("plan")
        .arg("--quiz")
        .arg(&baseline)
        .arg("--hours-per-day")
        .arg("2")
        .arg("--days")
        .arg("5")
        .arg("--output")
        .arg(&results)
        .assert()
        .success()
        .stderr(predicate::str::contains("Planning 5 days"));

    let report = std::fs::read_dir(&results)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().is_some_and(|ext| ext == "json"))
        .expect("plan should have written a JSON report");

    Pipeline {
        _dir: dir,
        baseline,
        followup,
        progress,
        report,
    }
}

#[test]
fn plan_then_evaluate_pipeline() {
    let pipeline = run_plan();

    learnease()
        .arg("evaluate")
        .arg("--report")
        .arg(&pipeline.report)
        .arg("--followup")
        .arg(&pipeline.followup)
        .arg("--progress")
        .arg(&pipeline.progress)
        .assert()
        .success()
        .stdout(predicate::str::contains("Precision"))
        .stdout(predicate::str::contains("Improvement"));
}

#[test]
fn evaluate_json_has_confusion_counts() {
    let pipeline = run_plan();

    learnease()
        .arg("evaluate")
        .arg("--report")
        .arg(&pipeline.report)
        .arg("--followup")
        .arg(&pipeline.followup)
        .arg("--progress")
        .arg(&pipeline.progress)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"true_positives\""))
        .stdout(predicate::str::contains("\"retention_rate\""));
}

#[test]
fn evaluate_markdown_renders_table() {
    let pipeline = run_plan();

    learnease()
        .arg("evaluate")
        .arg("--report")
        .arg(&pipeline.report)
        .arg("--followup")
        .arg(&pipeline.followup)
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Precision |"))
        .stdout(predicate::str::contains("Confusion:"));
}

#[test]
fn analyze_reports_weak_subjects() {
    let pipeline = run_plan();

    learnease()
        .arg("analyze")
        .arg("--quiz")
        .arg(&pipeline.baseline)
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics"))
        .stdout(predicate::str::contains("Motion"));
}

#[test]
fn plan_handles_quiz_directory() {
    let dir = TempDir::new().unwrap();
    let quizzes = dir.path().join("quizzes");
    std::fs::create_dir_all(&quizzes).unwrap();
    std::fs::write(quizzes.join("baseline.toml"), BASELINE_QUIZ).unwrap();
    std::fs::write(quizzes.join("followup.toml"), FOLLOWUP_QUIZ).unwrap();

    let results = dir.path().join("results");
    learnease()
        .arg("plan")
        .arg("--quiz")
        .arg(&quizzes)
        .arg("--days")
        .arg("2")
        .arg("--output")
        .arg(&results)
        .assert()
        .success()
        .stderr(predicate::str::contains("Midterm Check"))
        .stderr(predicate::str::contains("Midterm Retake"));

    let reports = std::fs::read_dir(&results)
        .unwrap()
        .filter_map(|e| e.ok())
        .count();
    assert_eq!(reports, 2);
}
