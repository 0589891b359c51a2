//! The `learnease plan` command.

use std::path::PathBuf;

use anyhow::Result;

use learnease_core::analysis::analyze_quiz;
use learnease_core::planner::{effective_days, effective_hours, generate_study_plan};
use learnease_core::quiz::{load_quiz_directory, parse_quiz_file};
use learnease_core::report::{PlanReport, QuizSummary};
use learnease_report::html::write_html_report;
use learnease_report::markdown::write_markdown_report;

use crate::config::load_config_from;

pub fn execute(
    quiz_path: PathBuf,
    hours_per_day: Option<f64>,
    days: Option<u32>,
    output: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

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

    // Flags win over config; both pass through the planner clamps so the
    // report records the values the plan was actually built with.
    let hours = effective_hours(hours_per_day.or(Some(config.default_hours_per_day)));
    let days = effective_days(days.or(Some(config.default_days)));
    let output = output.unwrap_or(config.output_dir);
    let format = format.unwrap_or(config.default_format);

    for session in &sessions {
        eprintln!(
            "learnease v0.1.0 — Planning {} days for {} ({} questions)",
            days,
            session.name,
            session.questions.len()
        );

        let outcome = session.classify();
        let analyses = analyze_quiz(&outcome.questions, &outcome.answers);
        let plan = generate_study_plan(&analyses, Some(hours), Some(days));
        let report = PlanReport::new(
            QuizSummary::from_session(session, &outcome),
            analyses,
            plan,
            hours,
            days,
        );

        // Print summary tables
        print_summary(&report);
        print_schedule(&report);

        // Save outputs
        std::fs::create_dir_all(&output)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

        let formats: Vec<&str> = if format == "all" {
            vec!["json", "markdown", "html"]
        } else {
            format.split(',').collect()
        };

        for fmt in &formats {
            match *fmt {
                "json" => {
                    let path = output.join(format!("plan-{}-{timestamp}.json", session.id));
                    report.save_json(&path)?;
                    eprintln!("Results saved to: {}", path.display());
                }
                "markdown" | "md" => {
                    let path = output.join(format!("plan-{}-{timestamp}.md", session.id));
                    write_markdown_report(&report, &path)?;
                    eprintln!("Markdown report: {}", path.display());
                }
                "html" => {
                    let path = output.join(format!("plan-{}-{timestamp}.html", session.id));
                    write_html_report(&report, &path)?;
                    eprintln!("HTML report: {}", path.display());
                }
                _ => {
                    eprintln!("Unknown format: {fmt}");
                }
            }
        }
        eprintln!();
    }

    Ok(())
}

fn print_summary(report: &PlanReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Subject", "Overall", "Priority", "Weak", "Strong"]);

    for analysis in &report.analyses {
        let weakest = analysis
            .weak_topics
            .first()
            .map(|t| t.topic.name())
            .unwrap_or("-");
        table.add_row(vec![
            Cell::new(analysis.subject),
            Cell::new(format!("{:.2}", analysis.overall_score)),
            Cell::new(format!("{:.2}", analysis.priority)),
            Cell::new(format!(
                "{} (weakest: {})",
                analysis.weak_topics.len(),
                weakest
            )),
            Cell::new(analysis.strong_topics.len()),
        ]);
    }

    eprintln!("\n{table}");
}

fn print_schedule(report: &PlanReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Day", "Minutes", "Topics"]);

    for day in &report.plan {
        let minutes: u32 = day.sessions.iter().map(|s| s.duration_minutes).sum();
        let topics = if day.sessions.is_empty() {
            "-".to_string()
        } else {
            day.sessions
                .iter()
                .map(|s| s.topic.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            Cell::new(day.day),
            Cell::new(minutes),
            Cell::new(topics),
        ]);
    }

    eprintln!("{table}");
}
