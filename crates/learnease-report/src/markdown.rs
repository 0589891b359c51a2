//! Markdown report generator.
//!
//! Renders a plan report as a readable document: quiz summary, subject
//! overview, day-by-day schedule tables, and a deduplicated resource list.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

use learnease_core::analysis::TopicScore;
use learnease_core::report::PlanReport;

/// Generate a markdown document from a plan report.
pub fn generate_markdown(report: &PlanReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Study Plan: {}\n\n", report.quiz.name));
    md.push_str(&format!(
        "**Summary:** {} days at {:.1} h/day | quiz `{}`: {}/{} answered, {} correct | generated {}\n\n",
        report.days,
        report.hours_per_day,
        report.quiz.id,
        report.quiz.answered_count,
        report.quiz.question_count,
        report.quiz.correct_count,
        format_timestamp(&report.created_at)
    ));

    md.push_str("### Subjects\n\n");
    md.push_str("| Subject | Overall | Priority | Weak topics | Strong topics |\n");
    md.push_str("|---------|---------|----------|-------------|---------------|\n");
    for analysis in &report.analyses {
        md.push_str(&format!(
            "| {} | {:.2} | {:.2} | {} | {} |\n",
            analysis.subject,
            analysis.overall_score,
            analysis.priority,
            topic_names(&analysis.weak_topics),
            topic_names(&analysis.strong_topics),
        ));
    }
    md.push('\n');

    md.push_str("### Schedule\n\n");
    for day in &report.plan {
        md.push_str(&format!("#### Day {}\n\n", day.day));
        if day.sessions.is_empty() {
            md.push_str("_No sessions scheduled._\n\n");
            continue;
        }
        md.push_str("| Subject | Topic | Focus | Minutes | Tasks |\n");
        md.push_str("|---------|-------|-------|---------|-------|\n");
        for session in &day.sessions {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                session.subject,
                session.topic.name(),
                session.subtopic.as_deref().unwrap_or("-"),
                session.duration_minutes,
                session.tasks.join("; "),
            ));
        }
        md.push('\n');
    }

    let resources = collect_resources(report);
    if !resources.is_empty() {
        md.push_str("### Resources\n\n");
        for resource in resources {
            md.push_str(&format!("- {resource}\n"));
        }
        md.push('\n');
    }

    md
}

/// Write a markdown report to a file.
pub fn write_markdown_report(report: &PlanReport, path: &Path) -> Result<()> {
    let markdown = generate_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, markdown)?;
    Ok(())
}

fn format_timestamp(created_at: &DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn topic_names(topics: &[TopicScore]) -> String {
    if topics.is_empty() {
        return "-".to_string();
    }
    topics
        .iter()
        .map(|t| t.topic.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every resource referenced by the plan, first occurrence first.
fn collect_resources(report: &PlanReport) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for day in &report.plan {
        for session in &day.sessions {
            for resource in &session.resources {
                if !seen.contains(&resource.as_str()) {
                    seen.push(resource);
                }
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnease_core::analysis::analyze_quiz;
    use learnease_core::planner::generate_study_plan;
    use learnease_core::quiz::parse_quiz_str;
    use learnease_core::report::QuizSummary;
    use std::path::PathBuf;

    const QUIZ_TOML: &str = r#"
[quiz]
id = "sound-check"
name = "Sound Check"

[[questions]]
text = "Define frequency of a sound wave"
selected = "Cycles per second"
correct = "Cycles per second"

[[questions]]
text = "Calculate the wavelength of a wave with speed 340 m/s"
selected = "1 m"
correct = "2 m"
"#;

    fn build_report() -> PlanReport {
        let session = parse_quiz_str(QUIZ_TOML, &PathBuf::from("test.toml")).unwrap();
        let outcome = session.classify();
        let analyses = analyze_quiz(&outcome.questions, &outcome.answers);
        let plan = generate_study_plan(&analyses, Some(2.0), Some(5));
        PlanReport::new(
            QuizSummary::from_session(&session, &outcome),
            analyses,
            plan,
            2.0,
            5,
        )
    }

    #[test]
    fn markdown_contains_every_day_and_topic() {
        let report = build_report();
        let md = generate_markdown(&report);

        assert!(md.contains("# Study Plan: Sound Check"));
        for day in &report.plan {
            assert!(md.contains(&format!("#### Day {}", day.day)));
            for session in &day.sessions {
                assert!(md.contains(session.topic.name()));
            }
        }
    }

    #[test]
    fn markdown_summarizes_quiz_and_subjects() {
        let report = build_report();
        let md = generate_markdown(&report);

        assert!(md.contains("2/2 answered, 1 correct"));
        assert!(md.contains("| Physics |"));
        assert!(md.contains("| Chemistry |"));
        assert!(md.contains("| Biology |"));
    }

    #[test]
    fn markdown_lists_resources_once() {
        let report = build_report();
        let md = generate_markdown(&report);

        assert!(md.contains("### Resources"));
        let textbook = "- Maharashtra State Board Textbook\n";
        assert_eq!(md.matches(textbook).count(), 1);
    }

    #[test]
    fn markdown_report_write_to_file() {
        let report = build_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("plan.md");

        write_markdown_report(&report, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("### Schedule"));
    }
}
