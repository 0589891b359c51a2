//! The `learnease evaluate` command.

use std::path::PathBuf;

use anyhow::Result;

use learnease_core::analysis::analyze_quiz;
use learnease_core::evaluation::ProgressLog;
use learnease_core::quiz::parse_quiz_file;
use learnease_core::report::PlanReport;

pub fn execute(
    report_path: PathBuf,
    followup_path: PathBuf,
    progress_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let report = PlanReport::load_json(&report_path)?;

    let session = parse_quiz_file(&followup_path)?;
    let outcome = session.classify();
    let followup = analyze_quiz(&outcome.questions, &outcome.answers);

    let progress = match &progress_path {
        Some(path) => ProgressLog::load(path)?,
        None => ProgressLog::default(),
    };

    let metrics = report.evaluate(&followup, &progress);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", metrics.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        _ => {
            println!("Evaluation of plan {} against {}:", report.id, session.name);
            println!("  Precision:    {:.3}", metrics.precision);
            println!("  Recall:       {:.3}", metrics.recall);
            println!("  F1 score:     {:.3}", metrics.f1_score);
            println!("  Improvement:  {:.1}%", metrics.improvement_rate);
            println!("  Retention:    {:.1}%", metrics.retention_rate);
            println!("  Engagement:   {:.1}", metrics.engagement_score);
            println!("  Satisfaction: {:.1}", metrics.satisfaction);
            println!("  Coverage:     {:.1}%", metrics.recommendation_coverage);
            println!(
                "  Confusion:    {} TP / {} FP / {} FN / {} TN",
                metrics.true_positives,
                metrics.false_positives,
                metrics.false_negatives,
                metrics.true_negatives
            );
        }
    }

    Ok(())
}
