//! Plan report types with JSON persistence.
//!
//! A report captures one full pipeline run: which quiz was analyzed, the
//! per-subject analyses, and the generated plan, so the schedule can be
//! re-rendered or evaluated against a follow-up quiz later.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::SubjectAnalysis;
use crate::planner::StudyPlan;
use crate::quiz::{QuizOutcome, QuizSession};

/// A complete study-plan report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the quiz the plan was generated from.
    pub quiz: QuizSummary,
    /// Per-subject analyses, highest priority first.
    pub analyses: Vec<SubjectAnalysis>,
    /// The generated day-by-day plan.
    pub plan: StudyPlan,
    /// Effective (clamped) hours per day the plan was built with.
    pub hours_per_day: f64,
    /// Effective (clamped) plan length.
    pub days: u32,
}

/// Summary of a quiz session (without the full question texts).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
    pub answered_count: usize,
    pub correct_count: usize,
}

impl QuizSummary {
    pub fn from_session(session: &QuizSession, outcome: &QuizOutcome) -> Self {
        QuizSummary {
            id: session.id.clone(),
            name: session.name.clone(),
            question_count: outcome.questions.len(),
            answered_count: outcome.answers.len(),
            correct_count: outcome.answers.iter().filter(|a| a.is_correct).count(),
        }
    }
}

impl PlanReport {
    /// Assemble a report with a fresh id and timestamp.
    pub fn new(
        quiz: QuizSummary,
        analyses: Vec<SubjectAnalysis>,
        plan: StudyPlan,
        hours_per_day: f64,
        days: u32,
    ) -> Self {
        PlanReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz,
            analyses,
            plan,
            hours_per_day,
            days,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: PlanReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Names of every weak topic in the report, highest-priority subject
    /// first. These are the plan's recommendations.
    pub fn recommended_topics(&self) -> Vec<&str> {
        self.analyses
            .iter()
            .flat_map(|a| a.weak_topics.iter().map(|t| t.topic.name()))
            .collect()
    }
}
