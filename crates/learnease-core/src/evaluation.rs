//! Recommendation quality metrics.
//!
//! Measures how well a saved plan's recommendations held up against a
//! follow-up quiz: confusion counts over the full syllabus, precision and
//! recall of the weak-topic predictions, score improvement, and how much of
//! the plan the student actually worked through.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::{SubjectAnalysis, TopicScore, WEAK_TOPIC_THRESHOLD};
use crate::report::PlanReport;
use crate::syllabus::{Subject, Topic};

/// Minutes one planned session is assumed to run when scoring engagement.
const ASSUMED_SESSION_MINUTES: f64 = 60.0;

/// Quality metrics for one plan, judged against a follow-up quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    /// Of the recommended topics, the fraction that were still weak.
    pub precision: f64,
    /// Of the still-weak topics, the fraction that had been recommended.
    pub recall: f64,
    pub f1_score: f64,
    /// Percent change of the summed per-subject scores since the plan.
    pub improvement_rate: f64,
    /// Percent of logged sessions marked completed.
    pub retention_rate: f64,
    /// Student feedback rating, 0 when none was given.
    pub satisfaction: f64,
    /// Blend of completion rate and time-on-task, out of 100.
    pub engagement_score: f64,
    pub true_positives: u32,
    pub false_positives: u32,
    pub false_negatives: u32,
    pub true_negatives: u32,
    /// Recommendations issued per still-weak topic, as a percentage.
    pub recommendation_coverage: f64,
}

/// Self-reported study progress, loaded from a TOML log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressLog {
    #[serde(default)]
    pub session_completion: Vec<SessionCompletion>,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

/// Whether one planned session was done, and how long it really took.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCompletion {
    pub day: u32,
    pub completed: bool,
    #[serde(default)]
    pub time_spent_minutes: u32,
}

/// Free-form student feedback on the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub rating: f64,
    #[serde(default)]
    pub comments: String,
}

impl ProgressLog {
    /// Load a progress log from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read progress log: {}", path.display()))?;
        let log = toml::from_str(&content)
            .with_context(|| format!("failed to parse TOML: {}", path.display()))?;
        Ok(log)
    }
}

impl PlanReport {
    /// Judge this plan's recommendations against a follow-up quiz analysis
    /// and an optional progress log.
    pub fn evaluate(&self, followup: &[SubjectAnalysis], progress: &ProgressLog) -> EvaluationMetrics {
        let recommended = self.recommended_topics();

        let mut true_positives = 0u32;
        let mut false_positives = 0u32;
        let mut false_negatives = 0u32;
        let mut true_negatives = 0u32;

        for topic in Subject::all().iter().flat_map(|s| s.topics()) {
            let was_recommended = recommended.contains(&topic.name());
            let still_weak = is_still_weak(followup, *topic);
            match (was_recommended, still_weak) {
                (true, true) => true_positives += 1,
                (true, false) => false_positives += 1,
                (false, true) => false_negatives += 1,
                (false, false) => true_negatives += 1,
            }
        }

        let precision = ratio(true_positives, true_positives + false_positives);
        let recall = ratio(true_positives, true_positives + false_negatives);
        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        let pre: f64 = self.analyses.iter().map(|a| a.overall_score).sum();
        let post: f64 = followup.iter().map(|a| a.overall_score).sum();
        let improvement_rate = if pre > 0.0 {
            (post - pre) / pre * 100.0
        } else {
            0.0
        };

        let total_sessions = progress.session_completion.len();
        let completed = progress
            .session_completion
            .iter()
            .filter(|s| s.completed)
            .count();
        let (retention_rate, engagement_score) = if total_sessions > 0 {
            let completion_rate = completed as f64 / total_sessions as f64;
            let time_spent: u32 = progress
                .session_completion
                .iter()
                .map(|s| s.time_spent_minutes)
                .sum();
            let time_ratio =
                f64::from(time_spent) / (total_sessions as f64 * ASSUMED_SESSION_MINUTES);
            (
                completion_rate * 100.0,
                completion_rate * 50.0 + time_ratio * 50.0,
            )
        } else {
            (0.0, 0.0)
        };

        let still_weak_total = true_positives + false_negatives;
        let recommendation_coverage = if still_weak_total > 0 {
            recommended.len() as f64 / f64::from(still_weak_total) * 100.0
        } else {
            0.0
        };

        let satisfaction = progress.feedback.as_ref().map_or(0.0, |f| f.rating);

        EvaluationMetrics {
            precision: round3(precision),
            recall: round3(recall),
            f1_score: round3(f1_score),
            improvement_rate: round1(improvement_rate),
            retention_rate: round1(retention_rate),
            satisfaction,
            engagement_score: round1(engagement_score),
            true_positives,
            false_positives,
            false_negatives,
            true_negatives,
            recommendation_coverage: round1(recommendation_coverage),
        }
    }
}

impl EvaluationMetrics {
    /// Format the metrics as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("## Plan Evaluation\n\n");
        md.push_str("| Metric | Value |\n");
        md.push_str("|--------|-------|\n");
        md.push_str(&format!("| Precision | {:.3} |\n", self.precision));
        md.push_str(&format!("| Recall | {:.3} |\n", self.recall));
        md.push_str(&format!("| F1 score | {:.3} |\n", self.f1_score));
        md.push_str(&format!("| Improvement | {:.1}% |\n", self.improvement_rate));
        md.push_str(&format!("| Retention | {:.1}% |\n", self.retention_rate));
        md.push_str(&format!("| Engagement | {:.1} |\n", self.engagement_score));
        md.push_str(&format!("| Satisfaction | {:.1} |\n", self.satisfaction));
        md.push_str(&format!(
            "| Coverage | {:.1}% |\n",
            self.recommendation_coverage
        ));
        md.push_str(&format!(
            "\nConfusion: {} TP / {} FP / {} FN / {} TN across {} syllabus topics\n",
            self.true_positives,
            self.false_positives,
            self.false_negatives,
            self.true_negatives,
            Subject::all().iter().map(|s| s.topics().len()).sum::<usize>()
        ));

        md
    }
}

/// A topic is still weak when the follow-up actually tested it and its
/// score stayed below the weak threshold. Untested topics are not counted
/// as weak here, unlike in analysis, because there is no evidence either
/// way.
fn is_still_weak(followup: &[SubjectAnalysis], topic: Topic) -> bool {
    topic_score(followup, topic)
        .is_some_and(|t| t.question_count > 0 && t.normalized_score < WEAK_TOPIC_THRESHOLD)
}

fn topic_score<'a>(analyses: &'a [SubjectAnalysis], topic: Topic) -> Option<&'a TopicScore> {
    analyses
        .iter()
        .flat_map(|a| a.weak_topics.iter().chain(&a.strong_topics))
        .find(|t| t.topic == topic)
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
