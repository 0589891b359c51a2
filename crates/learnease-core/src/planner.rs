//! Day-by-day study plan allocation.
//!
//! Distributes a fixed daily minute budget across weak topics by priority
//! weight, every day scanning the same globally ranked list. Leftover time
//! goes to one review session on an already-strong topic. Like the rest of
//! the pipeline this never fails; with no weak topics the plan degrades to
//! review-only or empty days.

use serde::{Deserialize, Serialize};

use crate::analysis::{SubjectAnalysis, TopicScore};
use crate::resources::{resources_for, tasks_for, REVIEW_TASKS};
use crate::syllabus::{Subject, Topic};

/// Study hours per day assumed when the caller supplies none.
pub const DEFAULT_HOURS_PER_DAY: f64 = 2.0;
/// Plan length assumed when the caller supplies none.
pub const DEFAULT_DAYS: u32 = 7;

const MIN_SESSION_MINUTES: u32 = 30;
const MIN_ALLOCATION_MINUTES: u32 = 20;
const REVIEW_CAP_MINUTES: u32 = 45;
/// Shares are inflated past a fair split; the running budget caps the total.
const ALLOCATION_OVERSHOOT: f64 = 1.2;

/// One study block inside a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub subject: Subject,
    pub topic: Topic,
    /// Focus area within the chapter, when one stands out as weakest.
    #[serde(default)]
    pub subtopic: Option<String>,
    pub duration_minutes: u32,
    pub tasks: Vec<String>,
    pub resources: Vec<String>,
}

/// One planned day, sessions in allocation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDay {
    pub day: u32,
    pub sessions: Vec<StudySession>,
}

/// The full plan: one entry per requested day, numbered from 1.
pub type StudyPlan = Vec<StudyDay>;

struct WeakEntry<'a> {
    score: &'a TopicScore,
    priority_score: f64,
}

/// Daily study hours actually used by the planner: default 2, clamped to
/// [1, 10], NaN counts as absent.
pub fn effective_hours(hours_per_day: Option<f64>) -> f64 {
    match hours_per_day {
        Some(h) if !h.is_nan() => h.clamp(1.0, 10.0),
        _ => DEFAULT_HOURS_PER_DAY,
    }
}

/// Plan length actually used by the planner: default 7, clamped to [1, 14].
pub fn effective_days(days: Option<u32>) -> u32 {
    days.map_or(DEFAULT_DAYS, |d| d.clamp(1, 14))
}

/// Generate a study plan from ranked subject analyses.
///
/// Inputs pass through [`effective_hours`] and [`effective_days`] first.
/// Identical inputs produce bit-identical plans.
pub fn generate_study_plan(
    analyses: &[SubjectAnalysis],
    hours_per_day: Option<f64>,
    days: Option<u32>,
) -> StudyPlan {
    let hours = effective_hours(hours_per_day);
    let days = effective_days(days);
    let daily_minutes = (hours * 60.0).round() as u32;

    // Weak topics across all subjects, highest priority first. The same
    // ranking is replayed every day.
    let mut entries: Vec<WeakEntry<'_>> = analyses
        .iter()
        .flat_map(|analysis| {
            analysis.weak_topics.iter().map(|score| WeakEntry {
                score,
                priority_score: (1.0 - score.normalized_score) * analysis.priority,
            })
        })
        .filter(|entry| entry.priority_score > 0.0)
        .collect();
    entries.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    let total_priority: f64 = entries.iter().map(|e| e.priority_score).sum();

    let review_topic = analyses
        .iter()
        .find(|a| !a.strong_topics.is_empty())
        .map(|a| a.strong_topics[0].topic);

    (1..=days)
        .map(|day| {
            let mut remaining = daily_minutes;
            let mut sessions = Vec::new();

            for entry in &entries {
                if remaining == 0 {
                    break;
                }
                let share = entry.priority_score / total_priority;
                let ideal = (share * f64::from(daily_minutes) * ALLOCATION_OVERSHOOT).round() as u32;
                let allocation = ideal.max(MIN_SESSION_MINUTES).min(remaining);
                if allocation < MIN_ALLOCATION_MINUTES {
                    continue;
                }
                sessions.push(build_session(entry.score, allocation));
                remaining -= allocation;
            }

            if remaining > MIN_ALLOCATION_MINUTES {
                if let Some(topic) = review_topic {
                    sessions.push(review_session(topic, remaining.min(REVIEW_CAP_MINUTES)));
                }
            }

            StudyDay { day, sessions }
        })
        .collect()
}

/// Build a focused session for a weak topic.
fn build_session(score: &TopicScore, duration_minutes: u32) -> StudySession {
    // First strict minimum wins, so with all-zero subtopics the first
    // declared one is picked.
    let subtopic = score
        .subtopics
        .iter()
        .reduce(|best, cur| if cur.score < best.score { cur } else { best })
        .map(|s| s.name.clone());

    let topic = score.topic;
    StudySession {
        subject: topic.subject(),
        topic,
        tasks: tasks_for(topic, subtopic.as_deref()),
        resources: resources_for(topic).iter().map(|r| r.to_string()).collect(),
        subtopic,
        duration_minutes,
    }
}

fn review_session(topic: Topic, duration_minutes: u32) -> StudySession {
    StudySession {
        subject: topic.subject(),
        topic,
        subtopic: None,
        duration_minutes,
        tasks: REVIEW_TASKS.iter().map(|t| t.to_string()).collect(),
        resources: resources_for(topic).iter().map(|r| r.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_quiz, SubtopicScore};
    use crate::syllabus::{Difficulty, PhysicsTopic};

    fn topic_score(topic: Topic, normalized_score: f64, question_count: u32) -> TopicScore {
        TopicScore {
            topic,
            normalized_score,
            question_count,
            subtopics: topic
                .subtopics()
                .iter()
                .map(|&name| SubtopicScore {
                    name: name.to_string(),
                    score: 0.0,
                })
                .collect(),
        }
    }

    fn day_minutes(day: &StudyDay) -> u32 {
        day.sessions.iter().map(|s| s.duration_minutes).sum()
    }

    #[test]
    fn default_plan_has_seven_numbered_days() {
        let analyses = analyze_quiz(&[], &[]);
        let plan = generate_study_plan(&analyses, None, None);
        assert_eq!(plan.len(), 7);
        for (i, day) in plan.iter().enumerate() {
            assert_eq!(day.day, i as u32 + 1);
        }
    }

    #[test]
    fn days_clamp_to_the_valid_range() {
        let analyses = analyze_quiz(&[], &[]);
        assert_eq!(generate_study_plan(&analyses, None, Some(0)).len(), 1);
        assert_eq!(generate_study_plan(&analyses, None, Some(100)).len(), 14);
        assert_eq!(effective_days(None), 7);
        assert_eq!(effective_days(Some(3)), 3);
    }

    #[test]
    fn effective_hours_covers_the_documented_defaults() {
        assert_eq!(effective_hours(None), 2.0);
        assert_eq!(effective_hours(Some(f64::NAN)), 2.0);
        assert_eq!(effective_hours(Some(150.0)), 10.0);
        assert_eq!(effective_hours(Some(0.25)), 1.0);
        assert_eq!(effective_hours(Some(3.5)), 3.5);
    }

    #[test]
    fn hours_clamp_and_default() {
        let analyses = analyze_quiz(&[], &[]);

        // 150 clamps to 10 hours = 600 minutes.
        let plan = generate_study_plan(&analyses, Some(150.0), Some(1));
        assert!(day_minutes(&plan[0]) <= 600);
        assert!(day_minutes(&plan[0]) > 120);

        // NaN counts as absent: 2 hours = 120 minutes.
        let plan = generate_study_plan(&analyses, Some(f64::NAN), Some(1));
        assert!(day_minutes(&plan[0]) <= 120);
        assert!(!plan[0].sessions.is_empty());
    }

    #[test]
    fn daily_budget_is_never_exceeded() {
        let analyses = analyze_quiz(&[], &[]);
        for hours in [1.0_f64, 2.0, 3.5, 10.0] {
            let plan = generate_study_plan(&analyses, Some(hours), Some(5));
            let budget = (hours * 60.0).round() as u32;
            for day in &plan {
                assert!(day_minutes(day) <= budget, "hours={hours} day={}", day.day);
            }
        }
    }

    #[test]
    fn sessions_follow_priority_order() {
        let analyses = vec![SubjectAnalysis {
            subject: Subject::Physics,
            weak_topics: vec![
                topic_score(Topic::Physics(PhysicsTopic::Motion), 0.0, 4),
                topic_score(Topic::Physics(PhysicsTopic::Sound), 0.5, 2),
            ],
            strong_topics: vec![],
            overall_score: 0.25,
            priority: 1.0,
        }];

        let plan = generate_study_plan(&analyses, Some(2.0), Some(1));
        let sessions = &plan[0].sessions;
        assert!(sessions.len() >= 2);
        assert_eq!(sessions[0].topic, Topic::Physics(PhysicsTopic::Motion));
        assert_eq!(sessions[1].topic, Topic::Physics(PhysicsTopic::Sound));
        assert!(sessions[0].duration_minutes >= sessions[1].duration_minutes);
    }

    #[test]
    fn review_session_fills_leftover_budget() {
        // Nothing weak: the whole day is free, so a single capped review
        // session on the first strong topic appears.
        let analyses = vec![SubjectAnalysis {
            subject: Subject::Physics,
            weak_topics: vec![],
            strong_topics: vec![topic_score(Topic::Physics(PhysicsTopic::Motion), 0.9, 6)],
            overall_score: 0.9,
            priority: 0.12,
        }];

        let plan = generate_study_plan(&analyses, Some(2.0), Some(3));
        for day in &plan {
            assert_eq!(day.sessions.len(), 1);
            let review = &day.sessions[0];
            assert_eq!(review.topic, Topic::Physics(PhysicsTopic::Motion));
            assert_eq!(review.duration_minutes, 45);
            assert_eq!(review.tasks, REVIEW_TASKS);
            assert_eq!(review.subtopic, None);
        }
    }

    #[test]
    fn zero_priority_weak_topics_are_dropped() {
        let analyses = vec![SubjectAnalysis {
            subject: Subject::Physics,
            weak_topics: vec![topic_score(Topic::Physics(PhysicsTopic::Motion), 1.0, 2)],
            strong_topics: vec![],
            overall_score: 1.0,
            priority: 0.5,
        }];

        let plan = generate_study_plan(&analyses, Some(2.0), Some(1));
        assert!(plan[0].sessions.is_empty());
    }

    #[test]
    fn short_remainders_are_skipped_not_padded() {
        // Budget 60: the top entry takes round(2/3 * 60 * 1.2) = 48, the
        // second would get 12 < 20 and is skipped; 12 is also too little
        // for a review session.
        let analyses = vec![SubjectAnalysis {
            subject: Subject::Physics,
            weak_topics: vec![
                topic_score(Topic::Physics(PhysicsTopic::Motion), 0.0, 4),
                topic_score(Topic::Physics(PhysicsTopic::Sound), 0.5, 2),
            ],
            strong_topics: vec![topic_score(Topic::Physics(PhysicsTopic::Light), 0.8, 2)],
            overall_score: 0.25,
            priority: 2.0,
        }];

        let plan = generate_study_plan(&analyses, Some(1.0), Some(1));
        let sessions = &plan[0].sessions;
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].topic, Topic::Physics(PhysicsTopic::Motion));
        assert_eq!(sessions[0].duration_minutes, 48);
    }

    #[test]
    fn weak_sessions_carry_tasks_and_resources() {
        let analyses = vec![SubjectAnalysis {
            subject: Subject::Physics,
            weak_topics: vec![topic_score(Topic::Physics(PhysicsTopic::Motion), 0.2, 4)],
            strong_topics: vec![],
            overall_score: 0.2,
            priority: 1.0,
        }];

        let plan = generate_study_plan(&analyses, Some(2.0), Some(1));
        let session = &plan[0].sessions[0];
        assert_eq!(session.subject, Subject::Physics);
        // All subtopics tie at zero, so the first declared one is chosen.
        assert_eq!(session.subtopic.as_deref(), Some("Scalar vs Vector"));
        assert_eq!(
            session.tasks[0],
            "Solve 5 numerical problems from Scalar vs Vector"
        );
        assert!(session.resources.iter().any(|r| r.contains("Chapter 2")));
        assert!(session.duration_minutes >= 30);
    }

    #[test]
    fn weakest_subtopic_wins_with_first_on_ties() {
        let mut score = topic_score(Topic::Physics(PhysicsTopic::Motion), 0.3, 6);
        score.subtopics[0].score = 0.5;
        score.subtopics[1].score = 0.1;
        score.subtopics[2].score = 0.1;

        let session = build_session(&score, 30);
        assert_eq!(session.subtopic.as_deref(), Some("Equations of Motion"));
    }

    #[test]
    fn plan_generation_is_deterministic() {
        let questions = vec![
            crate::quiz::ClassifiedQuestion {
                text: "Calculate velocity".into(),
                subject: Subject::Physics,
                topic: Topic::Physics(PhysicsTopic::Motion),
                subtopic: None,
                difficulty: Difficulty::Hard,
            },
            crate::quiz::ClassifiedQuestion {
                text: "Define echo".into(),
                subject: Subject::Physics,
                topic: Topic::Physics(PhysicsTopic::Sound),
                subtopic: Some("Wave Properties".into()),
                difficulty: Difficulty::Easy,
            },
        ];
        let answers = vec![
            crate::quiz::AnswerRecord {
                question_index: 0,
                is_correct: false,
                time_spent_secs: 30,
            },
            crate::quiz::AnswerRecord {
                question_index: 1,
                is_correct: true,
                time_spent_secs: 30,
            },
        ];

        let analyses = analyze_quiz(&questions, &answers);
        let first =
            serde_json::to_string(&generate_study_plan(&analyses, Some(1.5), Some(4))).unwrap();
        let second =
            serde_json::to_string(&generate_study_plan(&analyses, Some(1.5), Some(4))).unwrap();
        assert_eq!(first, second);
    }
}
