//! Performance analysis over classified quiz outcomes.
//!
//! Turns classified questions plus answer records into per-subject analyses:
//! normalized topic scores, weak/strong partitions, and a priority that the
//! planner uses to rank subjects. Every syllabus topic is pre-seeded so that
//! untested material shows up as weak instead of disappearing.

use serde::{Deserialize, Serialize};

use crate::quiz::{AnswerRecord, ClassifiedQuestion};
use crate::syllabus::{Subject, Topic};

/// Topics scoring below this are considered weak.
pub const WEAK_TOPIC_THRESHOLD: f64 = 0.7;

/// Multiplier applied to a subject's priority when one of its weak topics
/// is a prerequisite for later chapters.
const FOUNDATIONAL_BOOST: f64 = 1.5;

/// Score accumulated for one subtopic of a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtopicScore {
    pub name: String,
    pub score: f64,
}

/// Weighted performance for one syllabus topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic: Topic,
    /// In [0, 1] once analysis completes. Holds the running weighted
    /// numerator while answers are being accumulated.
    pub normalized_score: f64,
    /// Sum of difficulty weights over this topic's answered questions.
    pub question_count: u32,
    /// One entry per declared subtopic, in declared order.
    pub subtopics: Vec<SubtopicScore>,
}

/// Per-subject result of quiz analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAnalysis {
    pub subject: Subject,
    /// Topics below the weak threshold, weakest first.
    pub weak_topics: Vec<TopicScore>,
    /// Topics at or above the threshold, in curriculum order.
    pub strong_topics: Vec<TopicScore>,
    /// Weighted mean score across the subject's answered questions.
    pub overall_score: f64,
    /// Ranking weight: (1 − overall) × subject importance × foundational
    /// boost. Higher means study this subject sooner.
    pub priority: f64,
}

/// Analyze a quiz, producing one entry per subject sorted by descending
/// priority.
///
/// Answers are matched to questions by position index; a question without a
/// matching answer record is skipped silently. The function never fails:
/// with no usable data it returns three zero-scored analyses whose topics
/// are all weak.
pub fn analyze_quiz(
    questions: &[ClassifiedQuestion],
    answers: &[AnswerRecord],
) -> Vec<SubjectAnalysis> {
    let mut tables: Vec<(Subject, Vec<TopicScore>)> = Subject::all()
        .into_iter()
        .map(|subject| (subject, seed_topics(subject)))
        .collect();

    for (index, question) in questions.iter().enumerate() {
        let Some(answer) = answers.iter().find(|a| a.question_index == index) else {
            continue;
        };
        let subject = question.topic.subject();
        if let Some((_, topics)) = tables.iter_mut().find(|(s, _)| *s == subject) {
            if let Some(score) = topics.iter_mut().find(|t| t.topic == question.topic) {
                update_topic_score(score, question, answer);
            }
        }
    }

    let mut analyses: Vec<SubjectAnalysis> = tables
        .into_iter()
        .map(|(subject, topics)| finalize_subject(subject, topics))
        .collect();

    // Stable sort keeps the Physics, Chemistry, Biology base order on ties.
    analyses.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    analyses
}

/// One zero-score entry per syllabus topic, subtopics included.
fn seed_topics(subject: Subject) -> Vec<TopicScore> {
    subject
        .topics()
        .iter()
        .map(|&topic| TopicScore {
            topic,
            normalized_score: 0.0,
            question_count: 0,
            subtopics: topic
                .subtopics()
                .iter()
                .map(|&name| SubtopicScore {
                    name: name.to_string(),
                    score: 0.0,
                })
                .collect(),
        })
        .collect()
}

fn update_topic_score(
    score: &mut TopicScore,
    question: &ClassifiedQuestion,
    answer: &AnswerRecord,
) {
    let weight = question.difficulty.weight();
    let earned = if answer.is_correct {
        f64::from(weight)
    } else {
        0.0
    };

    score.normalized_score += earned;
    score.question_count += weight;

    if let Some(subtopic) = &question.subtopic {
        if let Some(entry) = score.subtopics.iter_mut().find(|s| &s.name == subtopic) {
            entry.score += earned;
        }
    }
}

fn finalize_subject(subject: Subject, mut topics: Vec<TopicScore>) -> SubjectAnalysis {
    let mut total_weight: u32 = 0;
    let mut weighted_sum = 0.0;

    for topic in &mut topics {
        if topic.question_count > 0 {
            let count = f64::from(topic.question_count);
            topic.normalized_score /= count;
            // Subtopic numerators divide by the topic's weight total; they
            // do not track a total of their own.
            for subtopic in &mut topic.subtopics {
                subtopic.score /= count;
            }
        }
        total_weight += topic.question_count;
        weighted_sum += topic.normalized_score * f64::from(topic.question_count);
    }

    let overall_score = if total_weight > 0 {
        weighted_sum / f64::from(total_weight)
    } else {
        0.0
    };

    let (strong_topics, mut weak_topics): (Vec<_>, Vec<_>) = topics
        .into_iter()
        .partition(|t| t.normalized_score >= WEAK_TOPIC_THRESHOLD);
    weak_topics.sort_by(|a, b| a.normalized_score.total_cmp(&b.normalized_score));

    let foundational = if weak_topics.iter().any(|t| t.topic.is_foundational()) {
        FOUNDATIONAL_BOOST
    } else {
        1.0
    };
    let priority = (1.0 - overall_score) * subject.importance() * foundational;

    SubjectAnalysis {
        subject,
        weak_topics,
        strong_topics,
        overall_score,
        priority,
    }
}
