//! Keyword-heuristic question classification.
//!
//! Maps raw question text to a syllabus position plus a difficulty level.
//! All matching is lower-cased substring matching against the static keyword
//! tables in [`crate::syllabus`]; there is no tokenization and no word
//! boundaries. The classifier never fails: text with no keyword hits falls
//! back to the first subject and its first topic in declared order, which is
//! a known bias of the heuristic and is locked in by tests.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::syllabus::{Difficulty, Subject, Topic};

/// Where a question landed in the syllabus, plus how hard it reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub subject: Subject,
    pub topic: Topic,
    /// First declared subtopic named verbatim in the text, if any.
    #[serde(default)]
    pub subtopic: Option<String>,
    pub difficulty: Difficulty,
}

/// Classify a single question text.
///
/// Detection runs in four fixed stages: subject by keyword tally across each
/// subject's topics, topic by the same tally within the winning subject,
/// subtopic by literal name mention, difficulty by an easy → medium → hard
/// keyword scan defaulting to medium. Ties and zero-hit tallies resolve to
/// the earliest entry in declared order.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();
    let subject = detect_subject(&lower);
    let topic = detect_topic(&lower, subject);
    let subtopic = detect_subtopic(&lower, topic);
    let difficulty = detect_difficulty(&lower);
    debug!(%subject, %topic, %difficulty, "classified question");
    Classification {
        subject,
        topic,
        subtopic,
        difficulty,
    }
}

/// Count keyword hits across a set of topics' keyword lists.
///
/// Each list entry contributes independently, so a word that several
/// chapters claim counts once per chapter.
fn keyword_hits(lower: &str, topics: &[Topic]) -> usize {
    topics
        .iter()
        .flat_map(|topic| topic.keywords())
        .filter(|keyword| lower.contains(*keyword))
        .count()
}

fn detect_subject(lower: &str) -> Subject {
    let mut best = Subject::Physics;
    let mut best_hits = 0;
    for subject in Subject::all() {
        let hits = keyword_hits(lower, subject.topics());
        if hits > best_hits {
            best = subject;
            best_hits = hits;
        }
    }
    best
}

fn detect_topic(lower: &str, subject: Subject) -> Topic {
    let topics = subject.topics();
    let mut best = topics[0];
    let mut best_hits = 0;
    for &topic in topics {
        let hits = keyword_hits(lower, &[topic]);
        if hits > best_hits {
            best = topic;
            best_hits = hits;
        }
    }
    best
}

fn detect_subtopic(lower: &str, topic: Topic) -> Option<String> {
    topic
        .subtopics()
        .iter()
        .find(|name| lower.contains(&name.to_lowercase()))
        .map(|name| name.to_string())
}

fn detect_difficulty(lower: &str) -> Difficulty {
    Difficulty::all()
        .into_iter()
        .find(|level| level.keywords().iter().any(|k| lower.contains(k)))
        .unwrap_or(Difficulty::Medium)
}
