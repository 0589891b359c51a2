//! TOML quiz session parser and the quiz → pipeline adapter.
//!
//! Loads quiz sessions from TOML files and directories, validates them, and
//! turns raw quiz data into the classified questions and answer records the
//! analyzer consumes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::syllabus::{Difficulty, Subject, Topic};

/// Per-question time placeholder. Quiz front-ends do not measure real
/// per-question time, so every answer carries this constant.
pub const PLACEHOLDER_TIME_SPENT_SECS: u64 = 30;

/// A quiz taken by a student: raw text plus chosen and correct options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    /// Unique identifier for this quiz.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what this quiz covers.
    #[serde(default)]
    pub description: String,
    /// The questions in presentation order. A question's position is its
    /// identity; answers refer back to it by index.
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// One question of a quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// The question text shown to the student.
    pub text: String,
    /// Declared answer options, when the quiz records them.
    #[serde(default)]
    pub options: Vec<String>,
    /// The option the student picked; `None` means the question was left
    /// unanswered and contributes no answer record.
    #[serde(default)]
    pub selected: Option<String>,
    /// The correct option text.
    pub correct: String,
}

/// A question after classification, ready for analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedQuestion {
    pub text: String,
    pub subject: Subject,
    pub topic: Topic,
    #[serde(default)]
    pub subtopic: Option<String>,
    pub difficulty: Difficulty,
}

/// Correctness record for one question, matched by position index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub is_correct: bool,
    pub time_spent_secs: u64,
}

/// Classified questions plus the answer records derived from a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub questions: Vec<ClassifiedQuestion>,
    pub answers: Vec<AnswerRecord>,
}

/// Classify raw quiz data handed over as parallel slices.
///
/// One answer record is produced per selected option; correctness is string
/// equality against the same-index correct option, and a missing correct
/// option counts as incorrect. Questions without a corresponding selection
/// simply have no answer record, which the analyzer skips.
pub fn classify_questions(
    questions: &[String],
    selected_options: &[String],
    correct_options: &[String],
) -> QuizOutcome {
    let questions = questions
        .iter()
        .map(|text| {
            let c = classify(text);
            ClassifiedQuestion {
                text: text.clone(),
                subject: c.subject,
                topic: c.topic,
                subtopic: c.subtopic,
                difficulty: c.difficulty,
            }
        })
        .collect();

    let answers = selected_options
        .iter()
        .enumerate()
        .map(|(i, selected)| AnswerRecord {
            question_index: i,
            is_correct: correct_options.get(i).is_some_and(|c| c == selected),
            time_spent_secs: PLACEHOLDER_TIME_SPENT_SECS,
        })
        .collect();

    QuizOutcome { questions, answers }
}

impl QuizSession {
    /// Run the classifier over every question and build answer records for
    /// the answered ones.
    pub fn classify(&self) -> QuizOutcome {
        let questions = self
            .questions
            .iter()
            .map(|q| {
                let c = classify(&q.text);
                ClassifiedQuestion {
                    text: q.text.clone(),
                    subject: c.subject,
                    topic: c.topic,
                    subtopic: c.subtopic,
                    difficulty: c.difficulty,
                }
            })
            .collect();

        let answers = self
            .questions
            .iter()
            .enumerate()
            .filter_map(|(i, q)| {
                q.selected.as_ref().map(|selected| AnswerRecord {
                    question_index: i,
                    is_correct: *selected == q.correct,
                    time_spent_secs: PLACEHOLDER_TIME_SPENT_SECS,
                })
            })
            .collect();

        QuizOutcome { questions, answers }
    }
}

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    text: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    selected: Option<String>,
    correct: String,
}

/// Parse a single TOML file into a `QuizSession`.
pub fn parse_quiz_file(path: &Path) -> Result<QuizSession> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `QuizSession` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<QuizSession> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| QuizQuestion {
            text: q.text,
            options: q.options,
            selected: q.selected,
            correct: q.correct,
        })
        .collect();

    Ok(QuizSession {
        id: parsed.quiz.id,
        name: parsed.quiz.name,
        description: parsed.quiz.description,
        questions,
    })
}

/// Recursively load all `.toml` quiz files from a directory.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<QuizSession>> {
    let mut sessions = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sessions.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz_file(&path) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sessions)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question index (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz session for common authoring issues.
pub fn validate_quiz(session: &QuizSession) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if session.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz has no questions".into(),
        });
    }

    // Check for duplicate question texts
    let mut seen_texts = std::collections::HashSet::new();
    for (i, q) in session.questions.iter().enumerate() {
        if !seen_texts.insert(q.text.trim()) {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "duplicate question text".into(),
            });
        }
    }

    for (i, q) in session.questions.iter().enumerate() {
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "question text is empty".into(),
            });
        }

        if q.correct.trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "correct option is empty".into(),
            });
        }

        if !q.options.is_empty() {
            if !q.options.contains(&q.correct) {
                warnings.push(ValidationWarning {
                    question: Some(i),
                    message: "correct option is not one of the declared options".into(),
                });
            }
            if let Some(selected) = &q.selected {
                if !q.options.contains(selected) {
                    warnings.push(ValidationWarning {
                        question: Some(i),
                        message: "selected option is not one of the declared options".into(),
                    });
                }
            }
        }
    }

    warnings
}
