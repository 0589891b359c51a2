//! Static study resources and task templates, looked up per chapter.

use crate::syllabus::{BiologyTopic, ChemistryTopic, PhysicsTopic, Subject, Topic};

/// Fallback for chapters without a curated resource list.
pub const DEFAULT_RESOURCES: &[&str] = &[
    "Maharashtra State Board Textbook",
    "NCERT Exemplar Problems",
    "Previous Year Question Papers",
];

/// Generic tasks for review sessions on already-strong chapters.
pub const REVIEW_TASKS: &[&str] = &["Review key concepts", "Solve practice questions"];

/// Curated study resources for a chapter, falling back to the generic list.
pub fn resources_for(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Physics(PhysicsTopic::MeasurementOfMatter) => &[
            "Maharashtra Board Class 9 Science Part 1 Chapter 1",
            "Navneet Practice Papers - Measurement",
            "Target Publications Question Bank Chapter 1",
        ],
        Topic::Physics(PhysicsTopic::Motion) => &[
            "Maharashtra Board Class 9 Science Part 1 Chapter 2",
            "Motion Concepts - PhysicsWallah YouTube Series",
            "Motion Numerical Problems - Target Publications",
        ],
        Topic::Chemistry(ChemistryTopic::MatterInOurSurroundings) => &[
            "Maharashtra Board Class 9 Science Part 1 Chapter 1",
            "State Changes - PW Animation Series",
            "Target Matter Question Bank",
        ],
        Topic::Biology(BiologyTopic::CellStructureAndFunction) => &[
            "Maharashtra Board Class 9 Science Part 2 Chapter 1",
            "Cell Biology - PW Detailed Series",
            "Target Cell Question Bank",
        ],
        _ => DEFAULT_RESOURCES,
    }
}

/// Per-subject task list for a study session.
///
/// The Physics template names the focus area; the subtopic is used when one
/// was identified, the chapter name otherwise.
pub fn tasks_for(topic: Topic, subtopic: Option<&str>) -> Vec<String> {
    match topic.subject() {
        Subject::Physics => {
            let focus = subtopic.unwrap_or(topic.name());
            vec![
                format!("Solve 5 numerical problems from {focus}"),
                "Derive all relevant formulas".to_string(),
                "Create concept map".to_string(),
            ]
        }
        Subject::Chemistry => vec![
            "Practice 3 chemical equations".to_string(),
            "Make comparative charts".to_string(),
            "Write definitions".to_string(),
        ],
        Subject::Biology => vec![
            "Draw labeled diagram".to_string(),
            "Explain process step-by-step".to_string(),
            "Create flashcards".to_string(),
        ],
    }
}
