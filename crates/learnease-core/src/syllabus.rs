//! Maharashtra State Board Class 9 science syllabus model.
//!
//! These are the fundamental types the entire learnease system uses to
//! represent subjects, topics, and subtopics. All syllabus data is static
//! and declared in board-curriculum order; that order is significant, both
//! for classification tie-breaking and for pre-seeding analyses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three science subjects of the board curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    /// All subjects in enumeration order (the classifier's tie-break order).
    pub const fn all() -> [Subject; 3] {
        [Subject::Physics, Subject::Chemistry, Subject::Biology]
    }

    /// Every syllabus topic for this subject, in curriculum order.
    pub fn topics(self) -> &'static [Topic] {
        match self {
            Subject::Physics => &PHYSICS_TOPICS,
            Subject::Chemistry => &CHEMISTRY_TOPICS,
            Subject::Biology => &BIOLOGY_TOPICS,
        }
    }

    /// Board-exam weighting used when ranking subjects by priority.
    pub fn importance(self) -> f64 {
        match self {
            Subject::Physics => 1.2,
            Subject::Chemistry => 1.1,
            Subject::Biology => 1.0,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Physics => write!(f, "Physics"),
            Subject::Chemistry => write!(f, "Chemistry"),
            Subject::Biology => write!(f, "Biology"),
        }
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "physics" => Ok(Subject::Physics),
            "chemistry" => Ok(Subject::Chemistry),
            "biology" => Ok(Subject::Biology),
            other => Err(format!("unknown subject: {other}")),
        }
    }
}

/// Physics chapters, Science Part 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicsTopic {
    MeasurementOfMatter,
    Motion,
    ForceAndLawsOfMotion,
    WorkAndEnergy,
    Sound,
    Gravitation,
    Light,
    Electricity,
    Magnetism,
}

/// Chemistry chapters, Science Part 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChemistryTopic {
    MatterInOurSurroundings,
    IsMatterAroundUsPure,
    AtomsAndMolecules,
    StructureOfAtom,
    ChemicalReactions,
    AcidsBasesAndSalts,
    MetalsAndNonMetals,
    CarbonCompounds,
}

/// Biology chapters, Science Part 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiologyTopic {
    CellStructureAndFunction,
    Tissues,
    DiversityInLivingOrganisms,
    LifeProcesses,
    ControlAndCoordination,
    Reproduction,
    HeredityAndEvolution,
}

/// A syllabus topic, tagged with the subject it belongs to.
///
/// Carrying the subject in the type means a topic can never be attributed
/// to the wrong subject; there is no string-matched membership anywhere.
/// Serialized as the topic's display name, which is unique across the
/// whole syllabus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Topic {
    Physics(PhysicsTopic),
    Chemistry(ChemistryTopic),
    Biology(BiologyTopic),
}

static PHYSICS_TOPICS: [Topic; 9] = [
    Topic::Physics(PhysicsTopic::MeasurementOfMatter),
    Topic::Physics(PhysicsTopic::Motion),
    Topic::Physics(PhysicsTopic::ForceAndLawsOfMotion),
    Topic::Physics(PhysicsTopic::WorkAndEnergy),
    Topic::Physics(PhysicsTopic::Sound),
    Topic::Physics(PhysicsTopic::Gravitation),
    Topic::Physics(PhysicsTopic::Light),
    Topic::Physics(PhysicsTopic::Electricity),
    Topic::Physics(PhysicsTopic::Magnetism),
];

static CHEMISTRY_TOPICS: [Topic; 8] = [
    Topic::Chemistry(ChemistryTopic::MatterInOurSurroundings),
    Topic::Chemistry(ChemistryTopic::IsMatterAroundUsPure),
    Topic::Chemistry(ChemistryTopic::AtomsAndMolecules),
    Topic::Chemistry(ChemistryTopic::StructureOfAtom),
    Topic::Chemistry(ChemistryTopic::ChemicalReactions),
    Topic::Chemistry(ChemistryTopic::AcidsBasesAndSalts),
    Topic::Chemistry(ChemistryTopic::MetalsAndNonMetals),
    Topic::Chemistry(ChemistryTopic::CarbonCompounds),
];

static BIOLOGY_TOPICS: [Topic; 7] = [
    Topic::Biology(BiologyTopic::CellStructureAndFunction),
    Topic::Biology(BiologyTopic::Tissues),
    Topic::Biology(BiologyTopic::DiversityInLivingOrganisms),
    Topic::Biology(BiologyTopic::LifeProcesses),
    Topic::Biology(BiologyTopic::ControlAndCoordination),
    Topic::Biology(BiologyTopic::Reproduction),
    Topic::Biology(BiologyTopic::HeredityAndEvolution),
];

impl Topic {
    /// The subject this topic belongs to.
    pub fn subject(self) -> Subject {
        match self {
            Topic::Physics(_) => Subject::Physics,
            Topic::Chemistry(_) => Subject::Chemistry,
            Topic::Biology(_) => Subject::Biology,
        }
    }

    /// Chapter name as printed in the board textbook.
    pub fn name(self) -> &'static str {
        match self {
            Topic::Physics(t) => t.name(),
            Topic::Chemistry(t) => t.name(),
            Topic::Biology(t) => t.name(),
        }
    }

    /// The three subtopics tracked for this chapter, in declared order.
    pub fn subtopics(self) -> &'static [&'static str] {
        match self {
            Topic::Physics(t) => t.subtopics(),
            Topic::Chemistry(t) => t.subtopics(),
            Topic::Biology(t) => t.subtopics(),
        }
    }

    /// Classification keywords for this chapter.
    ///
    /// Keywords are matched as lower-case substrings. A word that appears in
    /// several chapters' lists (e.g. "power") counts once per list entry, so
    /// the subject-level tally is a multiset count by construction.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Physics(t) => t.keywords(),
            Topic::Chemistry(t) => t.keywords(),
            Topic::Biology(t) => t.keywords(),
        }
    }

    /// Chapters that should be mastered before this one.
    pub fn prerequisites(self) -> &'static [Topic] {
        use BiologyTopic as B;
        use ChemistryTopic as C;
        use PhysicsTopic as P;
        match self {
            Topic::Physics(P::ForceAndLawsOfMotion)
            | Topic::Physics(P::WorkAndEnergy)
            | Topic::Physics(P::Gravitation)
            | Topic::Physics(P::Electricity) => &[Topic::Physics(P::Motion)],
            Topic::Chemistry(C::StructureOfAtom) | Topic::Chemistry(C::ChemicalReactions) => {
                &[Topic::Chemistry(C::AtomsAndMolecules)]
            }
            Topic::Chemistry(C::CarbonCompounds) => &[Topic::Chemistry(C::ChemicalReactions)],
            Topic::Biology(B::Tissues) | Topic::Biology(B::LifeProcesses) => {
                &[Topic::Biology(B::CellStructureAndFunction)]
            }
            Topic::Biology(B::HeredityAndEvolution) => &[Topic::Biology(B::Reproduction)],
            _ => &[],
        }
    }

    /// Whether some other chapter lists this one as a prerequisite.
    ///
    /// Weakness in a foundational chapter compounds, so the priority
    /// formula boosts subjects with one.
    pub fn is_foundational(self) -> bool {
        Subject::all()
            .iter()
            .flat_map(|s| s.topics())
            .any(|t| t.prerequisites().contains(&self))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::all()
            .iter()
            .flat_map(|subject| subject.topics())
            .copied()
            .find(|topic| topic.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown topic: {s}"))
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> String {
        topic.name().to_string()
    }
}

impl TryFrom<String> for Topic {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl PhysicsTopic {
    pub fn name(self) -> &'static str {
        match self {
            PhysicsTopic::MeasurementOfMatter => "Measurement of Matter",
            PhysicsTopic::Motion => "Motion",
            PhysicsTopic::ForceAndLawsOfMotion => "Force and Laws of Motion",
            PhysicsTopic::WorkAndEnergy => "Work and Energy",
            PhysicsTopic::Sound => "Sound",
            PhysicsTopic::Gravitation => "Gravitation",
            PhysicsTopic::Light => "Light",
            PhysicsTopic::Electricity => "Electricity",
            PhysicsTopic::Magnetism => "Magnetism",
        }
    }

    pub fn subtopics(self) -> &'static [&'static str] {
        match self {
            PhysicsTopic::MeasurementOfMatter => {
                &["Units and Measurements", "Significant Figures", "Dimensional Analysis"]
            }
            PhysicsTopic::Motion => {
                &["Scalar vs Vector", "Equations of Motion", "Graphical Analysis"]
            }
            PhysicsTopic::ForceAndLawsOfMotion => &["Newton's Laws", "Momentum", "Conservation"],
            PhysicsTopic::WorkAndEnergy => &["Work Calculation", "Energy Types", "Power"],
            PhysicsTopic::Sound => &["Wave Properties", "Sound Propagation", "Applications"],
            PhysicsTopic::Gravitation => &["Universal Law", "Free Fall", "Kepler's Laws"],
            PhysicsTopic::Light => &["Reflection", "Refraction", "Lens Formula"],
            PhysicsTopic::Electricity => &["Ohm's Law", "Circuits", "Household Wiring"],
            PhysicsTopic::Magnetism => &["Magnetic Field", "EM Induction", "Applications"],
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            PhysicsTopic::MeasurementOfMatter => {
                &["measure", "unit", "dimension", "significant", "accuracy", "precision"]
            }
            PhysicsTopic::Motion => {
                &["motion", "speed", "velocity", "acceleration", "displacement", "graph"]
            }
            PhysicsTopic::ForceAndLawsOfMotion => {
                &["force", "newton", "momentum", "inertia", "action", "reaction"]
            }
            PhysicsTopic::WorkAndEnergy => {
                &["work", "energy", "power", "joule", "kinetic", "potential"]
            }
            PhysicsTopic::Sound => &["sound", "wave", "frequency", "echo", "ultrasound", "pitch"],
            PhysicsTopic::Gravitation => {
                &["gravity", "gravitation", "free fall", "weight", "kepler", "satellite"]
            }
            PhysicsTopic::Light => {
                &["light", "reflection", "refraction", "lens", "mirror", "prism"]
            }
            PhysicsTopic::Electricity => {
                &["electric", "current", "ohm", "circuit", "resistance", "power"]
            }
            PhysicsTopic::Magnetism => {
                &["magnet", "magnetic", "induction", "motor", "generator", "field"]
            }
        }
    }
}

impl ChemistryTopic {
    pub fn name(self) -> &'static str {
        match self {
            ChemistryTopic::MatterInOurSurroundings => "Matter in Our Surroundings",
            ChemistryTopic::IsMatterAroundUsPure => "Is Matter Around Us Pure",
            ChemistryTopic::AtomsAndMolecules => "Atoms and Molecules",
            ChemistryTopic::StructureOfAtom => "Structure of Atom",
            ChemistryTopic::ChemicalReactions => "Chemical Reactions",
            ChemistryTopic::AcidsBasesAndSalts => "Acids, Bases and Salts",
            ChemistryTopic::MetalsAndNonMetals => "Metals and Non-metals",
            ChemistryTopic::CarbonCompounds => "Carbon Compounds",
        }
    }

    pub fn subtopics(self) -> &'static [&'static str] {
        match self {
            ChemistryTopic::MatterInOurSurroundings => {
                &["States of Matter", "Changes", "Latent Heat"]
            }
            ChemistryTopic::IsMatterAroundUsPure => &["Mixtures", "Solutions", "Colloids"],
            ChemistryTopic::AtomsAndMolecules => &["Atomic Theory", "Mole Concept", "Formulas"],
            ChemistryTopic::StructureOfAtom => &["Atomic Models", "Valency", "Isotopes"],
            ChemistryTopic::ChemicalReactions => &["Types", "Balancing", "Redox"],
            ChemistryTopic::AcidsBasesAndSalts => &["pH Scale", "Neutralization", "Salts"],
            ChemistryTopic::MetalsAndNonMetals => &["Properties", "Reactivity", "Alloys"],
            ChemistryTopic::CarbonCompounds => &["Bonding", "Functional Groups", "Nomenclature"],
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ChemistryTopic::MatterInOurSurroundings => {
                &["matter", "state", "solid", "liquid", "gas", "sublimation"]
            }
            ChemistryTopic::IsMatterAroundUsPure => {
                &["pure", "mixture", "solution", "colloid", "suspension", "alloy"]
            }
            ChemistryTopic::AtomsAndMolecules => {
                &["atom", "molecule", "atomic", "molar", "mass", "avogadro"]
            }
            ChemistryTopic::StructureOfAtom => {
                &["electron", "proton", "neutron", "shell", "orbital", "valency"]
            }
            ChemistryTopic::ChemicalReactions => {
                &["reaction", "equation", "balance", "redox", "combination", "decomposition"]
            }
            ChemistryTopic::AcidsBasesAndSalts => {
                &["acid", "base", "salt", "ph", "neutralization", "indicator"]
            }
            ChemistryTopic::MetalsAndNonMetals => {
                &["metal", "non-metal", "reactivity", "alloy", "corrosion", "ductile"]
            }
            ChemistryTopic::CarbonCompounds => {
                &["carbon", "organic", "hydrocarbon", "functional", "iupac", "isomer"]
            }
        }
    }
}

impl BiologyTopic {
    pub fn name(self) -> &'static str {
        match self {
            BiologyTopic::CellStructureAndFunction => "Cell: Structure and Function",
            BiologyTopic::Tissues => "Tissues",
            BiologyTopic::DiversityInLivingOrganisms => "Diversity in Living Organisms",
            BiologyTopic::LifeProcesses => "Life Processes",
            BiologyTopic::ControlAndCoordination => "Control and Coordination",
            BiologyTopic::Reproduction => "Reproduction",
            BiologyTopic::HeredityAndEvolution => "Heredity and Evolution",
        }
    }

    pub fn subtopics(self) -> &'static [&'static str] {
        match self {
            BiologyTopic::CellStructureAndFunction => &["Organelles", "Division", "Transport"],
            BiologyTopic::Tissues => &["Plant Tissues", "Animal Tissues", "Meristematic"],
            BiologyTopic::DiversityInLivingOrganisms => {
                &["Classification", "Kingdoms", "Nomenclature"]
            }
            BiologyTopic::LifeProcesses => &["Nutrition", "Respiration", "Transportation"],
            BiologyTopic::ControlAndCoordination => &["Nervous System", "Hormones", "Reflexes"],
            BiologyTopic::Reproduction => &["Asexual", "Sexual", "Human Reproductive"],
            BiologyTopic::HeredityAndEvolution => &["Mendel's Laws", "DNA", "Natural Selection"],
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            BiologyTopic::CellStructureAndFunction => {
                &["cell", "organelle", "nucleus", "membrane", "mitochondria", "cytoplasm"]
            }
            BiologyTopic::Tissues => {
                &["tissue", "epithelial", "muscular", "nervous", "meristematic", "xylem"]
            }
            BiologyTopic::DiversityInLivingOrganisms => {
                &["diversity", "classification", "kingdom", "species", "binomial", "taxonomy"]
            }
            BiologyTopic::LifeProcesses => {
                &["nutrition", "respiration", "transportation", "excretion", "photosynthesis", "digestion"]
            }
            BiologyTopic::ControlAndCoordination => {
                &["neuron", "nervous", "hormone", "reflex", "brain", "spinal"]
            }
            BiologyTopic::Reproduction => {
                &["reproduction", "asexual", "sexual", "gamete", "zygote", "menstruation"]
            }
            BiologyTopic::HeredityAndEvolution => {
                &["heredity", "gene", "dna", "mutation", "evolution", "natural selection"]
            }
        }
    }
}

/// Question difficulty levels, in detection-scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels in scan order: the first level with a keyword hit wins.
    pub const fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Scoring weight. Harder questions move topic scores more.
    pub fn weight(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Phrases that signal this difficulty level in question text.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &["define", "name", "list", "identify", "recall", "state"],
            Difficulty::Medium => {
                &["explain", "describe", "compare", "relate", "summarize", "interpret"]
            }
            Difficulty::Hard => &["calculate", "derive", "analyze", "evaluate", "prove", "design"],
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
