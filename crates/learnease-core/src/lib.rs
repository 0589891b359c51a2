//! learnease-core — Quiz classification, analysis, and study planning.
//!
//! This crate defines the Maharashtra State Board science syllabus model and
//! the deterministic pipeline that the entire learnease system builds on:
//! classify quiz questions, score per-topic performance, rank subjects by
//! priority, and allocate a daily time budget into a study plan.

pub mod analysis;
pub mod classifier;
pub mod evaluation;
pub mod planner;
pub mod quiz;
pub mod report;
pub mod resources;
pub mod syllabus;
