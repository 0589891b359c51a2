//! Rendering for saved study plan reports.
//!
//! Takes a [`learnease_core::report::PlanReport`] and renders it as a
//! Markdown document or a self-contained HTML page.

pub mod html;
pub mod markdown;
