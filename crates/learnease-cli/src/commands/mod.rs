//! CLI subcommand implementations.

pub mod analyze;
pub mod classify;
pub mod evaluate;
pub mod init;
pub mod plan;
pub mod validate;
