//! CLI library components for the annotation migrator.

pub mod logging;
pub mod output;
