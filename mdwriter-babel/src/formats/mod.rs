//! Report format implementations
//!
//! Each format renders an [`AnalysisStats`](crate::stats::AnalysisStats)
//! snapshot as text.

pub mod console;
pub mod json;

pub use console::ConsoleReport;
pub use json::JsonReport;
