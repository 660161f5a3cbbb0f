//! Report format trait definition
//!
//! This module defines the ReportFormat trait that every statistics report
//! renderer implements, giving the registry a uniform way to list, pick and
//! run them.

use crate::error::FormatError;
use crate::stats::AnalysisStats;
use chrono::{DateTime, Utc};

/// Values a renderer may need besides the statistics themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// When the report was produced
    pub timestamp: DateTime<Utc>,
}

impl ReportContext {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self { timestamp }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

/// Trait for statistics report formats
///
/// # Examples
///
/// ```ignore
/// struct CsvReport;
///
/// impl ReportFormat for CsvReport {
///     fn name(&self) -> &str {
///         "csv"
///     }
///
///     fn render(&self, stats: &AnalysisStats, _ctx: &ReportContext) -> Result<String, FormatError> {
///         Ok(format!("words,{}\n", stats.word_count))
///     }
/// }
/// ```
pub trait ReportFormat: Send + Sync {
    /// The name of this format (e.g., "console", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render the statistics as text
    fn render(&self, stats: &AnalysisStats, context: &ReportContext)
        -> Result<String, FormatError>;
}
