//! Report entry points and report file naming

use crate::error::FormatError;
use crate::format::ReportContext;
use crate::registry::ReportRegistry;
use crate::stats::AnalysisStats;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Suffix appended to the analyzed file's stem for saved JSON reports.
pub const STATS_REPORT_SUFFIX: &str = "-stats.json";

/// Render `stats` with the named format (`"console"` or `"json"`), stamped now.
pub fn generate_report(stats: &AnalysisStats, format: &str) -> Result<String, FormatError> {
    generate_report_at(stats, format, Utc::now())
}

/// Same as [`generate_report`] with an explicit timestamp.
pub fn generate_report_at(
    stats: &AnalysisStats,
    format: &str,
    timestamp: DateTime<Utc>,
) -> Result<String, FormatError> {
    ReportRegistry::default().render(stats, format, &ReportContext::at(timestamp))
}

/// `docs/notes.md` → `docs/notes-stats.json`.
pub fn stats_report_filename(markdown_path: &Path) -> PathBuf {
    let stem = markdown_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    markdown_path.with_file_name(format!("{stem}{STATS_REPORT_SUFFIX}"))
}
