//! Machine readable statistics report
//!
//! Shape: `{ "analysis": <AnalysisStats>, "timestamp": "<ISO-8601 UTC>" }`,
//! pretty printed. Field names under `analysis` are the camelCase names of
//! [`AnalysisStats`].

use crate::error::FormatError;
use crate::format::{ReportContext, ReportFormat};
use crate::stats::AnalysisStats;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport;

/// Document written by [`JsonReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReportDocument {
    pub analysis: AnalysisStats,
    pub timestamp: String,
}

impl ReportFormat for JsonReport {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON report with timestamp"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn render(
        &self,
        stats: &AnalysisStats,
        context: &ReportContext,
    ) -> Result<String, FormatError> {
        let document = JsonReportDocument {
            analysis: stats.clone(),
            timestamp: context
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        serde_json::to_string_pretty(&document)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }
}
