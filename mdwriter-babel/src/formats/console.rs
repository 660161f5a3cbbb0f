//! Human readable statistics report
//!
//! Plain text only; coloring is left to whoever prints it. Sections and the
//! order of metrics are fixed:
//!
//!     Content Overview      words, paragraphs, list items, quote lines
//!     Structure Analysis    non-zero heading levels, then the total
//!     Links & Media         links, images, code blocks
//!     Content Analysis      plain text %, formatting %, avg words/paragraph

use crate::error::FormatError;
use crate::format::{ReportContext, ReportFormat};
use crate::stats::AnalysisStats;

pub const REPORT_TITLE: &str = "Markdown Statistics Report";

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReport;

impl ReportFormat for ConsoleReport {
    fn name(&self) -> &str {
        "console"
    }

    fn description(&self) -> &str {
        "Human readable report"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn render(
        &self,
        stats: &AnalysisStats,
        _context: &ReportContext,
    ) -> Result<String, FormatError> {
        Ok(render_console(stats))
    }
}

/// Lines are joined with `\n`, without a trailing newline.
pub fn render_console(stats: &AnalysisStats) -> String {
    let mut report = vec![REPORT_TITLE.to_string(), "=".repeat(RULE_WIDTH), String::new()];

    report.push("Content Overview:".to_string());
    report.push(metric("Word Count", stats.word_count));
    report.push(metric("Paragraphs", stats.paragraph_count));
    report.push(metric("List Items", stats.list_item_count));
    report.push(metric("Quote Lines", stats.quote_count));
    report.push(String::new());

    report.push("Structure Analysis:".to_string());
    for (level, count) in stats.heading_levels.iter().filter(|(_, count)| *count > 0) {
        report.push(metric(&format!("H{level} Headings"), count));
    }
    report.push(metric("Total Headings", stats.heading_levels.total()));
    report.push(String::new());

    report.push("Links & Media:".to_string());
    report.push(metric("Links", stats.link_count));
    report.push(metric("Images", stats.image_count));
    report.push(metric("Code Blocks", stats.code_block_count));
    report.push(String::new());

    report.push("Content Analysis:".to_string());
    report.push(metric("Plain Text", format!("{:.1}%", stats.plain_text_ratio)));
    report.push(metric("Formatting", format!("{:.1}%", stats.formatting_ratio)));
    let average = if stats.paragraph_count > 0 {
        format!("{:.1}", stats.average_words_per_paragraph())
    } else {
        "0".to_string()
    };
    report.push(metric("Avg Words/Paragraph", average));

    report.join("\n")
}

fn metric(label: &str, value: impl std::fmt::Display) -> String {
    format!("   {label}: {value}")
}
