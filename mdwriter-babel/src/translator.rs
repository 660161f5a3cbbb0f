//! Tag syntax → Markdown translation
//!
//! Input is line oriented: every non-blank line must look like
//! `PREFIX(content)`, where `PREFIX` is a key of the [`TagTable`]. A recognized
//! line becomes `<markdown prefix> <content>`.
//!
//! Failures are per line. [`parse_document`] keeps going after a bad line and
//! hands back the failures as [`LineDiagnostic`]s; [`parse_input`] is the
//! best-effort variant that only keeps the successes.

use crate::error::RecognitionError;
use crate::tags::TagTable;
use regex::Regex;
use std::sync::LazyLock;

/// `PREFIX(content)`; greedy content, so nested parentheses are kept.
static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9]+)\((.+)\)$").unwrap());

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

/// Byte order mark some editors put at the start of a file.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Fallback name when nothing was recognized.
pub const DEFAULT_FILENAME: &str = "output.md";

/// One recognized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub prefix: String,
    pub content: String,
    pub markdown: String,
}

/// A failed line together with its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line_number: usize,
    pub error: RecognitionError,
}

/// Result of translating a whole input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Recognized lines, in input order
    pub lines: Vec<ParsedLine>,
    /// Lines that failed, in input order
    pub diagnostics: Vec<LineDiagnostic>,
}

impl ParseOutcome {
    /// True when nothing was recognized; there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn markdown(&self) -> String {
        generate_markdown(&self.lines)
    }

    pub fn suggested_filename(&self) -> String {
        suggest_filename(&self.lines)
    }
}

/// Translate a single line.
///
/// Returns `Ok(None)` for blank lines, which are skipped without a diagnostic.
pub fn parse_line(table: &TagTable, line: &str) -> Result<Option<ParsedLine>, RecognitionError> {
    let trimmed = trim_line(line);
    if trimmed.is_empty() {
        return Ok(None);
    }

    let captures = TAG_LINE
        .captures(trimmed)
        .ok_or_else(|| RecognitionError::MalformedLine {
            text: trimmed.to_string(),
        })?;

    let prefix = &captures[1];
    let markdown_prefix = table
        .get(prefix)
        .ok_or_else(|| RecognitionError::UnknownPrefix {
            prefix: prefix.to_string(),
            known: table.prefixes(),
        })?;

    let content = trim_line(&captures[2]).to_string();
    Ok(Some(ParsedLine {
        prefix: prefix.to_string(),
        markdown: format!("{markdown_prefix} {content}"),
        content,
    }))
}

/// Whitespace trim that also drops a byte order mark.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Translate a multi-line input, collecting per-line diagnostics.
pub fn parse_document(table: &TagTable, text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (index, line) in LINE_BREAK.split(text).enumerate() {
        match parse_line(table, line) {
            Ok(Some(parsed)) => outcome.lines.push(parsed),
            Ok(None) => {}
            Err(error) => {
                log::debug!("skipping line {}: {error}", index + 1);
                outcome.diagnostics.push(LineDiagnostic {
                    line_number: index + 1,
                    error,
                });
            }
        }
    }

    log::debug!(
        "recognized {} line(s), {} diagnostic(s)",
        outcome.lines.len(),
        outcome.diagnostics.len()
    );
    outcome
}

/// Translate a multi-line input, silently dropping lines that fail.
pub fn parse_input(table: &TagTable, text: &str) -> Vec<ParsedLine> {
    parse_document(table, text).lines
}

/// Join the markdown of every line with `\n`.
pub fn generate_markdown(lines: &[ParsedLine]) -> String {
    lines
        .iter()
        .map(|line| line.markdown.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Output filename derived from the first recognized tag, e.g. `AAA.md`.
pub fn suggest_filename(lines: &[ParsedLine]) -> String {
    match lines.first() {
        Some(first) => format!("{}.md", first.prefix),
        None => DEFAULT_FILENAME.to_string(),
    }
}
