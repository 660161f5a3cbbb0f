//! Line classification for previews
//!
//! A preview is the head of a markdown text with every line tagged by a coarse
//! [`LineKind`], so a front end can highlight it without parsing markdown.

/// Number of lines shown when no limit is configured.
pub const DEFAULT_PREVIEW_LINES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with `#`; the level is the number of leading `#`
    Heading(usize),
    /// Starts with `-` or `*`
    ListItem,
    /// Starts with `>`
    Quote,
    Plain,
}

impl LineKind {
    /// Classify by the first characters of the untrimmed line.
    pub fn classify(line: &str) -> Self {
        if line.starts_with('#') {
            LineKind::Heading(line.chars().take_while(|&c| c == '#').count())
        } else if line.starts_with('-') || line.starts_with('*') {
            LineKind::ListItem
        } else if line.starts_with('>') {
            LineKind::Quote
        } else {
            LineKind::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub text: String,
    pub kind: LineKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub lines: Vec<PreviewLine>,
    /// Lines left out after the first `max_lines`
    pub remaining: usize,
}

/// The first `max_lines` lines of `content`, classified.
pub fn preview(content: &str, max_lines: usize) -> Preview {
    let all: Vec<&str> = content.split('\n').collect();
    let lines = all
        .iter()
        .take(max_lines)
        .map(|text| PreviewLine {
            text: text.to_string(),
            kind: LineKind::classify(text),
        })
        .collect();
    Preview {
        lines,
        remaining: all.len().saturating_sub(max_lines),
    }
}
