//! Terminal presentation
//!
//! Everything the library hands back as plain values (diagnostics, reports,
//! previews, the tag table) is turned into colored text here. Coloring goes
//! through `colored`, so `--color` and `NO_COLOR` apply everywhere.

use colored::Colorize;
use mdwriter_babel::preview::{LineKind, Preview};
use mdwriter_babel::tags::describe_markdown_prefix;
use mdwriter_babel::{LineDiagnostic, RecognitionError, TagTable};

const RULE_WIDTH: usize = 50;

/// Highlight a line of generated markdown by block type.
pub fn highlight_markdown_line(line: &str) -> String {
    match LineKind::classify(line) {
        LineKind::Heading(1) => line.red().bold().to_string(),
        LineKind::Heading(2) => line.yellow().bold().to_string(),
        LineKind::Heading(_) => line.blue().bold().to_string(),
        LineKind::ListItem => line.green().to_string(),
        LineKind::Quote => line.cyan().to_string(),
        LineKind::Plain => line.to_string(),
    }
}

/// Highlight generated markdown, line by line.
pub fn highlight_markdown(markdown: &str) -> String {
    markdown
        .split('\n')
        .map(highlight_markdown_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two lines per failed input line: what went wrong, then a hint.
pub fn format_diagnostic(diagnostic: &LineDiagnostic) -> String {
    let headline = format!("Line {}: {}", diagnostic.line_number, headline(&diagnostic.error));
    let hint = match &diagnostic.error {
        RecognitionError::MalformedLine { .. } => {
            "   Expected format: Title1(Your Content) or AAA(Your Content)".to_string()
        }
        RecognitionError::UnknownPrefix { known, .. } => {
            format!("   Supported: {}", known.join(", "))
        }
    };
    format!("{}\n{}", headline.red(), hint.dimmed())
}

fn headline(error: &RecognitionError) -> String {
    match error {
        RecognitionError::MalformedLine { text } => format!("Invalid format: \"{text}\""),
        RecognitionError::UnknownPrefix { prefix, .. } => format!("Unknown prefix: \"{prefix}\""),
    }
}

/// Section headers of the console report in bold.
pub fn highlight_report(report: &str) -> String {
    report
        .split('\n')
        .map(|line| {
            if line.ends_with(':') && !line.starts_with(' ') {
                line.bold().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// File header plus the highlighted head of a markdown file.
pub fn render_preview(path: &str, size_bytes: u64, preview: &Preview) -> String {
    let mut out = vec![
        "File Information:".yellow().bold().to_string(),
        format!("   Path: {}", path.green()),
        format!("   Size: {}", format!("{:.2} KB", size_bytes as f64 / 1024.0).green()),
        String::new(),
        "Content Preview:".yellow().bold().to_string(),
        "-".repeat(RULE_WIDTH),
    ];

    for line in &preview.lines {
        let text = line.text.as_str();
        out.push(match line.kind {
            LineKind::Heading(_) => text.cyan().bold().to_string(),
            LineKind::ListItem => text.green().to_string(),
            LineKind::Quote => text.yellow().to_string(),
            LineKind::Plain => text.to_string(),
        });
    }

    if preview.remaining > 0 {
        out.push(String::new());
        out.push(
            format!("... and {} more lines", preview.remaining)
                .dimmed()
                .to_string(),
        );
    }

    out.join("\n")
}

/// Syntax guide listing every markdown prefix with its aliases.
pub fn render_guide(table: &TagTable) -> String {
    let mut out = vec![
        "Syntax Guide".cyan().bold().to_string(),
        "-".repeat(RULE_WIDTH),
        String::new(),
        "Write one tag per line: PREFIX(content)".to_string(),
        String::new(),
    ];

    for (markdown, prefixes) in table.aliases() {
        out.push(format!(
            "   {:<24} {} {}",
            prefixes.join(", "),
            format!("{markdown} text").green(),
            format!("({})", describe_markdown_prefix(markdown)).dimmed()
        ));
    }

    let example: Vec<String> = table
        .aliases()
        .iter()
        .filter_map(|(_, prefixes)| prefixes.first())
        .map(|prefix| format!("   {prefix}(Example)"))
        .collect();
    if !example.is_empty() {
        out.push(String::new());
        out.push("Example:".yellow().bold().to_string());
        out.extend(example);
    }

    out.join("\n")
}
