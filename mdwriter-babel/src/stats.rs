//! Markdown statistics
//!
//! [`analyze`] makes a single pass over the non-blank lines of a markdown text
//! and accumulates structural counters, then derives the paragraph count and
//! the plain-text / formatting character ratios from the whole text.
//!
//! The checks are deliberately line-local and regex based; there is no
//! markdown parser behind them. Some conventions that follow from this:
//!
//! - a fenced code block counts twice in `code_block_count` (one per fence line)
//! - an image `![alt](src)` also matches the link pattern, so it counts as
//!   both an image and a link
//! - `#######` (seven or more) is not a heading
//! - the ratios count UTF-16 code units, so a character outside the Basic
//!   Multilingual Plane (most emoji) weighs two

use crate::translator::trim_line;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s").unwrap());
static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+]\s").unwrap());
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());
static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Stripped before counting words.
const WORD_PUNCTUATION: &[char] = &['#', '*', '`', '>', '-', '[', ']', '(', ')'];

/// Counted towards the formatting ratio.
const FORMATTING_CHARACTERS: &[char] = &['#', '*', '`', '>', '-', '_', '~', '[', ']', '(', ')'];

/// Heading histogram, one counter per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingLevels {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

impl HeadingLevels {
    /// Count for a level in `1..=6`; other levels have no headings.
    pub fn get(&self, level: usize) -> usize {
        match level {
            1 => self.h1,
            2 => self.h2,
            3 => self.h3,
            4 => self.h4,
            5 => self.h5,
            6 => self.h6,
            _ => 0,
        }
    }

    fn increment(&mut self, level: usize) {
        let slot = match level {
            1 => &mut self.h1,
            2 => &mut self.h2,
            3 => &mut self.h3,
            4 => &mut self.h4,
            5 => &mut self.h5,
            6 => &mut self.h6,
            _ => return,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.h1 + self.h2 + self.h3 + self.h4 + self.h5 + self.h6
    }

    /// `(level, count)` for every level, 1 through 6.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=6).map(move |level| (level, self.get(level)))
    }
}

/// Snapshot of a single [`analyze`] run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    pub word_count: usize,
    pub paragraph_count: usize,
    pub heading_levels: HeadingLevels,
    pub link_count: usize,
    pub image_count: usize,
    pub list_item_count: usize,
    pub quote_count: usize,
    pub code_block_count: usize,
    /// Percentage of characters that are not formatting characters, one decimal
    pub plain_text_ratio: f64,
    /// Percentage of characters that are formatting characters, one decimal
    pub formatting_ratio: f64,
}

impl AnalysisStats {
    /// Words per paragraph to one decimal; `0.0` when there are no paragraphs.
    pub fn average_words_per_paragraph(&self) -> f64 {
        if self.paragraph_count == 0 {
            return 0.0;
        }
        round_one_decimal(self.word_count as f64 / self.paragraph_count as f64)
    }
}

/// Analyze a markdown text.
pub fn analyze(content: &str) -> AnalysisStats {
    let mut stats = AnalysisStats::default();
    let mut formatting_characters = 0usize;

    for line in content.split('\n').filter(|line| !trim_line(line).is_empty()) {
        analyze_line(&mut stats, trim_line(line));
        formatting_characters += count_formatting_characters(line);
    }

    stats.paragraph_count = count_paragraphs(content);

    let total_characters = content.encode_utf16().count();
    let (plain, formatting) = ratios(total_characters, formatting_characters);
    stats.plain_text_ratio = plain;
    stats.formatting_ratio = formatting;

    log::debug!(
        "analyzed {total_characters} character(s): {} word(s), {} paragraph(s), {} heading(s)",
        stats.word_count,
        stats.paragraph_count,
        stats.heading_levels.total()
    );
    stats
}

fn analyze_line(stats: &mut AnalysisStats, trimmed: &str) {
    stats.word_count += count_words(trimmed);

    if let Some(captures) = HEADING.captures(trimmed) {
        stats.heading_levels.increment(captures[1].len());
    }

    if UNORDERED_ITEM.is_match(trimmed) || ORDERED_ITEM.is_match(trimmed) {
        stats.list_item_count += 1;
    }

    if trimmed.starts_with('>') {
        stats.quote_count += 1;
    }

    if trimmed.starts_with("```") {
        stats.code_block_count += 1;
    }

    stats.link_count += LINK.find_iter(trimmed).count();
    stats.image_count += IMAGE.find_iter(trimmed).count();
}

fn count_words(line: &str) -> usize {
    let stripped: String = line
        .chars()
        .filter(|c| !WORD_PUNCTUATION.contains(c))
        .collect();
    stripped.split_whitespace().count()
}

fn count_formatting_characters(line: &str) -> usize {
    line.chars()
        .filter(|c| FORMATTING_CHARACTERS.contains(c))
        .count()
}

fn count_paragraphs(content: &str) -> usize {
    PARAGRAPH_BREAK
        .split(content)
        .filter(|block| !trim_line(block).is_empty())
        .count()
}

/// `(plain, formatting)` percentages; both zero for an empty text.
fn ratios(total_characters: usize, formatting_characters: usize) -> (f64, f64) {
    if total_characters == 0 {
        return (0.0, 0.0);
    }
    let total = total_characters as f64;
    let formatting = formatting_characters as f64;
    (
        round_one_decimal((total - formatting) / total * 100.0),
        round_one_decimal(formatting / total * 100.0),
    )
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
