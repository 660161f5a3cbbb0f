//! Tag table: prefix → markdown block prefix
//!
//! A [`TagTable`] is built once (from the defaults, or through a
//! [`TagTableBuilder`]) and is read-only afterwards. Several prefixes may map to
//! the same markdown prefix; the translator treats every alias the same way.

use crate::error::TagError;
use std::collections::HashMap;

/// Built-in entries. `Title*`/`List`/`Quote` and `AAA`..`EEE` are synonyms.
pub const DEFAULT_TAGS: &[(&str, &str)] = &[
    ("Title1", "#"),
    ("Title2", "##"),
    ("Title3", "###"),
    ("List", "-"),
    ("Quote", ">"),
    ("AAA", "#"),
    ("BBB", "##"),
    ("CCC", "###"),
    ("DDD", "-"),
    ("EEE", ">"),
];

/// Immutable mapping from a case-sensitive alphanumeric prefix to a markdown prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTable {
    /// Insertion-ordered entries, used for listing.
    entries: Vec<(String, String)>,
    /// Prefix → position in `entries`.
    index: HashMap<String, usize>,
}

impl TagTable {
    /// The built-in table (see [`DEFAULT_TAGS`]).
    pub fn with_defaults() -> Self {
        Self::builder_with_defaults().finish()
    }

    /// Start an empty builder.
    pub fn builder() -> TagTableBuilder {
        TagTableBuilder::default()
    }

    /// Start a builder seeded with the built-in entries.
    pub fn builder_with_defaults() -> TagTableBuilder {
        let mut builder = TagTableBuilder::default();
        for (prefix, markdown) in DEFAULT_TAGS {
            builder = builder.tag(*prefix, *markdown);
        }
        builder
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.index
            .get(prefix)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.index.contains_key(prefix)
    }

    /// Known prefixes, in insertion order.
    pub fn prefixes(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(prefix, _)| prefix.clone())
            .collect()
    }

    /// `(prefix, markdown)` pairs, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(prefix, markdown)| (prefix.as_str(), markdown.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups prefixes by the markdown prefix they produce.
    ///
    /// Groups appear in the order their markdown prefix is first seen; the
    /// prefixes inside a group keep insertion order. Used for the syntax guide.
    pub fn aliases(&self) -> Vec<(&str, Vec<&str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
        for (prefix, markdown) in self.entries() {
            match groups.iter_mut().find(|(md, _)| *md == markdown) {
                Some((_, prefixes)) => prefixes.push(prefix),
                None => groups.push((markdown, vec![prefix])),
            }
        }
        groups
    }
}

impl Default for TagTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Collects entries and validates them into a [`TagTable`].
#[derive(Debug, Clone, Default)]
pub struct TagTableBuilder {
    entries: Vec<(String, String)>,
}

impl TagTableBuilder {
    /// Add an entry. Re-declaring a prefix replaces its markdown prefix in place.
    pub fn tag(mut self, prefix: impl Into<String>, markdown: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let markdown = markdown.into();
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = markdown,
            None => self.entries.push((prefix, markdown)),
        }
        self
    }

    /// Validate the collected entries and freeze them.
    pub fn build(self) -> Result<TagTable, TagError> {
        for (prefix, markdown) in &self.entries {
            if !is_valid_prefix(prefix) {
                return Err(TagError::InvalidPrefix(prefix.clone()));
            }
            if markdown.trim().is_empty() {
                return Err(TagError::EmptyMarkdown(prefix.clone()));
            }
        }
        Ok(self.finish())
    }

    fn finish(self) -> TagTable {
        let index = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, (prefix, _))| (prefix.clone(), position))
            .collect();
        TagTable {
            entries: self.entries,
            index,
        }
    }
}

/// Prefixes are one or more ASCII letters or digits.
pub fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Human name for a markdown block prefix, e.g. `"##"` → `"Heading 2"`.
pub fn describe_markdown_prefix(markdown: &str) -> String {
    match markdown {
        "-" | "*" | "+" => "List item".to_string(),
        ">" => "Quote".to_string(),
        md if !md.is_empty() && md.len() <= 6 && md.chars().all(|c| c == '#') => {
            format!("Heading {}", md.len())
        }
        other => other.to_string(),
    }
}
