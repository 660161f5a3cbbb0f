//! Error types for translation, tag tables and report rendering

use std::fmt;

/// Why a single input line could not be translated.
///
/// Recognition errors are local: the line is skipped and translation of the
/// rest of the input continues. They carry everything a presentation layer
/// needs to explain the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    /// The line does not have the `PREFIX(content)` shape
    MalformedLine { text: String },
    /// The shape matched but the prefix is not in the tag table
    UnknownPrefix { prefix: String, known: Vec<String> },
}

/// Discriminant of a [`RecognitionError`], handy for grouping diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognitionErrorKind {
    MalformedLine,
    UnknownPrefix,
}

impl RecognitionError {
    pub fn kind(&self) -> RecognitionErrorKind {
        match self {
            RecognitionError::MalformedLine { .. } => RecognitionErrorKind::MalformedLine,
            RecognitionError::UnknownPrefix { .. } => RecognitionErrorKind::UnknownPrefix,
        }
    }

    /// The offending text: the whole trimmed line, or just the prefix.
    pub fn offending_text(&self) -> &str {
        match self {
            RecognitionError::MalformedLine { text } => text,
            RecognitionError::UnknownPrefix { prefix, .. } => prefix,
        }
    }

    /// Prefixes the table knows about. Empty for malformed lines.
    pub fn known_prefixes(&self) -> &[String] {
        match self {
            RecognitionError::MalformedLine { .. } => &[],
            RecognitionError::UnknownPrefix { known, .. } => known,
        }
    }
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionError::MalformedLine { text } => {
                write!(f, "Invalid format: \"{text}\" (expected PREFIX(content))")
            }
            RecognitionError::UnknownPrefix { prefix, known } => {
                write!(
                    f,
                    "Unknown prefix: \"{prefix}\" (supported: {})",
                    known.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for RecognitionError {}

/// Errors raised while building a tag table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Prefix is empty or contains characters other than ASCII letters and digits
    InvalidPrefix(String),
    /// Prefix maps to an empty markdown prefix
    EmptyMarkdown(String),
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::InvalidPrefix(prefix) => write!(
                f,
                "Invalid tag prefix '{prefix}': only ASCII letters and digits are allowed"
            ),
            TagError::EmptyMarkdown(prefix) => {
                write!(f, "Tag prefix '{prefix}' maps to an empty markdown prefix")
            }
        }
    }
}

impl std::error::Error for TagError {}

/// Errors that can occur while rendering reports
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Report format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Report format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
