//! Report format registry
//!
//! Centralized registry of report renderers. Renderers are registered and
//! retrieved by name.

use crate::error::FormatError;
use crate::format::{ReportContext, ReportFormat};
use crate::stats::AnalysisStats;
use std::collections::HashMap;

/// Registry of report formats
///
/// # Examples
///
/// ```ignore
/// let registry = ReportRegistry::default();
/// let report = registry.render(&stats, "json", &ReportContext::now())?;
/// ```
pub struct ReportRegistry {
    formats: HashMap<String, Box<dyn ReportFormat>>,
}

impl ReportRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ReportRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: ReportFormat + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn ReportFormat, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from an output filename based on its extension
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Render statistics with the named format
    pub fn render(
        &self,
        stats: &AnalysisStats,
        format: &str,
        context: &ReportContext,
    ) -> Result<String, FormatError> {
        self.get(format)?.render(stats, context)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::console::ConsoleReport);
        registry.register(crate::formats::json::JsonReport);

        registry
    }
}

impl Default for ReportRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
