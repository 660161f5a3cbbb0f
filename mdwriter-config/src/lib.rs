//! Shared configuration loader for mdwriter.
//!
//! `defaults/mdwriter.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`MdWriterConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdwriter_babel::error::TagError;
use mdwriter_babel::TagTable;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdwriter.default.toml");

/// Name of the per-directory configuration file picked up automatically.
pub const LOCAL_CONFIG_FILE: &str = "mdwriter.toml";

/// Top-level configuration consumed by mdwriter applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdWriterConfig {
    pub output: OutputConfig,
    pub preview: PreviewConfig,
    pub report: ReportConfig,
    #[serde(default)]
    pub tags: TagsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Where `convert --save` writes generated markdown
    pub directory: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub max_lines: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Registry name of the default report format
    pub format: String,
}

/// Tags added to (or overriding) the built-in table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsConfig {
    #[serde(default)]
    pub extra: Vec<TagEntryConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagEntryConfig {
    pub prefix: String,
    pub markdown: String,
}

impl TryFrom<&TagsConfig> for TagTable {
    type Error = TagError;

    fn try_from(config: &TagsConfig) -> Result<Self, Self::Error> {
        config
            .extra
            .iter()
            .fold(TagTable::builder_with_defaults(), |builder, entry| {
                builder.tag(entry.prefix.as_str(), entry.markdown.as_str())
            })
            .build()
    }
}

impl MdWriterConfig {
    /// The tag table described by this configuration.
    pub fn tag_table(&self) -> Result<TagTable, TagError> {
        TagTable::try_from(&self.tags)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdWriterConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdWriterConfig, ConfigError> {
    Loader::new().build()
}
