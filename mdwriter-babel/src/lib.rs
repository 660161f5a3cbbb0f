//! Tag syntax translation and Markdown statistics
//!
//!     This crate is the core of mdwriter. It has two independent parts that only share the
//!     input text:
//!
//!     - translator: turns lines like `AAA(Title)` or `Title1(Title)` into Markdown (`# Title`)
//!       through a [`TagTable`].
//!     - stats: scans any Markdown text and counts words, paragraphs, headings per level,
//!       list items, quotes, code fences, links and images, and estimates how much of the
//!       text is formatting.
//!
//!     This is a pure lib, that is, it powers mdwriter-cli but is shell agnostic: no code
//!     here prints, reads files or looks at env vars. Diagnostics are returned as values
//!     and callers decide how to show them.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # RecognitionError, TagError, FormatError
//!     ├── tags.rs                 # TagTable and its builder
//!     ├── translator.rs           # parse_line / parse_input / generate_markdown
//!     ├── stats.rs                # analyze and AnalysisStats
//!     ├── format.rs               # ReportFormat trait
//!     ├── registry.rs             # ReportRegistry for discovery and selection
//!     ├── formats
//!     │   ├── console.rs          # human readable report
//!     │   └── json.rs             # JSON report
//!     ├── report.rs               # generate_report and report file naming
//!     └── preview.rs              # line classification for previews
//!
//! Tag Tables
//!
//!     The default table accepts two naming schemes that are plain synonyms:
//!     `Title1`/`AAA` → `#`, `Title2`/`BBB` → `##`, `Title3`/`CCC` → `###`,
//!     `List`/`DDD` → `-`, `Quote`/`EEE` → `>`. Nothing in the translator knows which
//!     scheme a prefix comes from. Tables are built once and never change; a caller that
//!     wants extra tags builds its own table and passes it by reference.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── translator
//!     ├── stats
//!     ├── roundtrip
//!     └── fixtures
//!         ├── health.tags
//!         ├── mixed.tags
//!         └── guide.md

pub mod error;
pub mod format;
pub mod formats;
pub mod preview;
pub mod registry;
pub mod report;
pub mod stats;
pub mod tags;
pub mod translator;

pub use error::{FormatError, RecognitionError, RecognitionErrorKind, TagError};
pub use format::{ReportContext, ReportFormat};
pub use registry::ReportRegistry;
pub use report::{generate_report, generate_report_at, stats_report_filename};
pub use stats::{analyze, AnalysisStats, HeadingLevels};
pub use tags::TagTable;
pub use translator::{
    generate_markdown, parse_document, parse_input, parse_line, suggest_filename, LineDiagnostic,
    ParseOutcome, ParsedLine,
};
