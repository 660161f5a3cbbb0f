//! Markdown statistics tests

mod guide;
mod report;
