//! Tag syntax translation tests
//!
//! Line-level behavior is covered by the unit tests in src/translator.rs; these
//! tests drive whole files through the public API.

mod documents;
mod markdown;
