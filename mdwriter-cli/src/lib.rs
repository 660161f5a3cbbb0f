//! Terminal front end for mdwriter.
//!
//! The binary in main.rs owns argument parsing and file I/O; the presentation
//! helpers live here so they can be unit tested.

pub mod display;
