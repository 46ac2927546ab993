//! # mdbind core
//!
//! The concatenation engine. [`concatenator`] walks a source directory and appends every
//! Markdown file to one output file; [`fs`] holds the filesystem adapters it runs on.

pub mod concatenator;
pub mod fs;

pub use concatenator::{Concatenator, Summary, bind, preview, run};
