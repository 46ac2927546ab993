//! # mdbind common
//!
//! Types shared by the concatenation engine and the command line:
//!
//! * **[`entry`]**: directory entries and the rule deciding which ones get bound.
//! * **[`listing`]**: the seam through which the engine enumerates a source directory.
//! * **[`config`]**: paths and terminal options threaded through a run.
//! * **[`error`]**: the failure taxonomy of a run.

pub mod config;
pub mod entry;
pub mod error;
pub mod listing;

/// Appended verbatim after the content of every bound file, the last one included.
pub const PAGE_BREAK_MARKER: &str = r#"<div STYLE="page-break-after: always;"></div>"#;

/// Finder metadata artifact, skipped by name regardless of its extension.
pub const METADATA_ARTIFACT: &str = ".DS_Store";

/// Extension (without the dot) a file needs to be bound. Case-sensitive.
pub const MARKDOWN_EXTENSION: &str = "md";
