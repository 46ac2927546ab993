//! # Concatenator
//!
//! Binds the Markdown files of one directory into a single output file.
//!
//! For every qualifying entry, in listing order, the file content is appended to the
//! output followed by [`PAGE_BREAK_MARKER`]. The output is never truncated by a plain
//! run: running twice against the same paths doubles the output.

use std::fs;
use std::path::Path;

use tracing::debug;

use mdbind_common::PAGE_BREAK_MARKER;
use mdbind_common::config::BindConfig;
use mdbind_common::entry::DirectoryEntry;
use mdbind_common::error::{ConcatError, Result};
use mdbind_common::listing::EntryListing;

use crate::fs::{AppendFile, DirListing};

/// Counts of one run. Informational only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub listed: usize,
    pub appended: usize,
    pub skipped: usize,
}

pub struct Concatenator<L = DirListing> {
    listing: L,
}

impl Concatenator {
    pub fn new() -> Self {
        Self {
            listing: DirListing,
        }
    }
}

impl Default for Concatenator {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: EntryListing> Concatenator<L> {
    pub fn with_listing(listing: L) -> Self {
        Self { listing }
    }

    /// Lists `source_dir` without reading or writing anything.
    pub fn entries(&self, source_dir: &Path) -> Result<Vec<DirectoryEntry>> {
        let names = self
            .listing
            .list(source_dir)
            .map_err(|source| ConcatError::SourceUnavailable {
                path: source_dir.to_path_buf(),
                source,
            })?;

        Ok(names.into_iter().map(DirectoryEntry::from).collect())
    }

    /// Appends every Markdown file of `source_dir` to `output_path`.
    ///
    /// Each file costs two appends: the content, then the marker. The first failing
    /// read or write stops the run; whatever was appended before stays.
    pub fn concatenate(&self, source_dir: &Path, output_path: &Path) -> Result<Summary> {
        let entries = self.entries(source_dir)?;
        let names: Vec<String> = entries.iter().map(ToString::to_string).collect();
        debug!(target: "mdbind::listing", entries = ?names, "listed {}", source_dir.display());

        let output = AppendFile::new(output_path);
        let mut summary = Summary {
            listed: entries.len(),
            ..Summary::default()
        };

        for entry in &entries {
            if !entry.qualifies() {
                summary.skipped += 1;
                continue;
            }

            let path = source_dir.join(entry.name());
            let content = fs::read_to_string(&path)
                .map_err(|source| ConcatError::Read { path, source })?;

            output.append(content.as_bytes())?;
            output.append(PAGE_BREAK_MARKER.as_bytes())?;
            summary.appended += 1;
        }

        Ok(summary)
    }
}

/// Binds `source_dir` into `output_path` using the real directory listing.
pub fn run(source_dir: &Path, output_path: &Path) -> Result<()> {
    Concatenator::new()
        .concatenate(source_dir, output_path)
        .map(|_| ())
}

/// Runs a configured bind. With `fresh` set the output is emptied first.
pub fn bind(config: &BindConfig) -> Result<Summary> {
    if config.fresh {
        AppendFile::new(&config.output_path).truncate()?;
    }

    Concatenator::new().concatenate(&config.source_dir, &config.output_path)
}

pub fn preview(source_dir: &Path) -> Result<Vec<DirectoryEntry>> {
    Concatenator::new().entries(source_dir)
}
