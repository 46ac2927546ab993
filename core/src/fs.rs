//! # Filesystem Adapters
//!
//! Concrete implementations used by the [`Concatenator`](crate::Concatenator) outside of tests.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mdbind_common::error::{ConcatError, Result};
use mdbind_common::listing::EntryListing;

/// Lists a directory one level deep through [`std::fs::read_dir`].
///
/// Names come back in whatever order the operating system yields them.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirListing;

impl EntryListing for DirListing {
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }
}

/// The output file. Opened in create+append mode on every single write, never held open.
#[derive(Clone, Debug)]
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, bytes: &[u8]) -> Result<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(bytes))
            .map_err(|source| self.write_error(source))
    }

    /// Creates the file, or empties it when it already exists.
    pub fn truncate(&self) -> Result<()> {
        fs::File::create(&self.path)
            .map(drop)
            .map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: io::Error) -> ConcatError {
        ConcatError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
