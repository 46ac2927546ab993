//! # Directory Entries
//!
//! A directory entry is a bare file name yielded by listing the source directory.
//! Only the name is inspected here: nothing in this module touches the filesystem.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

use crate::{MARKDOWN_EXTENSION, METADATA_ARTIFACT};

/// What happens to an entry during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Read and appended to the output file, followed by the page-break marker.
    Markdown,
    /// The `.DS_Store` artifact. Skipped by name.
    Metadata,
    /// Anything without a `.md` extension. Skipped.
    Other,
}

impl Disposition {
    pub fn label(&self) -> &'static str {
        match self {
            Disposition::Markdown => "markdown",
            Disposition::Metadata => "metadata",
            Disposition::Other => "skipped",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: OsString,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Classifies the entry by name alone.
    ///
    /// The metadata artifact is matched first and literally. Otherwise the entry is
    /// Markdown when the suffix after its last `.` is exactly `md`. A name made of a
    /// leading dot followed by `md` (a hidden file called `.md`) has no extension.
    pub fn disposition(&self) -> Disposition {
        if self.name == METADATA_ARTIFACT {
            return Disposition::Metadata;
        }

        match Path::new(&self.name).extension() {
            Some(ext) if ext == MARKDOWN_EXTENSION => Disposition::Markdown,
            _ => Disposition::Other,
        }
    }

    pub fn qualifies(&self) -> bool {
        self.disposition() == Disposition::Markdown
    }
}

impl From<OsString> for DirectoryEntry {
    fn from(name: OsString) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.to_string_lossy())
    }
}
