use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure aborts the run. Files appended before the failure stay in the output.
#[derive(Debug, Error)]
pub enum ConcatError {
    #[error("cannot list source directory {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Covers content that is not valid UTF-8 as well.
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to output file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConcatError>;
