use std::ffi::OsString;
use std::io;
use std::path::Path;

/// Enumerates the entries directly inside a directory.
///
/// Returns bare names, not paths. The order of the returned names is the order
/// in which they are processed; implementations must not reorder or recurse.
pub trait EntryListing {
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>>;
}
