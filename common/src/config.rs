use std::path::PathBuf;

use anyhow::Context;

/// File name of the output file when no explicit path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "index.md";

/// Terminal behavior.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// 0 prints everything, 1 hides headers, 2 also hides the summary.
    pub quiet: u8,
    /// Shows the raw directory listing before filtering.
    pub verbose: bool,
}

/// Inputs of one bind run.
#[derive(Clone, Debug)]
pub struct BindConfig {
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
    /// Empties the output file before binding instead of appending to what is
    /// already there.
    pub fresh: bool,
}

impl BindConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_path: output_path.into(),
            fresh: false,
        }
    }
}

/// `index.md` next to the running executable.
pub fn default_output_path() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("executable {} has no parent directory", exe.display()))?;

    Ok(dir.join(DEFAULT_OUTPUT_NAME))
}
