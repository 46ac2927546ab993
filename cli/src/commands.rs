pub mod bind;
pub mod list;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mdbind")]
#[command(about = "Bind a directory of Markdown files into one printable document.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less. Once hides headers, twice also hides the summary
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show the raw directory listing before filtering
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append every Markdown file of a directory to one output file
    #[command(alias = "b")]
    Bind {
        /// Directory whose Markdown files are bound (not recursive)
        source_dir: PathBuf,

        /// Output file. Defaults to index.md next to the executable
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Empty the output file first instead of appending to it
        #[arg(long)]
        fresh: bool,
    },
    /// Show which entries of a directory would be bound
    #[command(alias = "l")]
    List { source_dir: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
