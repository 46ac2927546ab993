use std::path::Path;

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use mdbind_common::config::Config;
use mdbind_common::entry::{DirectoryEntry, Disposition};

use crate::terminal::{colors, print};

pub fn list(source_dir: &Path, cfg: &Config) -> anyhow::Result<()> {
    let entries: Vec<DirectoryEntry> = mdbind_core::preview(source_dir)?;

    if entries.is_empty() {
        if cfg.quiet < 2 {
            info!("{} is empty", source_dir.display());
        }
        return Ok(());
    }

    let names: Vec<String> = entries.iter().map(ToString::to_string).collect();
    let key_width: usize = names
        .iter()
        .map(|name| UnicodeWidthStr::width(name.as_str()))
        .max()
        .unwrap_or(0);

    for (entry, name) in entries.iter().zip(&names) {
        print::aligned_line(name, key_width, disposition_label(entry.disposition()));
    }

    if cfg.quiet < 2 {
        let bound = entries.iter().filter(|entry| entry.qualifies()).count();
        info!(
            "{} of {} entries would be bound",
            bound.to_string().green().bold(),
            entries.len()
        );
    }

    Ok(())
}

fn disposition_label(disposition: Disposition) -> ColoredString {
    let label = disposition.label();
    match disposition {
        Disposition::Markdown => label.color(colors::PRIMARY).bold(),
        Disposition::Metadata | Disposition::Other => label.color(colors::MUTED),
    }
}
