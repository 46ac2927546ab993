use colored::*;
use tracing::info;

use mdbind_common::config::{BindConfig, Config};
use mdbind_core::Summary;

use crate::terminal::{colors, print};

pub fn bind(job: &BindConfig, cfg: &Config) -> anyhow::Result<()> {
    if job.fresh && cfg.quiet == 0 {
        print::print_status(format!(
            "starting fresh: {} will be emptied first",
            job.output_path.display()
        ));
    }

    let summary: Summary = mdbind_core::bind(job)?;

    bind_ends(&summary, job, cfg);
    Ok(())
}

fn bind_ends(summary: &Summary, job: &BindConfig, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    print::fat_separator(cfg.quiet);

    let appended: ColoredString = format!("{} markdown files", summary.appended).bold().green();
    let skipped: ColoredString = format!("{} skipped", summary.skipped).color(colors::MUTED);
    let output: ColoredString = job.output_path.display().to_string().bold();

    if summary.appended == 0 {
        let nothing: ColoredString = "no markdown files".color(colors::WARNING).bold();
        info!("Bind complete: {nothing} in {} ({skipped})", job.source_dir.display());
        return;
    }

    info!("Bind complete: {appended} appended to {output} ({skipped})");
}
