mod commands;
mod terminal;

use commands::{CommandLine, Commands, bind, list};
use mdbind_common::config::{self, BindConfig, Config};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg);

    match commands.command {
        Commands::Bind {
            source_dir,
            output,
            fresh,
        } => {
            print::header("binding markdown", cfg.quiet);
            let output_path = match output {
                Some(path) => path,
                None => config::default_output_path()?,
            };
            let job = BindConfig {
                source_dir,
                output_path,
                fresh,
            };
            bind::bind(&job, &cfg)
        }
        Commands::List { source_dir } => {
            print::header("source listing", cfg.quiet);
            list::list(&source_dir, &cfg)
        }
    }
}
