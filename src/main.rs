use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{warn, LevelFilter};

mod cli_bin;

use cli_bin::args::Cli;
use cli_bin::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match commands::run(cli) {
        Ok(()) => Ok(()),
        Err(e) if e.is_usage() => {
            warn!("{}", e);
            Cli::command()
                .write_help(&mut std::io::stderr())
                .context("failed to print usage")?;
            std::process::exit(e.exit_code());
        }
        Err(e) => Err(e).context("failed to generate MDM command"),
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
