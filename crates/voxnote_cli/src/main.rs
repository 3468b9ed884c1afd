//! VoxNote CLI: classify utterances and evaluate the ruleset from a shell.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_logging(&cli)?;
    commands::run(cli)
}
