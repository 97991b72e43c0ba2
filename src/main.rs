mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod output;
mod today_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command.unwrap_or_else(|| Command::Today(Default::default())) {
        Command::Today(args) => today_cmd::run(args, &config),
        Command::Convert(args) => convert_cmd::run(args, &config),
        Command::Calendar(args) => calendar_cmd::run(args, &config),
    }
}
