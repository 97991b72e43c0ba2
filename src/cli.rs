use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Eris Gregorian to Discordian date converter.
#[derive(Parser)]
#[command(
    name = "eris",
    version,
    about = "Convert Gregorian dates to the Discordian calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./eris.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `today`).
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print today's Discordian date.
    Today(OutputArgs),
    /// Convert one or more Gregorian dates.
    Convert(ConvertArgs),
    /// List the Discordian dates of a span of days.
    Calendar(CalendarArgs),
}

/// Output options shared by all subcommands.
#[derive(clap::Args, Default)]
pub struct OutputArgs {
    /// Output format: text, short or json. Overrides `[display].format`.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Also print the Gregorian date.
    #[arg(short, long)]
    pub gregorian: bool,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Dates to convert, as YYYY-MM-DD.
    #[arg(required = true)]
    pub dates: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// First day of the listing as YYYY-MM-DD (defaults to today).
    #[arg(long)]
    pub from: Option<String>,

    /// Number of days to list. Overrides `[calendar].days`.
    #[arg(short = 'n', long)]
    pub days: Option<usize>,

    /// Only list days that are holydays.
    #[arg(long = "holydays-only")]
    pub holydays_only: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}
