//! Today command: print the current Discordian date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use eris_discordian::DiscordianDate;

use crate::cli::OutputArgs;
use crate::config::ErisConfig;
use crate::convert;
use crate::output;

/// Print today's date.
pub fn run(args: OutputArgs, config: &ErisConfig) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let opts = convert::build_display_options(&config.display, &args)?;

    let today = DiscordianDate::today().context("failed to read today's date")?;
    info!(gregorian = %today.gregorian(), "converted today's date");

    println!("{}", output::render(&[today], &opts)?);
    Ok(())
}
