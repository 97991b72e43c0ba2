//! Convert command: convert explicit Gregorian dates.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use eris_calendar::GregorianDate;
use eris_discordian::{DiscordianDate, convert};

use crate::cli::ConvertArgs;
use crate::config::ErisConfig;
use crate::output;

/// Parse and convert each date argument.
pub fn run(args: ConvertArgs, config: &ErisConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let opts = crate::convert::build_display_options(&config.display, &args.output)?;

    let dates = parse_dates(&args.dates)?;
    debug!(n_dates = dates.len(), "dates converted");

    println!("{}", output::render(&dates, &opts)?);
    Ok(())
}

/// Parses `YYYY-MM-DD` arguments and converts them, failing on the first bad one.
fn parse_dates(inputs: &[String]) -> Result<Vec<DiscordianDate>> {
    inputs
        .iter()
        .map(|s| {
            let date: GregorianDate = s
                .parse()
                .with_context(|| format!("invalid date argument {s:?}"))?;
            Ok(convert(date))
        })
        .collect()
}
