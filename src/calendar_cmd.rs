//! Calendar command: list the Discordian dates of a span of days.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use eris_calendar::{GregorianDate, gregorian_sequence};
use eris_discordian::{DiscordianDate, convert};

use crate::cli::CalendarArgs;
use crate::config::ErisConfig;
use crate::output;

/// Print the listing.
pub fn run(args: CalendarArgs, config: &ErisConfig) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let opts = crate::convert::build_display_options(&config.display, &args.output)?;

    // CLI flags override config file values
    let start = match args.from {
        Some(ref s) => s
            .parse::<GregorianDate>()
            .with_context(|| format!("invalid --from date {s:?}"))?,
        None => GregorianDate::today().context("failed to read today's date")?,
    };
    let n_days = args.days.unwrap_or(config.calendar.days);
    let holydays_only = args.holydays_only || config.calendar.holydays_only;

    let dates = list_days(start, n_days, holydays_only)?;
    info!(
        start = %start,
        n_days,
        n_listed = dates.len(),
        "calendar built"
    );

    if !dates.is_empty() {
        println!("{}", output::render(&dates, &opts)?);
    }
    Ok(())
}

/// Converts `n_days` consecutive days from `start`, optionally keeping holydays only.
fn list_days(
    start: GregorianDate,
    n_days: usize,
    holydays_only: bool,
) -> Result<Vec<DiscordianDate>> {
    if n_days == 0 {
        bail!("day count must be at least 1");
    }
    let days = gregorian_sequence(start, n_days)
        .with_context(|| format!("cannot list {n_days} days from {}", start.iso()))?;
    Ok(days
        .into_iter()
        .map(convert)
        .filter(|d| !holydays_only || d.holyday().is_some())
        .collect())
}
