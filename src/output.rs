//! Rendering of converted dates for the terminal.

use anyhow::Result;

use eris_discordian::{DateReport, DiscordianDate, to_json};

use crate::convert::{DisplayOptions, OutputFormat};

/// Renders `dates` according to `opts`, one line per date for text formats.
pub fn render(dates: &[DiscordianDate], opts: &DisplayOptions) -> Result<String> {
    if opts.format == OutputFormat::Json {
        let reports: Vec<DateReport> = dates.iter().map(DateReport::from).collect();
        return Ok(to_json(&reports)?);
    }

    let lines: Vec<String> = dates
        .iter()
        .map(|date| {
            let discordian = match opts.format {
                OutputFormat::Short => date.short(),
                _ => date.to_string(),
            };
            if opts.show_gregorian {
                format!("{}: {discordian}", date.gregorian())
            } else {
                discordian
            }
        })
        .collect();
    Ok(lines.join("\n"))
}
