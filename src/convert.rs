//! Pure conversion functions: TOML config structs + CLI flags -> output options.

use anyhow::{Result, bail};

use crate::cli::OutputArgs;
use crate::config::DisplayToml;

/// How converted dates are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Sweetmorn, Chaos 1 in the YOLD 3189`
    Text,
    /// `Chs 1, 3189`
    Short,
    /// Pretty-printed JSON array of reports.
    Json,
}

/// Resolved output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub format: OutputFormat,
    pub show_gregorian: bool,
}

/// Parses an output format name string into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "short" => Ok(OutputFormat::Short),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds [`DisplayOptions`] from the TOML display section.
///
/// CLI flags take precedence over config values.
pub fn build_display_options(display: &DisplayToml, args: &OutputArgs) -> Result<DisplayOptions> {
    let format = parse_format(args.format.as_deref().unwrap_or(&display.format))?;
    Ok(DisplayOptions {
        format,
        show_gregorian: args.gregorian || display.show_gregorian,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_format_names() {
        assert_eq!(parse_format("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse_format("Short").unwrap(), OutputFormat::Short);
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn config_used_without_flags() {
        let display = DisplayToml {
            format: "short".to_string(),
            show_gregorian: true,
        };
        let opts = build_display_options(&display, &OutputArgs::default()).unwrap();
        assert_eq!(opts.format, OutputFormat::Short);
        assert!(opts.show_gregorian);
    }

    #[test]
    fn flags_override_config() {
        let display = DisplayToml::default();
        let args = OutputArgs {
            format: Some("json".to_string()),
            gregorian: true,
        };
        let opts = build_display_options(&display, &args).unwrap();
        assert_eq!(opts.format, OutputFormat::Json);
        assert!(opts.show_gregorian);
    }

    #[test]
    fn bad_config_format_rejected() {
        let display = DisplayToml {
            format: "yaml".to_string(),
            show_gregorian: false,
        };
        let err = build_display_options(&display, &OutputArgs::default()).unwrap_err();
        assert!(err.to_string().contains("unknown output format"));
    }
}
