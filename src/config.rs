use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when no `--config` is given, if it exists.
pub const DEFAULT_CONFIG: &str = "eris.toml";

/// Top-level Eris configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ErisConfig {
    /// Output settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Settings for the `calendar` listing.
    #[serde(default)]
    pub calendar: CalendarToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub show_gregorian: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_gregorian: false,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_days")]
    pub days: usize,
    #[serde(default)]
    pub holydays_only: bool,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            days: default_days(),
            holydays_only: false,
        }
    }
}

fn default_days() -> usize {
    5
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG`] in the
/// working directory is read if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<ErisConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if !default.exists() {
                debug!("no config file, using defaults");
                return Ok(ErisConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: ErisConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: ErisConfig = toml::from_str("").unwrap();
        assert_eq!(config.display.format, "text");
        assert!(!config.display.show_gregorian);
        assert_eq!(config.calendar.days, 5);
        assert!(!config.calendar.holydays_only);
    }

    #[test]
    fn full_toml() {
        let config: ErisConfig = toml::from_str(
            r#"
            [display]
            format = "json"
            show_gregorian = true

            [calendar]
            days = 73
            holydays_only = true
            "#,
        )
        .unwrap();
        assert_eq!(config.display.format, "json");
        assert!(config.display.show_gregorian);
        assert_eq!(config.calendar.days, 73);
        assert!(config.calendar.holydays_only);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<ErisConfig, _> = toml::from_str("[display]\ncolour = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("eris.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[calendar]\ndays = 10").unwrap();

        let config = load(Some(path.as_path())).unwrap();
        assert_eq!(config.calendar.days, 10);
        assert_eq!(config.display.format, "text");
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing.toml");
        let err = load(Some(path.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn load_invalid_toml_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display\n").unwrap();
        let err = load(Some(path.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }
}
