//! Flat, serializable view of a converted date.

use serde::Serialize;

use crate::date::DiscordianDate;
use crate::error::DiscordianError;

/// Every structured field of a [`DiscordianDate`], ready for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateReport {
    /// Gregorian date as `YYYY-MM-DD Www`.
    pub gregorian: String,
    pub yold: i32,
    pub season: &'static str,
    pub season_short: &'static str,
    /// `None` on St. Tib's Day.
    pub day_of_season: Option<u8>,
    /// Weekday name, or `"St. Tib's Day"`.
    pub weekday: &'static str,
    /// 0-based weekday position, `None` on St. Tib's Day.
    pub weekday_index: Option<usize>,
    pub week: u8,
    pub day_of_year: u16,
    pub holyday: Option<&'static str>,
    pub st_tibs_day: bool,
    /// Canonical rendering.
    pub text: String,
}

impl From<&DiscordianDate> for DateReport {
    fn from(date: &DiscordianDate) -> Self {
        Self {
            gregorian: date.gregorian().to_string(),
            yold: date.yold(),
            season: date.season().name(),
            season_short: date.season().short_name(),
            day_of_season: date.day_of_season(),
            weekday: date.weekday_name(),
            weekday_index: date.weekday().map(|w| w.index()),
            week: date.week(),
            day_of_year: date.day_of_year(),
            holyday: date.holyday().map(|h| h.name()),
            st_tibs_day: date.is_st_tibs_day(),
            text: date.to_string(),
        }
    }
}

/// Serialize reports to a pretty-printed JSON array.
pub fn to_json(reports: &[DateReport]) -> Result<String, DiscordianError> {
    serde_json::to_string_pretty(reports).map_err(|e| DiscordianError::Serialization {
        reason: e.to_string(),
    })
}
