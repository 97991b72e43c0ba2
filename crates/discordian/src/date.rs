//! Gregorian to Discordian conversion.

use std::fmt;

use eris_calendar::GregorianDate;
use tracing::trace;

use crate::error::DiscordianError;
use crate::holyday::{self, Holyday, ST_TIBS_DAY};
use crate::season::Season;
use crate::weekday::Weekday;

/// Days in each Discordian season.
pub const SEASON_LENGTH: u16 = 73;

/// Days in each Discordian week.
pub const WEEK_LENGTH: u16 = 5;

/// Years between the Curse of Greyface and the Gregorian epoch.
pub const YOLD_OFFSET: i32 = 1166;

/// Where a date sits in the season/weekday cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Cycle {
    Regular { day_of_season: u8, weekday: Weekday },
    StTibs,
}

/// A date in the Discordian calendar, derived from a [`GregorianDate`].
///
/// On St. Tib's Day the season is Chaos and `week`/`day_of_year` keep the
/// values of an ordinary February 29 (12 and 60), while the weekday and
/// day of season are not applicable and report `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscordianDate {
    gregorian: GregorianDate,
    yold: i32,
    day_of_year: u16,
    week: u8,
    season: Season,
    cycle: Cycle,
}

/// Converts a Gregorian date to its Discordian equivalent.
///
/// Days after February 29 in a leap year are counted as if the leap day
/// did not exist, so every year has the same 365-day season and weekday
/// cycle and St. Tib's Day stands outside it.
#[tracing::instrument(level = "trace", skip(date), fields(gregorian = %date.iso()))]
pub fn convert(date: GregorianDate) -> DiscordianDate {
    let mut day_of_year = date.doy().get();
    let leap = date.is_leap_year();
    let st_tibs = leap && date.month_day() == (2, 29);
    if leap && date.month() >= 3 {
        day_of_year -= 1;
    }

    // 0-based position in the 365-day cycle; at most 364.
    let pos = day_of_year - 1;
    let season = Season::from_index(usize::from(pos / SEASON_LENGTH))
        .expect("day of year within 1..=365 maps to one of five seasons");
    let week = (pos / WEEK_LENGTH + 1) as u8;
    let cycle = if st_tibs {
        Cycle::StTibs
    } else {
        Cycle::Regular {
            day_of_season: (pos % SEASON_LENGTH + 1) as u8,
            weekday: Weekday::from_index(usize::from(pos % WEEK_LENGTH))
                .expect("remainder of 5 maps to one of five weekdays"),
        }
    };

    let converted = DiscordianDate {
        gregorian: date,
        yold: date.year() + YOLD_OFFSET,
        day_of_year,
        week,
        season,
        cycle,
    };
    trace!(%converted, "converted");
    converted
}

impl DiscordianDate {
    /// Returns today's date according to the local system clock.
    ///
    /// # Errors
    ///
    /// Returns [`DiscordianError::Calendar`] if the clock date is unsupported.
    pub fn today() -> Result<Self, DiscordianError> {
        Ok(convert(GregorianDate::today()?))
    }

    /// Returns the Gregorian date this value was derived from.
    pub fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    /// Returns the year of our Lady of Discord.
    pub fn yold(&self) -> i32 {
        self.yold
    }

    /// Returns the 1-based day within the 365-day Discordian year.
    ///
    /// St. Tib's Day reports 60, the same as the Chaos 60 that follows it.
    pub fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Returns the 1-based week of the year (1..=73).
    pub fn week(&self) -> u8 {
        self.week
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// Returns the day within the season (1..=73), or `None` on St. Tib's Day.
    pub fn day_of_season(&self) -> Option<u8> {
        match self.cycle {
            Cycle::Regular { day_of_season, .. } => Some(day_of_season),
            Cycle::StTibs => None,
        }
    }

    /// Returns the weekday, or `None` on St. Tib's Day.
    pub fn weekday(&self) -> Option<Weekday> {
        match self.cycle {
            Cycle::Regular { weekday, .. } => Some(weekday),
            Cycle::StTibs => None,
        }
    }

    /// Returns the weekday name, or `"St. Tib's Day"` on the intercalary day.
    pub fn weekday_name(&self) -> &'static str {
        self.weekday().map_or(ST_TIBS_DAY, Weekday::name)
    }

    pub fn is_st_tibs_day(&self) -> bool {
        self.cycle == Cycle::StTibs
    }

    /// Returns the holyday celebrated on this date, if any.
    pub fn holyday(&self) -> Option<Holyday> {
        holyday::holyday(self)
    }

    /// Returns the compact form, e.g. `"Chs 5, 3189"` or `"St. Tib's Day, 3190"`.
    pub fn short(&self) -> String {
        match self.cycle {
            Cycle::Regular { day_of_season, .. } => {
                format!("{} {}, {}", self.season.short_name(), day_of_season, self.yold)
            }
            Cycle::StTibs => format!("{ST_TIBS_DAY}, {}", self.yold),
        }
    }

    /// Returns the date `amount` Gregorian days away (negative goes backwards).
    ///
    /// # Errors
    ///
    /// Returns [`DiscordianError::Calendar`] if the result is out of range.
    pub fn roll_days(&self, amount: i64) -> Result<Self, DiscordianError> {
        Ok(convert(self.gregorian.roll_days(amount)?))
    }

    /// Returns the date `amount` Gregorian years away (negative goes backwards).
    ///
    /// St. Tib's Day rolled into a common year lands on February 28.
    ///
    /// # Errors
    ///
    /// Returns [`DiscordianError::Calendar`] if the result is out of range.
    pub fn roll_years(&self, amount: i32) -> Result<Self, DiscordianError> {
        Ok(convert(self.gregorian.roll_years(amount)?))
    }
}

impl From<GregorianDate> for DiscordianDate {
    fn from(date: GregorianDate) -> Self {
        convert(date)
    }
}

/// Formats as `<Weekday>, <Season> <Day> in the YOLD <Year>`, followed by
/// ` - Celebrate <Holyday>` on holydays. St. Tib's Day omits the day number.
impl fmt::Display for DiscordianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cycle {
            Cycle::Regular {
                day_of_season,
                weekday,
            } => write!(
                f,
                "{weekday}, {} {day_of_season} in the YOLD {}",
                self.season, self.yold
            )?,
            Cycle::StTibs => write!(
                f,
                "{ST_TIBS_DAY}, {} in the YOLD {}",
                self.season, self.yold
            )?,
        }
        if let Some(holyday) = self.holyday() {
            write!(f, " - Celebrate {holyday}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discordian(year: i32, month: u8, day: u8) -> DiscordianDate {
        convert(GregorianDate::new(year, month, day).unwrap())
    }

    #[test]
    fn new_year() {
        let date = discordian(2023, 1, 1);
        assert_eq!(date.yold(), 3189);
        assert_eq!(date.season(), Season::Chaos);
        assert_eq!(date.day_of_season(), Some(1));
        assert_eq!(date.weekday(), Some(Weekday::Sweetmorn));
        assert_eq!(date.week(), 1);
        assert_eq!(date.day_of_year(), 1);
        assert!(!date.is_st_tibs_day());
    }

    #[test]
    fn last_day_common_year() {
        let date = discordian(2023, 12, 31);
        assert_eq!(date.season(), Season::TheAftermath);
        assert_eq!(date.day_of_season(), Some(73));
        assert_eq!(date.weekday(), Some(Weekday::SettingOrange));
        assert_eq!(date.week(), 73);
        assert_eq!(date.day_of_year(), 365);
    }

    #[test]
    fn last_day_leap_year() {
        let date = discordian(2024, 12, 31);
        assert_eq!(date.day_of_year(), 365);
        assert_eq!(date.day_of_season(), Some(73));
        assert_eq!(date.weekday(), Some(Weekday::SettingOrange));
    }

    #[test]
    fn st_tibs_day_fields() {
        let date = discordian(2024, 2, 29);
        assert!(date.is_st_tibs_day());
        assert_eq!(date.weekday(), None);
        assert_eq!(date.day_of_season(), None);
        assert_eq!(date.weekday_name(), "St. Tib's Day");
        assert_eq!(date.season(), Season::Chaos);
        assert_eq!(date.day_of_year(), 60);
        assert_eq!(date.week(), 12);
        assert_eq!(date.yold(), 3190);
    }

    #[test]
    fn days_around_st_tibs() {
        let before = discordian(2024, 2, 28);
        assert_eq!(before.day_of_season(), Some(59));
        assert_eq!(before.weekday(), Some(Weekday::PricklePrickle));

        let after = discordian(2024, 3, 1);
        assert_eq!(after.day_of_season(), Some(60));
        assert_eq!(after.weekday(), Some(Weekday::SettingOrange));
        assert_eq!(after.day_of_year(), 60);
    }

    #[test]
    fn display_ordinary_day() {
        assert_eq!(
            discordian(2023, 1, 1).to_string(),
            "Sweetmorn, Chaos 1 in the YOLD 3189"
        );
        assert_eq!(
            discordian(2023, 12, 31).to_string(),
            "Setting Orange, The Aftermath 73 in the YOLD 3189"
        );
    }

    #[test]
    fn display_holyday() {
        assert_eq!(
            discordian(2023, 1, 5).to_string(),
            "Setting Orange, Chaos 5 in the YOLD 3189 - Celebrate Mungday"
        );
    }

    #[test]
    fn display_st_tibs_day() {
        assert_eq!(
            discordian(2024, 2, 29).to_string(),
            "St. Tib's Day, Chaos in the YOLD 3190 - Celebrate St. Tib's Day"
        );
    }

    #[test]
    fn short_form() {
        assert_eq!(discordian(2023, 1, 5).short(), "Chs 5, 3189");
        assert_eq!(discordian(2023, 12, 8).short(), "Afm 50, 3189");
        assert_eq!(discordian(2024, 2, 29).short(), "St. Tib's Day, 3190");
    }

    #[test]
    fn roll_days_reconverts() {
        let date = discordian(2024, 2, 28);
        let rolled = date.roll_days(1).unwrap();
        assert!(rolled.is_st_tibs_day());
        assert_eq!(rolled.gregorian(), GregorianDate::new(2024, 2, 29).unwrap());
        assert_eq!(rolled.roll_days(-1).unwrap(), date);
    }

    #[test]
    fn roll_years_off_st_tibs() {
        let date = discordian(2024, 2, 29);
        let rolled = date.roll_years(1).unwrap();
        assert!(!rolled.is_st_tibs_day());
        assert_eq!(rolled.day_of_season(), Some(59));
        assert_eq!(rolled.yold(), 3191);
    }

    #[test]
    fn from_gregorian() {
        let greg = GregorianDate::new(1970, 1, 1).unwrap();
        assert_eq!(DiscordianDate::from(greg), convert(greg));
    }

    #[test]
    fn negative_years_offset() {
        let date = discordian(-1166, 1, 1);
        assert_eq!(date.yold(), 0);
        assert_eq!(date.day_of_season(), Some(1));
    }
}
