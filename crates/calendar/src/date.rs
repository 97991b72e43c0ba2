//! Proleptic Gregorian date with day-of-year context.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::doy::Doy;
use crate::error::CalendarError;
use crate::leap::{days_in_month, days_in_year, is_leap_year};

/// Earliest supported year (inside the range chrono can represent).
pub const MIN_YEAR: i32 = -262_143;

/// Latest supported year (inside the range chrono can represent).
pub const MAX_YEAR: i32 = 262_142;

/// A validated date in the proleptic Gregorian calendar.
///
/// Values are immutable; the roll operations return new dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
    doy: u16,
}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.doy).cmp(&(other.year, other.doy))
    }
}

fn check_year(year: i64) -> Result<i32, CalendarError> {
    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(CalendarError::InvalidYear { year });
    }
    Ok(year as i32)
}

/// US-English three-letter weekday abbreviation.
fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`] or the month or day is invalid for that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = check_year(i64::from(year))?;
        let doy = Doy::from_month_day(month, day, is_leap_year(year))?;
        Ok(Self {
            year,
            month,
            day,
            doy: doy.get(),
        })
    }

    /// Creates a `GregorianDate` from a year and a 1-based day-of-year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] for an unsupported year and
    /// [`CalendarError::InvalidDoy`] if `doy` exceeds the length of that year.
    pub fn from_year_doy(year: i32, doy: u16) -> Result<Self, CalendarError> {
        let year = check_year(i64::from(year))?;
        let leap = is_leap_year(year);
        let doy = Doy::new(doy, leap)?;
        let (month, day) = doy.month_day(leap);
        Ok(Self {
            year,
            month,
            day,
            doy: doy.get(),
        })
    }

    /// Returns the local calendar date of the system clock, truncated to midnight.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the clock reports a year
    /// outside the supported range.
    pub fn today() -> Result<Self, CalendarError> {
        Self::try_from(Local::now().date_naive())
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the day-of-year as a [`Doy`].
    pub fn doy(self) -> Doy {
        // Safety: the constructors validate doy against the year's length.
        Doy::new(self.doy, self.is_leap_year()).expect("GregorianDate always holds a valid doy")
    }

    /// Returns `true` if the date lies in a leap year.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.naive().weekday()
    }

    /// Returns the date as `YYYY-MM-DD`.
    pub fn iso(self) -> String {
        if self.year < 0 {
            format!("-{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month, self.day)
        } else {
            format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }

    /// Returns the next calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] on December 31 of [`MAX_YEAR`].
    pub fn next(self) -> Result<Self, CalendarError> {
        if self.doy < days_in_year(self.year) {
            return Self::from_year_doy(self.year, self.doy + 1);
        }
        if self.year == MAX_YEAR {
            return Err(CalendarError::OutOfRange {
                reason: format!("no day after {}", self.iso()),
            });
        }
        Ok(Self {
            year: self.year + 1,
            month: 1,
            day: 1,
            doy: 1,
        })
    }

    /// Advances the date by `amount` days (negative amounts go backwards).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result leaves the
    /// supported range.
    pub fn roll_days(self, amount: i64) -> Result<Self, CalendarError> {
        let naive = self.naive();
        let days = Days::new(amount.unsigned_abs());
        let rolled = if amount >= 0 {
            naive.checked_add_days(days)
        } else {
            naive.checked_sub_days(days)
        };
        rolled
            .and_then(|d| Self::try_from(d).ok())
            .ok_or_else(|| CalendarError::OutOfRange {
                reason: format!("rolling {} by {amount} days", self.iso()),
            })
    }

    /// Advances the date by `amount` years (negative amounts go backwards).
    ///
    /// February 29 rolled into a common year becomes February 28.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the target year is unsupported.
    pub fn roll_years(self, amount: i32) -> Result<Self, CalendarError> {
        let year = check_year(i64::from(self.year) + i64::from(amount)).map_err(|_| {
            CalendarError::OutOfRange {
                reason: format!("rolling {} by {amount} years", self.iso()),
            }
        })?;
        let max_day = days_in_month(year, self.month)?;
        Self::new(year, self.month, self.day.min(max_day))
    }

    /// Returns the equivalent [`NaiveDate`].
    pub fn naive(self) -> NaiveDate {
        // Safety: MIN_YEAR..=MAX_YEAR lies inside chrono's representable range
        // and month/day were validated on construction.
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
            .expect("GregorianDate always holds a date chrono can represent")
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl From<GregorianDate> for NaiveDate {
    fn from(date: GregorianDate) -> Self {
        date.naive()
    }
}

/// Formats as `YYYY-MM-DD Www`, e.g. `2024-02-29 Thu`.
impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.iso(), weekday_abbrev(self.weekday()))
    }
}

/// Parses `YYYY-MM-DD`, with an optional leading `-` for years before year 0.
impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: &str| CalendarError::Parse {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (sign, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };
        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_err("expected YYYY-MM-DD"));
        };

        let year: i64 = y
            .parse()
            .map_err(|_| parse_err("year is not a valid number"))?;
        let month: u8 = m
            .parse()
            .map_err(|_| parse_err("month is not a valid number"))?;
        let day: u8 = d
            .parse()
            .map_err(|_| parse_err("day is not a valid number"))?;

        let year = check_year(sign * year)?;
        Self::new(year, month, day)
    }
}
