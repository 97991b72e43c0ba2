//! Day-of-year newtype for the proleptic Gregorian calendar.

use crate::error::CalendarError;
use crate::leap::DAYS_PER_MONTH;

/// Day-of-year (1..=365, or 1..=366 in a leap year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Day-of-year on which each month starts in a common year
/// (index 0 unused, index 1 = January starts at DOY 1, ...).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// First day-of-year of `month`, shifted by one after February in leap years.
fn month_start(month: u8, leap: bool) -> u16 {
    let shift = u16::from(leap && month > 2);
    MONTH_START_DOY[month as usize] + shift
}

impl Doy {
    /// Creates a new `Doy` for a year of the given leap status.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=365
    /// (1..=366 when `leap` is true).
    pub fn new(doy: u16, leap: bool) -> Result<Self, CalendarError> {
        let max = if leap { 366 } else { 365 };
        if !(1..=max).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy, max });
        }
        Ok(Self(doy))
    }

    /// Creates a new `Doy` from a (month, day) pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the given month.
    pub fn from_month_day(month: u8, day: u8, leap: bool) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = if month == 2 && leap {
            29
        } else {
            DAYS_PER_MONTH[month as usize]
        };
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self(month_start(month, leap) + u16::from(day) - 1))
    }

    /// Returns the inner day-of-year value.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index (0..=365).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the `(month, day)` pair for this day-of-year.
    ///
    /// `leap` must match the flag the value was created with.
    pub fn month_day(self, leap: bool) -> (u8, u8) {
        let mut month = 12;
        while month > 1 && self.0 < month_start(month, leap) {
            month -= 1;
        }
        let day = self.0 - month_start(month, leap) + 1;
        (month, day as u8)
    }
}
