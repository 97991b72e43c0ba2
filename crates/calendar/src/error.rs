//! Error types for the eris-calendar crate.

use crate::date::{MAX_YEAR, MIN_YEAR};

/// Error type for all fallible operations in the eris-calendar crate.
///
/// This enum covers validation failures for years, months, day-of-month and
/// day-of-year values in the proleptic Gregorian calendar, arithmetic that
/// leaves the supported year range, and malformed date strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a year lies outside the supported range.
    #[error("invalid year: {year} (must be {}..={})", MIN_YEAR, MAX_YEAR)]
    InvalidYear {
        /// The invalid year that was provided.
        year: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a day-of-year value is outside 1..=365 (or 1..=366 in a leap year).
    #[error("invalid day of year: {doy} (must be 1..={max})")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
        /// The length of the year the value was checked against.
        max: u16,
    },

    /// Returned when date arithmetic leaves the supported range.
    #[error("date out of range: {reason}")]
    OutOfRange {
        /// Description of the overflowing operation.
        reason: String,
    },

    /// Returned when a string is not a `YYYY-MM-DD` date.
    #[error("cannot parse date {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year() {
        let err = CalendarError::InvalidYear { year: 300_000 };
        assert_eq!(
            err.to_string(),
            "invalid year: 300000 (must be -262143..=262142)"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for month 2 (max 28)");
    }

    #[test]
    fn error_invalid_doy() {
        let err = CalendarError::InvalidDoy { doy: 366, max: 365 };
        assert_eq!(
            err.to_string(),
            "invalid day of year: 366 (must be 1..=365)"
        );
    }

    #[test]
    fn error_out_of_range() {
        let err = CalendarError::OutOfRange {
            reason: "adding 1 day to 262142-12-31".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "date out of range: adding 1 day to 262142-12-31"
        );
    }

    #[test]
    fn error_parse() {
        let err = CalendarError::Parse {
            input: "2024/01/01".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot parse date \"2024/01/01\": expected YYYY-MM-DD"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
