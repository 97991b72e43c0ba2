//! Date sequence generation.

use crate::date::GregorianDate;
use crate::error::CalendarError;

/// Upper bound on the up-front reservation; longer runs grow on demand.
const MAX_RESERVE: usize = 366;

/// Generates a contiguous sequence of Gregorian dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month and year boundaries,
/// including February 29 in leap years, are handled by [`GregorianDate::next`].
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the sequence would run past the
/// last supported date.
///
/// # Example
///
/// ```ignore
/// let start = GregorianDate::new(2024, 2, 28).unwrap();
/// let dates = gregorian_sequence(start, 3).unwrap();
/// // Feb 28, Feb 29, Mar 1
/// ```
pub fn gregorian_sequence(
    start: GregorianDate,
    n_days: usize,
) -> Result<Vec<GregorianDate>, CalendarError> {
    if n_days == 0 {
        return Ok(Vec::new());
    }
    let span = i64::try_from(n_days - 1).map_err(|_| CalendarError::OutOfRange {
        reason: format!("{n_days} days from {}", start.iso()),
    })?;
    start.roll_days(span)?;

    let mut dates = Vec::with_capacity(n_days.min(MAX_RESERVE));
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next()?;
        dates.push(current);
    }
    Ok(dates)
}
