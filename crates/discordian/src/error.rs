//! Error types for the eris-discordian crate.

use eris_calendar::CalendarError;

/// Errors returned by the eris-discordian crate.
///
/// Conversion itself never fails; errors come from obtaining or rolling the
/// underlying Gregorian date, or from serializing reports.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiscordianError {
    /// The Gregorian date could not be built or rolled.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
