//! Error type for the convenience API.

use miqat_base::PrayerError;
use thiserror::Error;

/// Errors from the convenience functions.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MiqatError {
    /// Calculation error from the engine.
    #[error(transparent)]
    Prayer(#[from] PrayerError),

    /// Date string could not be parsed.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Date range runs past the last representable date.
    #[error("date range overflows the calendar")]
    RangeOverflow,
}
