//! Error types for prayer time calculations.

use miqat_time::TimeError;
use thiserror::Error;

/// Errors from engine construction or clock conversion.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PrayerError {
    /// Hijri correction outside [-2, 2] at engine construction.
    #[error("correction value {0} is outside [-2, 2]")]
    InvalidCorrection(i32),

    /// Manual shift is not a finite number of seconds.
    #[error("shift must be a finite number of seconds, got {0:?}")]
    InvalidShift(String),

    /// Decimal hours are NaN or infinite, so there is no clock time.
    ///
    /// Happens when the Sun never reaches the requested zenith on that date,
    /// e.g. astronomical twilight near midsummer at high latitude.
    #[error("no clock time for decimal hours {0}")]
    NonFiniteTime(f64),

    /// Calendar lookup failed.
    #[error("calendar error: {0}")]
    Time(#[from] TimeError),
}
