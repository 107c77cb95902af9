//! Error types for calendar conversions.

use thiserror::Error;

/// Errors from Julian day or Hijri calendar lookups.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A Hijri backend rejected the date.
    #[error("Hijri conversion error: {0}")]
    HijriConversion(String),

    /// Applying the day correction left the representable date range.
    #[error("date correction of {0} days overflows the calendar")]
    DateOverflow(i32),
}
