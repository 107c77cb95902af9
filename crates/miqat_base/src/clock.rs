//! Decimal hours → wall-clock conversion.
//!
//! The conversion truncates at every step (hour, minute, second), so a
//! time can read up to one second earlier than rounding would give. There
//! is no day rollover: a time past midnight keeps an hour of 24 or more,
//! and a time before midnight of the previous day has a negative hour.
//!
//! Near the poles the Sun may never reach a zenith on a given date. The
//! solver then yields NaN hours, which have no clock reading, and the
//! conversion fails with [`PrayerError::NonFiniteTime`] instead of
//! producing a time. No high-latitude adjustment rule is applied.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::PrayerError;

/// Manual correction applied to a prayer time, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Shift {
    seconds: f64,
}

impl Shift {
    /// No correction.
    pub const NONE: Self = Self { seconds: 0.0 };

    /// Shift by `seconds`; negative moves the time earlier.
    pub const fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Shift by `minutes`.
    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_seconds(minutes * 60.0)
    }

    /// The raw shift in seconds, possibly non-finite.
    pub fn seconds(self) -> f64 {
        self.seconds
    }

    /// The shift as a finite number of seconds.
    fn checked_seconds(self) -> Result<f64, PrayerError> {
        if self.seconds.is_finite() {
            Ok(self.seconds)
        } else {
            Err(PrayerError::InvalidShift(self.seconds.to_string()))
        }
    }
}

impl From<f64> for Shift {
    fn from(seconds: f64) -> Self {
        Self::from_seconds(seconds)
    }
}

impl From<i32> for Shift {
    fn from(seconds: i32) -> Self {
        Self::from_seconds(f64::from(seconds))
    }
}

impl From<i64> for Shift {
    fn from(seconds: i64) -> Self {
        Self::from_seconds(seconds as f64)
    }
}

impl FromStr for Shift {
    type Err = PrayerError;

    /// Parse a number of seconds; anything non-numeric is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seconds = s
            .trim()
            .parse::<f64>()
            .map_err(|_| PrayerError::InvalidShift(s.to_string()))?;
        let shift = Self::from_seconds(seconds);
        shift.checked_seconds()?;
        Ok(shift)
    }
}

impl TryFrom<&str> for Shift {
    type Error = PrayerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A wall-clock time of day.
///
/// `hour` is not reduced modulo 24, and unreachable times have no
/// `ClockTime` at all; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClockTime {
    pub hour: i64,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    /// Clock time from its components, unchecked.
    pub const fn new(hour: i64, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Seconds since the start of the day (may be negative or exceed 86400).
    pub fn as_seconds(&self) -> i64 {
        self.hour * 3600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Convert decimal hours to a clock time.
///
/// `shift` is added first; `summer_time` adds one hour to the truncated
/// hour. Errors with [`PrayerError::InvalidShift`] for a non-finite shift
/// and [`PrayerError::NonFiniteTime`] when the hours themselves are not
/// finite.
pub fn hours_to_clock(
    decimal_hours: f64,
    shift: Shift,
    summer_time: bool,
) -> Result<ClockTime, PrayerError> {
    let shift_s = shift.checked_seconds()?;
    let hours = decimal_hours + shift_s / 3600.0;
    if !hours.is_finite() {
        return Err(PrayerError::NonFiniteTime(decimal_hours));
    }

    let minutes = (hours - hours.floor()) * 60.0;
    let seconds = (minutes - minutes.floor()) * 60.0;
    Ok(ClockTime {
        hour: hours.floor() as i64 + i64::from(summer_time),
        minute: minutes.floor() as u32,
        second: seconds.floor() as u32,
    })
}
