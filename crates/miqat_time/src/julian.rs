//! Gregorian calendar to Julian Day conversion.
//!
//! Uses the Meeus algorithm (Astronomical Algorithms, ch. 7) with the
//! Gregorian reform term always applied, so dates before 1582-10-15 are
//! treated as proleptic Gregorian, consistent with `chrono`.

use chrono::{Datelike, NaiveDate};

/// Julian Day of 2000-01-01 00:00 UT.
///
/// Day counts for the solar-position series are measured from here rather
/// than from the J2000.0 epoch at noon.
pub const J2000_MIDNIGHT_JD: f64 = 2_451_544.5;

/// Julian Day for a Gregorian calendar date.
///
/// `day` may carry a fractional part for the time of day; an integral `day`
/// gives the JD at 0h UT.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (f64::from(m) + 1.0)).floor() + day + b - 1524.5
}

/// Julian Day at 0h UT for a calendar date.
pub fn gregorian_to_jd(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), f64::from(date.day()))
}

/// Days elapsed from 2000-01-01 0h UT to `date` at 0h UT.
pub fn days_since_j2000(date: NaiveDate) -> f64 {
    gregorian_to_jd(date) - J2000_MIDNIGHT_JD
}
