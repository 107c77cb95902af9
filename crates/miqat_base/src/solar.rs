//! Low-precision solar position for prayer time work.
//!
//! Both quantities are truncated series in the number of days since
//! 2000-01-01 0h UT. They depend only on the date, never on location or
//! method.

use chrono::NaiveDate;
use miqat_math::{datan, dsin};
use miqat_time::days_since_j2000;

/// Mean anomaly of the Sun in degrees (unreduced).
fn mean_anomaly_deg(days: f64) -> f64 {
    357.528 + 0.985_600_3 * days
}

/// Equation of time in minutes for a day count since 2000-01-01 0h UT.
///
/// Positive when the mean Sun leads the true Sun, i.e. the value to add to
/// 12:00 local mean time to get the meridian transit.
pub fn equation_of_time_min(days: f64) -> f64 {
    let g = mean_anomaly_deg(days);
    // Equation of centre
    let c = 1.9148 * dsin(g) + 0.02 * dsin(2.0 * g) + 0.0003 * dsin(3.0 * g);
    let lambda = 280.47 + 0.985_600_3 * days + c;
    // Reduction to the equator
    let r = -2.468 * dsin(2.0 * lambda) + 0.053 * dsin(4.0 * lambda) + 0.0014 * dsin(6.0 * lambda);
    (c + r) * 4.0
}

/// Solar declination in degrees for a day count since 2000-01-01 0h UT.
pub fn sun_declination_deg(days: f64) -> f64 {
    let epsilon = 23.44 - 0.000_000_4 * days;
    let l = 280.466 + 0.985_647_4 * days;
    let g = mean_anomaly_deg(days);
    let lambda = l + 1.915 * dsin(g) + 0.02 * dsin(2.0 * g);
    let x = dsin(epsilon) * dsin(lambda);
    // arcsin(x) written through atan
    datan(x / (1.0 - x * x).sqrt())
}

/// Solar quantities for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Days since 2000-01-01 0h UT.
    pub days_since_j2000: f64,
    /// Equation of time in minutes.
    pub equation_of_time_min: f64,
    /// Declination in degrees.
    pub declination_deg: f64,
}

impl SolarPosition {
    /// Solar position at 0h UT of `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_days(days_since_j2000(date))
    }

    /// Solar position for a day count since 2000-01-01 0h UT.
    pub fn for_days(days: f64) -> Self {
        Self {
            days_since_j2000: days,
            equation_of_time_min: equation_of_time_min(days),
            declination_deg: sun_declination_deg(days),
        }
    }
}
