//! Hour-angle solver and the Asr shadow zenith.
//!
//! Every angle-based prayer is solar noon plus or minus the time the Sun
//! needs to move from the meridian to a given zenith distance. The solver
//! inverts
//!
//! `cos(z) = sin(phi) sin(dec) + cos(phi) cos(dec) cos(H)`
//!
//! for the hour angle `H`. No polar guard is applied: when the Sun never
//! reaches `z` the result is NaN.

use miqat_math::{datan, dcos, deg_to_hours, dsin, dtan};

use crate::method::AsrMadhab;

/// Hours between meridian transit and the moment the Sun is at `zenith_deg`.
///
/// Always non-negative for a reachable zenith; callers subtract it for
/// morning events and add it for evening ones.
pub fn hour_angle_offset_hours(zenith_deg: f64, latitude_deg: f64, declination_deg: f64) -> f64 {
    let s = (dcos(zenith_deg) - dsin(latitude_deg) * dsin(declination_deg))
        / (dcos(latitude_deg) * dcos(declination_deg));
    // arccos(s) written through atan
    deg_to_hours(datan(-s / (1.0 - s * s).sqrt()) + 90.0)
}

/// Sun zenith in degrees at which Asr begins.
///
/// Asr starts when an object's shadow equals `shadow_factor` times its
/// length plus its shadow at noon.
pub fn asr_zenith_deg(latitude_deg: f64, declination_deg: f64, madhab: AsrMadhab) -> f64 {
    let x = dsin(latitude_deg) * dsin(declination_deg)
        + dcos(latitude_deg) * dcos(declination_deg);
    // Noon altitude
    let a = datan(x / (1.0 - x * x).sqrt());
    let shadow = madhab.shadow_factor() + 1.0 / dtan(a);
    90.0 - datan(1.0 / shadow)
}

/// Clock hour of meridian transit.
///
/// `longitude_difference_hours` is the offset of the timezone meridian from
/// the local one; `equation_of_time_min` comes from the solar series.
pub fn solar_noon_hours(longitude_difference_hours: f64, equation_of_time_min: f64) -> f64 {
    12.0 + longitude_difference_hours + equation_of_time_min / 60.0
}
