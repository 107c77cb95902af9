//! Conversions between rotation angle and time.

/// Degrees of Earth rotation per hour of time.
pub const DEG_PER_HOUR: f64 = 15.0;

/// Hours of time needed for the Earth to turn through `deg` degrees.
#[inline]
pub fn deg_to_hours(deg: f64) -> f64 {
    deg / DEG_PER_HOUR
}

/// Degrees of rotation covered in `hours` hours.
#[inline]
pub fn hours_to_deg(hours: f64) -> f64 {
    hours * DEG_PER_HOUR
}
