//! Trigonometric functions taking or returning degrees.

/// Sine of an angle in degrees.
#[inline]
pub fn dsin(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees.
#[inline]
pub fn dcos(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Tangent of an angle in degrees.
#[inline]
pub fn dtan(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arc tangent, result in degrees.
#[inline]
pub fn datan(x: f64) -> f64 {
    x.atan().to_degrees()
}
