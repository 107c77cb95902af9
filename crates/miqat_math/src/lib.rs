//! Degree-based trigonometry shared by the miqat crates.
//!
//! Every astronomical formula in the prayer-time pipeline is written in
//! degrees. These helpers keep the conversions in one place so the formulas
//! read the way they are published.

pub mod angle;
pub mod trig;

pub use angle::{DEG_PER_HOUR, deg_to_hours, hours_to_deg};
pub use trig::{datan, dcos, dsin, dtan};
