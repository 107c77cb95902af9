//! Daily Islamic prayer times from solar geometry.
//!
//! This crate provides:
//! - Calculation methods and Asr madhabs with permissive code lookup
//! - Equation of time and solar declination for a calendar date
//! - The hour-angle solver shared by every angle-based prayer
//! - Decimal hours → clock time conversion with summer time and shifts
//! - [`PrayerTimeEngine`], which assembles the six daily times
//!
//! All calculations are pure functions of a [`PrayerConfig`] and a date.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod hour_angle;
pub mod method;
pub mod prayer_types;
pub mod solar;

pub use clock::{ClockTime, Shift, hours_to_clock};
pub use config::{ConfigInputs, PrayerConfig, SUNRISE_ZENITH_DEG, SUNSET_ZENITH_DEG};
pub use engine::PrayerTimeEngine;
pub use error::PrayerError;
pub use hour_angle::{asr_zenith_deg, hour_angle_offset_hours, solar_noon_hours};
pub use method::{AsrMadhab, CalculationMethod};
pub use prayer_types::{Prayer, PrayerSchedule};
pub use solar::{SolarPosition, equation_of_time_min, sun_declination_deg};
