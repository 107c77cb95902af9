//! Calendar collaborators for the prayer-time engine.
//!
//! This crate provides:
//! - Gregorian calendar → Julian Day conversion
//! - Gregorian → Hijri lookup with a day correction, from the Umm al-Qura
//!   tables where they exist and the arithmetic civil calendar elsewhere
//!
//! Neither conversion depends on location; both take a plain
//! [`chrono::NaiveDate`].

pub mod error;
pub mod hijri;
pub mod julian;

pub use error::TimeError;
pub use hijri::{
    HIJRI_MAX_YEAR, HIJRI_MIN_YEAR, HijriDay, HijriMonth, hijri_month, is_tabulated, to_hijri,
};
pub use julian::{J2000_MIDNIGHT_JD, calendar_to_jd, days_since_j2000, gregorian_to_jd};
