//! Convenience wrapper for miqat prayer time calculations.
//!
//! Provides one-call functions that build the engine, compute whole-day
//! schedules and iterate over date ranges, so callers only deal with a
//! [`PrayerConfig`] and dates.
//!
//! # Quick start
//!
//! ```rust
//! use miqat_rs::*;
//!
//! let config = PrayerConfig::new(31.2, 30.0, 2.0);
//! let date = parse_date("2024-03-20").unwrap();
//! let times = prayer_times(&config, date, 0).unwrap();
//! assert_eq!(times.dohr.to_string(), "12:02:39");
//! ```

pub mod convenience;
pub mod date;
pub mod error;

// Primary re-exports; `use miqat_rs::*` covers the common case.
pub use convenience::{
    DaySchedule, prayer_time, prayer_times, prayer_times_batch, prayer_times_range,
};
pub use date::parse_date;
pub use error::MiqatError;

// Re-export core types so callers don't need to depend on miqat_base directly.
pub use miqat_base::{
    AsrMadhab, CalculationMethod, ClockTime, ConfigInputs, Prayer, PrayerConfig, PrayerError,
    PrayerSchedule, PrayerTimeEngine, Shift,
};
pub use miqat_time::{HijriMonth, TimeError};
