use chrono::{Days, NaiveDate};
use miqat_base::{
    ClockTime, Prayer, PrayerConfig, PrayerError, PrayerSchedule, PrayerTimeEngine, Shift,
};
use serde::Serialize;
use tracing::debug;

use crate::error::MiqatError;

/// A schedule tagged with its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub schedule: PrayerSchedule,
}

/// All six clock times for `date`, without a manual shift.
///
/// `correction` is the Hijri day correction in [-2, 2].
pub fn prayer_times(
    config: &PrayerConfig,
    date: NaiveDate,
    correction: i32,
) -> Result<PrayerSchedule, MiqatError> {
    let engine = PrayerTimeEngine::new(config, date, correction)?;
    Ok(engine.schedule(Shift::NONE)?)
}

/// One clock time for `date`, moved by `shift`.
///
/// `correction` is the Hijri day correction in [-2, 2].
pub fn prayer_time(
    config: &PrayerConfig,
    date: NaiveDate,
    prayer: Prayer,
    correction: i32,
    shift: impl Into<Shift>,
) -> Result<ClockTime, MiqatError> {
    let engine = PrayerTimeEngine::new(config, date, correction)?;
    Ok(engine.time(prayer, shift)?)
}

/// Schedules for `days` consecutive dates starting at `start`.
///
/// Stops at the first date that cannot be computed.
pub fn prayer_times_range(
    config: &PrayerConfig,
    start: NaiveDate,
    days: u32,
    correction: i32,
) -> Result<Vec<DaySchedule>, MiqatError> {
    debug!(%start, days, "computing schedule range");
    let mut out = Vec::with_capacity(days as usize);
    for offset in 0..days {
        let date = start
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or(MiqatError::RangeOverflow)?;
        out.push(DaySchedule {
            date,
            schedule: prayer_times(config, date, correction)?,
        });
    }
    Ok(out)
}

/// Schedules for arbitrary dates. Returns one `Result` per date.
///
/// The correction is checked once up front; per-date failures such as an
/// unreachable twilight do not stop the batch.
pub fn prayer_times_batch(
    config: &PrayerConfig,
    dates: &[NaiveDate],
    correction: i32,
) -> Result<Vec<Result<PrayerSchedule, MiqatError>>, MiqatError> {
    let range = PrayerTimeEngine::MIN_CORRECTION..=PrayerTimeEngine::MAX_CORRECTION;
    if !range.contains(&correction) {
        return Err(PrayerError::InvalidCorrection(correction).into());
    }
    Ok(dates
        .iter()
        .map(|&date| prayer_times(config, date, correction))
        .collect())
}
