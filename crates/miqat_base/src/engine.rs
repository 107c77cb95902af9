//! Assembly of the six daily times for one configuration and date.
//!
//! Each time is solar noon plus or minus an hour-angle offset:
//!
//! | time    | decimal hours                         |
//! |---------|---------------------------------------|
//! | Fajr    | noon − H(fajr zenith)                 |
//! | Sherook | noon − H(90.83333)                    |
//! | Dohr    | noon                                  |
//! | Asr     | noon + H(Asr shadow zenith)           |
//! | Maghreb | noon + H(90.83333)                    |
//! | Ishaa   | noon + H(ishaa zenith), or a fixed interval after Maghreb |
//!
//! The fixed interval (Umm al-Qura) is 2 hours during Ramadan and 1.5 hours
//! otherwise, with the month taken from the Hijri calendar.

use chrono::NaiveDate;
use miqat_time::{HijriMonth, hijri_month};
use tracing::{debug, trace};

use crate::clock::{ClockTime, Shift, hours_to_clock};
use crate::config::PrayerConfig;
use crate::error::PrayerError;
use crate::hour_angle::{asr_zenith_deg, hour_angle_offset_hours, solar_noon_hours};
use crate::prayer_types::{Prayer, PrayerSchedule};
use crate::solar::SolarPosition;

/// Ishaa interval after Maghreb in Ramadan, hours.
const ISHAA_INTERVAL_RAMADAN_H: f64 = 2.0;
/// Ishaa interval after Maghreb outside Ramadan, hours.
const ISHAA_INTERVAL_H: f64 = 1.5;

/// Prayer times for one [`PrayerConfig`] on one date.
///
/// Holds no mutable state. The solar position for the date is computed
/// once at construction; every accessor is otherwise independent.
#[derive(Debug, Clone, Copy)]
pub struct PrayerTimeEngine<'a> {
    config: &'a PrayerConfig,
    date: NaiveDate,
    correction: i32,
    solar: SolarPosition,
}

impl<'a> PrayerTimeEngine<'a> {
    /// Smallest accepted Hijri day correction.
    pub const MIN_CORRECTION: i32 = -2;
    /// Largest accepted Hijri day correction.
    pub const MAX_CORRECTION: i32 = 2;

    /// Build an engine.
    ///
    /// `correction` shifts the Hijri calendar by whole days and is only used
    /// to decide whether the date falls in Ramadan for the Umm al-Qura
    /// Ishaa rule. It must lie in [-2, 2].
    pub fn new(
        config: &'a PrayerConfig,
        date: NaiveDate,
        correction: i32,
    ) -> Result<Self, PrayerError> {
        if !(Self::MIN_CORRECTION..=Self::MAX_CORRECTION).contains(&correction) {
            return Err(PrayerError::InvalidCorrection(correction));
        }
        let solar = SolarPosition::for_date(date);
        debug!(
            %date,
            correction,
            method = config.method().name(),
            declination_deg = solar.declination_deg,
            equation_of_time_min = solar.equation_of_time_min,
            "prayer time engine ready"
        );
        Ok(Self {
            config,
            date,
            correction,
            solar,
        })
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &'a PrayerConfig {
        self.config
    }

    /// Calendar date of the schedule.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Hijri day correction.
    pub fn correction(&self) -> i32 {
        self.correction
    }

    /// Solar position computed at construction.
    pub fn solar(&self) -> &SolarPosition {
        &self.solar
    }

    /// Hours from solar noon to the moment the Sun stands at `zenith_deg`.
    fn offset_hours(&self, zenith_deg: f64) -> f64 {
        hour_angle_offset_hours(
            zenith_deg,
            self.config.latitude_deg(),
            self.solar.declination_deg,
        )
    }

    /// Zenith at which Asr begins for the configured madhab.
    pub fn asr_zenith_deg(&self) -> f64 {
        asr_zenith_deg(
            self.config.latitude_deg(),
            self.solar.declination_deg,
            self.config.madhab(),
        )
    }

    /// Solar noon (Dohr) in decimal hours.
    pub fn dohr_hours(&self) -> f64 {
        solar_noon_hours(
            self.config.longitude_difference_hours(),
            self.solar.equation_of_time_min,
        )
    }

    /// Fajr in decimal hours.
    pub fn fajr_hours(&self) -> f64 {
        self.dohr_hours() - self.offset_hours(self.config.fajr_zenith_deg())
    }

    /// Sunrise in decimal hours.
    pub fn sherook_hours(&self) -> f64 {
        self.dohr_hours() - self.offset_hours(self.config.sunrise_zenith_deg())
    }

    /// Asr in decimal hours.
    pub fn asr_hours(&self) -> f64 {
        self.dohr_hours() + self.offset_hours(self.asr_zenith_deg())
    }

    /// Sunset in decimal hours.
    pub fn maghreb_hours(&self) -> f64 {
        self.dohr_hours() + self.offset_hours(self.config.sunset_zenith_deg())
    }

    /// Ishaa in decimal hours.
    ///
    /// Only the fixed-interval rule consults the Hijri calendar. The lookup
    /// answers for any date, so it fails only when the corrected date
    /// leaves chrono's range.
    pub fn ishaa_hours(&self) -> Result<f64, PrayerError> {
        match self.config.ishaa_zenith_deg() {
            Some(zenith) => Ok(self.dohr_hours() + self.offset_hours(zenith)),
            None => {
                let month = hijri_month(self.date, self.correction)?;
                let interval = if month == HijriMonth::Ramadan.number() {
                    ISHAA_INTERVAL_RAMADAN_H
                } else {
                    ISHAA_INTERVAL_H
                };
                debug!(date = %self.date, month, interval, "fixed-interval ishaa");
                Ok(self.maghreb_hours() + interval)
            }
        }
    }

    /// Decimal hours for any of the six times.
    pub fn hours(&self, prayer: Prayer) -> Result<f64, PrayerError> {
        let hours = match prayer {
            Prayer::Fajr => self.fajr_hours(),
            Prayer::Sherook => self.sherook_hours(),
            Prayer::Dohr => self.dohr_hours(),
            Prayer::Asr => self.asr_hours(),
            Prayer::Maghreb => self.maghreb_hours(),
            Prayer::Ishaa => self.ishaa_hours()?,
        };
        trace!(%prayer, hours, morning = prayer.is_morning(), "decimal hours");
        Ok(hours)
    }

    /// Clock time for `prayer`, with `shift` seconds added.
    pub fn time(&self, prayer: Prayer, shift: impl Into<Shift>) -> Result<ClockTime, PrayerError> {
        hours_to_clock(self.hours(prayer)?, shift.into(), self.config.summer_time())
    }

    /// Dawn.
    pub fn fajr(&self, shift: impl Into<Shift>) -> Result<ClockTime, PrayerError> {
        self.time(Prayer::Fajr, shift)
    }

    /// Sunrise.
    pub fn sherook(&self, shift: impl Into<Shift>) -> Result<ClockTime, PrayerError> {
        self.time(Prayer::Sherook, shift)
    }

    /// Solar noon.
    pub fn dohr(&self, shift: impl Into<Shift>) -> Result<ClockTime, PrayerError> {
        self.time(Prayer::Dohr, shift)
    }

    /// Afternoon, by the configured madhab.
    pub fn asr(&self, shift: impl Into<Shift>) -> Result<ClockTime, PrayerError> {
        self.time(Prayer::Asr, shift)
    }

    /// Sunset.
    pub fn maghreb(&self, shift: impl Into<Shift>) -> Result<ClockTime, PrayerError> {
        self.time(Prayer::Maghreb, shift)
    }

    /// Nightfall.
    pub fn ishaa(&self, shift: impl Into<Shift>) -> Result<ClockTime, PrayerError> {
        self.time(Prayer::Ishaa, shift)
    }

    /// All six clock times with the same `shift`.
    pub fn schedule(&self, shift: impl Into<Shift>) -> Result<PrayerSchedule, PrayerError> {
        let shift = shift.into();
        Ok(PrayerSchedule {
            fajr: self.fajr(shift)?,
            sherook: self.sherook(shift)?,
            dohr: self.dohr(shift)?,
            asr: self.asr(shift)?,
            maghreb: self.maghreb(shift)?,
            ishaa: self.ishaa(shift)?,
        })
    }
}
