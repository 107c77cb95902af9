//! Gregorian to Hijri lookup.
//!
//! Dates inside the published Umm al-Qura tables are converted with the
//! `hijri_date` crate. Dates outside them fall back to the arithmetic
//! Islamic civil calendar from `icu_calendar`, so every date has a month.
//! A day correction is applied first to follow local moon sighting.

use chrono::{Datelike, Days, NaiveDate};
use icu_calendar::{Date, islamic::IslamicCivil};
use tracing::trace;

use crate::error::TimeError;

/// First Gregorian year covered by the Umm al-Qura tables.
pub const HIJRI_MIN_YEAR: i32 = 1938;
/// Last Gregorian year covered by the Umm al-Qura tables.
pub const HIJRI_MAX_YEAR: i32 = 2076;

/// The twelve months of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlUla,
    JumadaAlAkhirah,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQidah,
    DhuAlHijjah,
}

const ALL_MONTHS: [HijriMonth; 12] = [
    HijriMonth::Muharram,
    HijriMonth::Safar,
    HijriMonth::RabiAlAwwal,
    HijriMonth::RabiAlThani,
    HijriMonth::JumadaAlUla,
    HijriMonth::JumadaAlAkhirah,
    HijriMonth::Rajab,
    HijriMonth::Shaban,
    HijriMonth::Ramadan,
    HijriMonth::Shawwal,
    HijriMonth::DhuAlQidah,
    HijriMonth::DhuAlHijjah,
];

impl HijriMonth {
    /// Month for a 1-based month number, `None` outside 1..=12.
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        ALL_MONTHS.get(idx).copied()
    }

    /// 1-based month number.
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Transliterated month name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Muharram => "Muharram",
            Self::Safar => "Safar",
            Self::RabiAlAwwal => "Rabi' al-Awwal",
            Self::RabiAlThani => "Rabi' al-Thani",
            Self::JumadaAlUla => "Jumada al-Ula",
            Self::JumadaAlAkhirah => "Jumada al-Akhirah",
            Self::Rajab => "Rajab",
            Self::Shaban => "Sha'ban",
            Self::Ramadan => "Ramadan",
            Self::Shawwal => "Shawwal",
            Self::DhuAlQidah => "Dhu al-Qi'dah",
            Self::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }
}

/// A Hijri calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriDay {
    pub year: i32,
    pub month: HijriMonth,
    pub day: u32,
}

/// Shift `date` by `correction` days in either direction.
fn corrected(date: NaiveDate, correction: i32) -> Result<NaiveDate, TimeError> {
    let days = Days::new(u64::from(correction.unsigned_abs()));
    let shifted = if correction >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.ok_or(TimeError::DateOverflow(correction))
}

/// Whether `year` falls inside the Umm al-Qura tables.
pub fn is_tabulated(year: i32) -> bool {
    (HIJRI_MIN_YEAR..=HIJRI_MAX_YEAR).contains(&year)
}

fn month_from(n: u32) -> Result<HijriMonth, TimeError> {
    HijriMonth::from_number(n)
        .ok_or_else(|| TimeError::HijriConversion(format!("month {n} out of range")))
}

fn umm_al_qura(date: NaiveDate) -> Result<HijriDay, TimeError> {
    // Callers check `is_tabulated`, so every component is positive.
    let hd = ::hijri_date::HijriDate::from_gr(
        date.year() as usize,
        date.month() as usize,
        date.day() as usize,
    )
    .map_err(|e| TimeError::HijriConversion(e.to_string()))?;

    let month = u32::try_from(hd.month())
        .map_err(|e| TimeError::HijriConversion(e.to_string()))
        .and_then(month_from)?;
    Ok(HijriDay {
        year: i32::try_from(hd.year()).map_err(|e| TimeError::HijriConversion(e.to_string()))?,
        month,
        day: u32::try_from(hd.day()).map_err(|e| TimeError::HijriConversion(e.to_string()))?,
    })
}

fn islamic_civil(date: NaiveDate) -> Result<HijriDay, TimeError> {
    // chrono months and days always fit in a u8
    let iso = Date::try_new_iso_date(date.year(), date.month() as u8, date.day() as u8)
        .map_err(|e| TimeError::HijriConversion(e.to_string()))?;
    let civil = iso.to_calendar(IslamicCivil::new());
    Ok(HijriDay {
        year: civil.year().number,
        month: month_from(civil.month().ordinal)?,
        day: civil.day_of_month().0,
    })
}

/// Convert a Gregorian date to its Hijri day.
///
/// `correction` moves the Gregorian date by that many days before the lookup;
/// a positive value puts the Hijri calendar ahead. Years outside
/// [`HIJRI_MIN_YEAR`]..=[`HIJRI_MAX_YEAR`] use the arithmetic civil calendar,
/// which can differ from the sighted month by a day or two.
pub fn to_hijri(date: NaiveDate, correction: i32) -> Result<HijriDay, TimeError> {
    let adjusted = corrected(date, correction)?;
    let tabulated = is_tabulated(adjusted.year());
    let day = if tabulated {
        umm_al_qura(adjusted)?
    } else {
        islamic_civil(adjusted)?
    };
    trace!(%date, correction, tabulated, ?day, "hijri lookup");
    Ok(day)
}

/// Hijri month number (1..=12) for a Gregorian date.
pub fn hijri_month(date: NaiveDate, correction: i32) -> Result<u32, TimeError> {
    Ok(to_hijri(date, correction)?.month.number())
}
