//! Prayer identifiers and the whole-day schedule.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::clock::ClockTime;

/// The six daily times, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Prayer {
    Fajr,
    /// Sunrise. Not a prayer itself, but it ends the Fajr window.
    Sherook,
    Dohr,
    Asr,
    Maghreb,
    Ishaa,
}

impl Prayer {
    /// All six in chronological order.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sherook,
        Self::Dohr,
        Self::Asr,
        Self::Maghreb,
        Self::Ishaa,
    ];

    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sherook => "Sherook",
            Self::Dohr => "Dohr",
            Self::Asr => "Asr",
            Self::Maghreb => "Maghreb",
            Self::Ishaa => "Ishaa",
        }
    }

    /// Whether the time is before solar noon.
    pub const fn is_morning(self) -> bool {
        matches!(self, Self::Fajr | Self::Sherook)
    }
}

impl Display for Prayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Clock times for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrayerSchedule {
    pub fajr: ClockTime,
    pub sherook: ClockTime,
    pub dohr: ClockTime,
    pub asr: ClockTime,
    pub maghreb: ClockTime,
    pub ishaa: ClockTime,
}

impl PrayerSchedule {
    /// Clock time of `prayer`.
    pub fn get(&self, prayer: Prayer) -> ClockTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sherook => self.sherook,
            Prayer::Dohr => self.dohr,
            Prayer::Asr => self.asr,
            Prayer::Maghreb => self.maghreb,
            Prayer::Ishaa => self.ishaa,
        }
    }

    /// `(prayer, time)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, ClockTime)> + '_ {
        Prayer::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}
