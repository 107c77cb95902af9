//! Location and method configuration.
//!
//! A [`PrayerConfig`] is resolved once from raw inputs and never changes.
//! Everything derived from it (meridian offset, zenith angles) is computed
//! from the stored fields on demand.

use miqat_math::{deg_to_hours, hours_to_deg};
use serde::{Deserialize, Serialize};

use crate::method::{AsrMadhab, CalculationMethod};

/// Sun zenith at sunrise: 90 deg plus refraction and solar semidiameter.
pub const SUNRISE_ZENITH_DEG: f64 = 90.83333;
/// Sun zenith at sunset.
pub const SUNSET_ZENITH_DEG: f64 = 90.83333;

fn default_method_code() -> i64 {
    CalculationMethod::DEFAULT_CODE
}

fn default_madhab_code() -> i64 {
    AsrMadhab::DEFAULT_CODE
}

/// Raw configuration inputs, as read from a settings file or request.
///
/// Method and madhab are integer codes; they are resolved permissively by
/// [`PrayerConfig::from_inputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfigInputs {
    /// Longitude in degrees, east positive.
    pub longitude: f64,
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Offset from UTC in hours.
    pub timezone: f64,
    /// Calculation method code (1..=5). Default: 3.
    #[serde(default = "default_method_code")]
    pub method: i64,
    /// Asr madhab code (1 = Shafii, 2 = Hanafi). Default: 1.
    #[serde(default = "default_madhab_code")]
    pub madhab: i64,
    /// Whether summer time is in force. Default: false.
    #[serde(default)]
    pub summer_time: bool,
}

impl ConfigInputs {
    /// Inputs with default method and madhab codes and no summer time.
    pub fn new(longitude: f64, latitude: f64, timezone: f64) -> Self {
        Self {
            longitude,
            latitude,
            timezone,
            method: default_method_code(),
            madhab: default_madhab_code(),
            summer_time: false,
        }
    }
}

/// Immutable location/method configuration for prayer times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerConfig {
    longitude_deg: f64,
    latitude_deg: f64,
    timezone_hours: f64,
    method: CalculationMethod,
    madhab: AsrMadhab,
    summer_time: bool,
}

impl PrayerConfig {
    /// Configuration with the default method (Egyptian), Shafii Asr and no
    /// summer time.
    ///
    /// Coordinates are not range-checked.
    pub fn new(longitude_deg: f64, latitude_deg: f64, timezone_hours: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
            timezone_hours,
            method: CalculationMethod::default(),
            madhab: AsrMadhab::default(),
            summer_time: false,
        }
    }

    /// Resolve raw inputs. Unknown method or madhab codes use the defaults.
    pub fn from_inputs(inputs: &ConfigInputs) -> Self {
        Self::new(inputs.longitude, inputs.latitude, inputs.timezone)
            .with_method_code(inputs.method)
            .with_madhab_code(inputs.madhab)
            .with_summer_time(inputs.summer_time)
    }

    /// Use `method` for the Fajr and Ishaa rules.
    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    /// Use the method for `code`, Egyptian when unknown.
    pub fn with_method_code(self, code: i64) -> Self {
        self.with_method(CalculationMethod::from_code(code))
    }

    /// Use `madhab` for the Asr shadow rule.
    pub fn with_madhab(mut self, madhab: AsrMadhab) -> Self {
        self.madhab = madhab;
        self
    }

    /// Use the madhab for `code`, Shafii when unknown.
    pub fn with_madhab_code(self, code: i64) -> Self {
        self.with_madhab(AsrMadhab::from_code(code))
    }

    /// Add one hour to every clock time when `enabled`.
    pub fn with_summer_time(mut self, enabled: bool) -> Self {
        self.summer_time = enabled;
        self
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Offset from UTC in hours.
    pub fn timezone_hours(&self) -> f64 {
        self.timezone_hours
    }

    /// Resolved calculation method.
    pub fn method(&self) -> CalculationMethod {
        self.method
    }

    /// Resolved Asr madhab.
    pub fn madhab(&self) -> AsrMadhab {
        self.madhab
    }

    /// Whether summer time is in force.
    pub fn summer_time(&self) -> bool {
        self.summer_time
    }

    /// Central meridian of the timezone in degrees.
    pub fn middle_longitude_deg(&self) -> f64 {
        hours_to_deg(self.timezone_hours)
    }

    /// Hours between the timezone meridian and the local meridian.
    ///
    /// Positive when the location lies west of its timezone meridian.
    pub fn longitude_difference_hours(&self) -> f64 {
        deg_to_hours(self.middle_longitude_deg() - self.longitude_deg)
    }

    /// Sun zenith at Fajr for the configured method.
    pub fn fajr_zenith_deg(&self) -> f64 {
        self.method.fajr_zenith_deg()
    }

    /// Sun zenith at Ishaa; `None` selects the fixed-interval rule.
    pub fn ishaa_zenith_deg(&self) -> Option<f64> {
        self.method.ishaa_zenith_deg()
    }

    /// Sun zenith at sunrise, the same for every method.
    pub fn sunrise_zenith_deg(&self) -> f64 {
        SUNRISE_ZENITH_DEG
    }

    /// Sun zenith at sunset, the same for every method.
    pub fn sunset_zenith_deg(&self) -> f64 {
        SUNSET_ZENITH_DEG
    }
}

impl From<ConfigInputs> for PrayerConfig {
    fn from(inputs: ConfigInputs) -> Self {
        Self::from_inputs(&inputs)
    }
}
