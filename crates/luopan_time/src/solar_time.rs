//! Local mean and apparent solar time.
//!
//! Birth charts are read against the sun's position over the birthplace,
//! not the zone meridian. The mean correction is 4 minutes per degree of
//! longitude east of the meridian; the apparent correction adds the
//! equation of time.

use serde::{Deserialize, Serialize};

use crate::civil::CivilTime;
use crate::error::TimeError;

/// Standard meridian of UTC+8 (China Standard Time).
pub const DEFAULT_MERIDIAN_DEG: f64 = 120.0;

/// Which clock a chart is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolarTimeMode {
    /// Use the wall clock as given.
    #[default]
    Civil,
    /// Shift by the longitude difference from the zone meridian.
    MeanSolar,
    /// Mean solar time plus the equation of time.
    TrueSolar,
}

/// Minutes local mean solar time runs ahead of the zone clock.
pub fn mean_solar_offset_minutes(longitude_deg: f64, meridian_deg: f64) -> f64 {
    (longitude_deg - meridian_deg) * 4.0
}

/// Equation of time (apparent minus mean solar time) in minutes.
///
/// Low-precision fit, good to about 30 seconds.
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    let b = 2.0 * std::f64::consts::PI * (f64::from(day_of_year) - 81.0) / 364.0;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

fn check_longitude(deg: f64) -> Result<f64, TimeError> {
    if deg.is_finite() && (-180.0..=180.0).contains(&deg) {
        Ok(deg)
    } else {
        Err(TimeError::LongitudeOutOfRange(deg))
    }
}

/// Convert a zone wall-clock time to the requested solar time at `longitude_deg`.
pub fn to_solar_time(
    civil: &CivilTime,
    longitude_deg: f64,
    meridian_deg: f64,
    mode: SolarTimeMode,
) -> Result<CivilTime, TimeError> {
    let lon = check_longitude(longitude_deg)?;
    let meridian = check_longitude(meridian_deg)?;
    let minutes = match mode {
        SolarTimeMode::Civil => return Ok(*civil),
        SolarTimeMode::MeanSolar => mean_solar_offset_minutes(lon, meridian),
        SolarTimeMode::TrueSolar => {
            mean_solar_offset_minutes(lon, meridian) + equation_of_time_minutes(civil.day_of_year())
        }
    };
    civil.shift_seconds((minutes * 60.0).round() as i64)
}
