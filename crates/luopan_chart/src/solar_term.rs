//! Solar-term sources deciding the solar year and month of an instant.
//!
//! Year and month pillars turn over at the sectional terms, not at civil
//! month boundaries. The composer only needs "which solar month is this",
//! so the lookup is a trait with interchangeable implementations.
//!
//! Clean-room: low-precision solar coordinates from Meeus, *Astronomical
//! Algorithms* (2nd ed.), ch. 25; accurate to about 0.01°.

use luopan_base::normalize_360;
use luopan_time::{CivilTime, jd_to_centuries};
use serde::{Deserialize, Serialize};

use crate::solar_term_types::{ALL_SOLAR_TERMS, SolarMonth, SolarTerm};

/// UTC offset of China Standard Time, in minutes.
pub const CST_OFFSET_MINUTES: i32 = 480;

/// Resolves the solar month an instant falls in.
pub trait SolarTermSource: Send + Sync {
    /// Solar year and month of a local wall-clock instant.
    fn solar_month(&self, t: &CivilTime) -> SolarMonth;
}

/// Which built-in source to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolarTermKind {
    #[default]
    ApparentSun,
    FixedDate,
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees, for a Julian Date (UT).
pub fn apparent_solar_longitude(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(l0 + c - 0.00569 - 0.00478 * omega.sin())
}

/// Solar month (0 = 寅) containing an apparent solar longitude.
pub fn solar_month_from_longitude(lon_deg: f64) -> u8 {
    let m = (normalize_360(lon_deg - SolarTerm::Lichun.longitude_deg()) / 30.0).floor() as u8;
    m.min(11)
}

/// The 子 and 丑 months of early January and February still belong to the previous solar year.
fn solar_year_for(t: &CivilTime, month: u8) -> i32 {
    if t.month() <= 2 && month >= 10 {
        t.year() - 1
    } else {
        t.year()
    }
}

/// Terms from the computed apparent solar longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentSunTerms {
    /// How far the wall clock runs ahead of UTC.
    pub utc_offset_minutes: i32,
}

impl ApparentSunTerms {
    pub fn new(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes }
    }

    /// Apparent solar longitude at a wall-clock instant.
    pub fn longitude_at(&self, t: &CivilTime) -> f64 {
        apparent_solar_longitude(t.julian_date_ut(self.utc_offset_minutes))
    }
}

impl Default for ApparentSunTerms {
    fn default() -> Self {
        Self {
            utc_offset_minutes: CST_OFFSET_MINUTES,
        }
    }
}

impl SolarTermSource for ApparentSunTerms {
    fn solar_month(&self, t: &CivilTime) -> SolarMonth {
        let month = solar_month_from_longitude(self.longitude_at(t));
        SolarMonth::new(solar_year_for(t, month), month)
    }
}

/// Terms at fixed Gregorian dates, starting at local midnight.
///
/// Off by up to a day near a term; use only where no ephemeris is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateTerms {
    /// (month, day) of each term, indexed by [`SolarTerm::index`].
    pub dates: [(u32, u32); 12],
}

impl Default for FixedDateTerms {
    fn default() -> Self {
        let mut dates = [(1, 1); 12];
        for term in ALL_SOLAR_TERMS {
            dates[term.index() as usize] = term.nominal_date();
        }
        Self { dates }
    }
}

impl SolarTermSource for FixedDateTerms {
    fn solar_month(&self, t: &CivilTime) -> SolarMonth {
        let md = (t.month(), t.day());
        // Walk the terms in calendar order: 小寒 (Jan) first, 大雪 (Dec) last.
        let mut month = SolarTerm::Daxue.index();
        for offset in 0..12u8 {
            let term = SolarTerm::from_index(offset + SolarTerm::Xiaohan.index());
            if md >= self.dates[term.index() as usize] {
                month = term.index();
            }
        }
        SolarMonth::new(solar_year_for(t, month), month)
    }
}

/// Boxed built-in source for a kind.
pub fn source_for(kind: SolarTermKind, utc_offset_minutes: i32) -> Box<dyn SolarTermSource> {
    match kind {
        SolarTermKind::ApparentSun => Box::new(ApparentSunTerms::new(utc_offset_minutes)),
        SolarTermKind::FixedDate => Box::new(FixedDateTerms::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luopan_time::J2000_JD;

    fn at(s: &str) -> CivilTime {
        s.parse().unwrap()
    }

    #[test]
    fn longitude_at_j2000() {
        let lon = apparent_solar_longitude(J2000_JD);
        assert!((lon - 280.373).abs() < 0.01, "lon = {lon}");
    }

    #[test]
    fn month_from_longitude() {
        assert_eq!(solar_month_from_longitude(315.0), 0);
        assert_eq!(solar_month_from_longitude(344.9), 0);
        assert_eq!(solar_month_from_longitude(345.0), 1);
        assert_eq!(solar_month_from_longitude(0.0), 1);
        assert_eq!(solar_month_from_longitude(314.9), 11);
    }

    #[test]
    fn lichun_2024_boundary() {
        let src = ApparentSunTerms::default();
        assert_eq!(src.solar_month(&at("2024-02-03T12:00")), SolarMonth::new(2023, 11));
        assert_eq!(src.solar_month(&at("2024-02-05T12:00")), SolarMonth::new(2024, 0));
    }

    #[test]
    fn december_zi_month_keeps_year() {
        let src = ApparentSunTerms::default();
        assert_eq!(src.solar_month(&at("2023-12-25T12:00")), SolarMonth::new(2023, 10));
        assert_eq!(src.solar_month(&at("2024-01-01T00:30")), SolarMonth::new(2023, 10));
    }

    #[test]
    fn fixed_dates_follow_table() {
        let src = FixedDateTerms::default();
        assert_eq!(src.solar_month(&at("2024-01-05T23:00")), SolarMonth::new(2023, 10));
        assert_eq!(src.solar_month(&at("2024-01-06T00:00")), SolarMonth::new(2023, 11));
        assert_eq!(src.solar_month(&at("2024-02-04T00:00")), SolarMonth::new(2024, 0));
        assert_eq!(src.solar_month(&at("2024-06-15T12:00")), SolarMonth::new(2024, 4));
        assert_eq!(src.solar_month(&at("2024-12-07T00:00")), SolarMonth::new(2024, 10));
        assert_eq!(src.solar_month(&at("2024-12-06T23:59")), SolarMonth::new(2024, 9));
    }

    #[test]
    fn sources_agree_mid_month() {
        let fixed = FixedDateTerms::default();
        let sun = ApparentSunTerms::default();
        for s in ["1984-06-15T12:00", "1999-09-20T08:00", "2030-11-22T18:00"] {
            assert_eq!(fixed.solar_month(&at(s)), sun.solar_month(&at(s)), "{s}");
        }
    }

    #[test]
    fn source_for_kind() {
        let t = at("2024-06-15T12:00");
        let a = source_for(SolarTermKind::ApparentSun, CST_OFFSET_MINUTES).solar_month(&t);
        let b = source_for(SolarTermKind::FixedDate, CST_OFFSET_MINUTES).solar_month(&t);
        assert_eq!(a, b);
    }
}
