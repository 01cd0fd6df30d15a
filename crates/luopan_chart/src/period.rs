//! Construction periods (运) and the annual star overlay.
//!
//! Periods run 20 years each, nine to a 180-year great cycle that began
//! in 1864. Annual stars (年紫白) descend by one each solar year.

use luopan_base::{FlightDirection, Palace, Star, fly};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// First year of period 1 of the current great cycle.
pub const GREAT_CYCLE_START: i32 = 1864;

/// Years per period.
pub const PERIOD_YEARS: i32 = 20;

/// A construction period, 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Period(u8);

/// Upper, middle or lower era (三元) of the great cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Era {
    Upper,
    Middle,
    Lower,
}

impl Era {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Upper => "上元",
            Self::Middle => "中元",
            Self::Lower => "下元",
        }
    }
}

impl Period {
    pub fn new(n: u8) -> Result<Self, ChartError> {
        if (1..=9).contains(&n) {
            Ok(Self(n))
        } else {
            Err(ChartError::InvalidPeriod(n))
        }
    }

    /// Period containing a Gregorian year.
    pub fn from_year(year: i32) -> Self {
        let offset = (i64::from(year) - i64::from(GREAT_CYCLE_START))
            .rem_euclid(i64::from(PERIOD_YEARS) * 9);
        Self((offset / i64::from(PERIOD_YEARS)) as u8 + 1)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// The period's ruling star, which sits in the centre of its plate.
    pub fn star(self) -> Star {
        Star::from_number(self.0).unwrap_or(Star::Five)
    }

    pub const fn era(self) -> Era {
        match self.0 {
            1..=3 => Era::Upper,
            4..=6 => Era::Middle,
            _ => Era::Lower,
        }
    }

    /// First and last year of this period in the great cycle containing `year`.
    ///
    /// Years are widened to `i64`, so the span may fall outside `i32` at the
    /// ends of its range.
    pub fn span_around(self, year: i32) -> (i64, i64) {
        let period_years = i64::from(PERIOD_YEARS);
        let cycle = (i64::from(year) - i64::from(GREAT_CYCLE_START)).div_euclid(period_years * 9);
        let start = i64::from(GREAT_CYCLE_START)
            + cycle * period_years * 9
            + (i64::from(self.0) - 1) * period_years;
        (start, start + period_years - 1)
    }
}

impl TryFrom<u8> for Period {
    type Error = ChartError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Period> for u8 {
    fn from(p: Period) -> u8 {
        p.0
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Centre star of a solar year's annual chart.
pub fn annual_star(solar_year: i32) -> Star {
    let n = (11 - solar_year.rem_euclid(9)).rem_euclid(9);
    Star::from_number(if n == 0 { 9 } else { n as u8 }).unwrap_or(Star::Nine)
}

/// The annual stars of a solar year, flown forward from the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualOverlay {
    pub solar_year: i32,
    pub center: Star,
    /// Indexed by [`Palace::index`].
    pub stars: [Star; 9],
}

impl AnnualOverlay {
    pub fn for_year(solar_year: i32) -> Self {
        let center = annual_star(solar_year);
        Self {
            solar_year,
            center,
            stars: fly(center, FlightDirection::Forward),
        }
    }

    pub fn star_at(&self, palace: Palace) -> Star {
        self.stars[palace.index()]
    }
}
