//! Sexagenary clock: the pillar of an instant at a given granularity.

use luopan_base::{Pillar, day_pillar, hour_pillar, month_pillar, year_pillar};
use luopan_time::CivilTime;
use serde::{Deserialize, Serialize};

use crate::solar_term::{ApparentSunTerms, SolarTermSource};

/// Unit a pillar is reckoned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Year,
    Month,
    Day,
    Hour,
}

/// Pillar lookup backed by a solar-term source.
pub struct SexagenaryClock<'a> {
    terms: &'a dyn SolarTermSource,
}

impl<'a> SexagenaryClock<'a> {
    pub fn new(terms: &'a dyn SolarTermSource) -> Self {
        Self { terms }
    }

    /// Pillar of `t` at `granularity`.
    ///
    /// From 23:00 the 子 hour opens the next day: `Day` returns the following
    /// day's pillar and `Hour` takes its stem from it, while the hour branch
    /// still comes from the clock hour.
    pub fn cycle(&self, t: &CivilTime, granularity: Granularity) -> Pillar {
        match granularity {
            Granularity::Year => year_pillar(self.terms.solar_month(t).solar_year),
            Granularity::Month => {
                let sm = self.terms.solar_month(t);
                month_pillar(sm.solar_year, sm.month)
            }
            Granularity::Day => day_pillar(sexagenary_day(t)),
            Granularity::Hour => hour_pillar(day_pillar(sexagenary_day(t)).stem(), t.hour()),
        }
    }
}

/// Day number of the sexagenary day containing `t`.
fn sexagenary_day(t: &CivilTime) -> i64 {
    t.day_number() + i64::from(t.hour() >= 23)
}

/// Pillar of `t` using apparent-sun terms at UTC+8.
pub fn cycle(t: &CivilTime, granularity: Granularity) -> Pillar {
    let terms = ApparentSunTerms::default();
    SexagenaryClock::new(&terms).cycle(t, granularity)
}
