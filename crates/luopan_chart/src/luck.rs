//! Luck pillars (大运).
//!
//! Luck pillars step through the cycle from the month pillar, forward for
//! a yang-year male or yin-year female and backward otherwise. The first
//! pillar starts at an age set by the distance to the neighbouring
//! sectional term, three days counting as one year.

use luopan_base::{Pillar, Polarity, Stem};
use luopan_time::CivilTime;
use serde::Serialize;

use crate::error::ChartError;
use crate::four_pillars_types::{FourPillarsChart, Gender};
use crate::solar_term::SolarTermSource;

/// Months of age per day between birth and the governing term (3 days = 1 year).
pub const MONTHS_PER_TERM_DAY: u32 = 4;

/// Months covered by one luck pillar.
pub const MONTHS_PER_LUCK_PILLAR: u32 = 120;

/// Upper bound on the term search; every solar month is shorter.
const MAX_TERM_SCAN_DAYS: u32 = 40;

/// Direction luck pillars step through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LuckDirection {
    Forward,
    Reverse,
}

/// One luck pillar and the age it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckPillar {
    /// 1-based order.
    pub order: u8,
    pub pillar: Pillar,
    /// Age in months at which this pillar begins.
    pub start_age_months: u32,
}

/// A sequence of luck pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckCycle {
    pub direction: LuckDirection,
    /// Days from birth to the governing term.
    pub term_distance_days: u32,
    pub pillars: Vec<LuckPillar>,
}

impl LuckCycle {
    /// Age in months at which the first luck pillar begins.
    pub fn start_age_months(&self) -> u32 {
        self.term_distance_days * MONTHS_PER_TERM_DAY
    }
}

/// Forward for yang-year males and yin-year females.
pub fn luck_direction(year_stem: Stem, gender: Gender) -> LuckDirection {
    match (year_stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => LuckDirection::Forward,
        _ => LuckDirection::Reverse,
    }
}

/// Whole days until the solar month changes, searching forward or backward.
pub fn days_to_term(
    birth: &CivilTime,
    direction: LuckDirection,
    terms: &dyn SolarTermSource,
) -> Result<u32, ChartError> {
    let current = terms.solar_month(birth).month;
    let step: i64 = match direction {
        LuckDirection::Forward => 1,
        LuckDirection::Reverse => -1,
    };
    for d in 1..=MAX_TERM_SCAN_DAYS {
        let probe = birth.shift_days(step * i64::from(d))?;
        if terms.solar_month(&probe).month != current {
            return Ok(d);
        }
    }
    Ok(MAX_TERM_SCAN_DAYS)
}

/// The first `count` luck pillars of a chart whose wall-clock birth time is `birth`.
pub fn luck_cycle(
    chart: &FourPillarsChart,
    birth: &CivilTime,
    terms: &dyn SolarTermSource,
    count: u8,
) -> Result<LuckCycle, ChartError> {
    let direction = luck_direction(chart.year.stem(), chart.gender);
    let term_distance_days = days_to_term(birth, direction, terms)?;
    let start = term_distance_days * MONTHS_PER_TERM_DAY;
    let sign: i64 = match direction {
        LuckDirection::Forward => 1,
        LuckDirection::Reverse => -1,
    };
    let pillars = (1..=count)
        .map(|order| LuckPillar {
            order,
            pillar: chart.month.offset(sign * i64::from(order)),
            start_age_months: start + u32::from(order - 1) * MONTHS_PER_LUCK_PILLAR,
        })
        .collect();
    Ok(LuckCycle {
        direction,
        term_distance_days,
        pillars,
    })
}
