//! Types for sectional solar terms and solar months.

use serde::{Deserialize, Serialize};

/// The 12 sectional solar terms (节) that open each solar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Lichun,
    Jingzhe,
    Qingming,
    Lixia,
    Mangzhong,
    Xiaoshu,
    Liqiu,
    Bailu,
    Hanlu,
    Lidong,
    Daxue,
    Xiaohan,
}

/// All sectional terms in solar-month order (index 0 = 立春, opening the 寅 month).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Lichun,
    SolarTerm::Jingzhe,
    SolarTerm::Qingming,
    SolarTerm::Lixia,
    SolarTerm::Mangzhong,
    SolarTerm::Xiaoshu,
    SolarTerm::Liqiu,
    SolarTerm::Bailu,
    SolarTerm::Hanlu,
    SolarTerm::Lidong,
    SolarTerm::Daxue,
    SolarTerm::Xiaohan,
];

const TERM_NAMES: [&str; 12] = [
    "立春", "惊蛰", "清明", "立夏", "芒种", "小暑", "立秋", "白露", "寒露", "立冬", "大雪", "小寒",
];

/// Typical Gregorian (month, day) of each term, 1900–2100.
const NOMINAL_DATES: [(u32, u32); 12] = [
    (2, 4),
    (3, 6),
    (4, 5),
    (5, 6),
    (6, 6),
    (7, 7),
    (8, 8),
    (9, 8),
    (10, 8),
    (11, 7),
    (12, 7),
    (1, 6),
];

impl SolarTerm {
    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    /// Solar month this term opens (0 = 寅 .. 11 = 丑).
    pub const fn index(self) -> u8 {
        match self {
            Self::Lichun => 0,
            Self::Jingzhe => 1,
            Self::Qingming => 2,
            Self::Lixia => 3,
            Self::Mangzhong => 4,
            Self::Xiaoshu => 5,
            Self::Liqiu => 6,
            Self::Bailu => 7,
            Self::Hanlu => 8,
            Self::Lidong => 9,
            Self::Daxue => 10,
            Self::Xiaohan => 11,
        }
    }

    pub const fn from_index(index: u8) -> SolarTerm {
        ALL_SOLAR_TERMS[(index % 12) as usize]
    }

    /// Apparent solar longitude at which the term begins.
    pub const fn longitude_deg(self) -> f64 {
        ((315 + 30 * self.index() as u32) % 360) as f64
    }

    /// Typical Gregorian (month, day) on which the term falls.
    pub const fn nominal_date(self) -> (u32, u32) {
        NOMINAL_DATES[self.index() as usize]
    }

    pub const fn all() -> &'static [SolarTerm; 12] {
        &ALL_SOLAR_TERMS
    }
}

/// Solar year and month of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarMonth {
    /// Gregorian year in which this solar year's 立春 falls.
    pub solar_year: i32,
    /// Solar month (0 = 寅 .. 11 = 丑).
    pub month: u8,
    /// The term that opened the month.
    pub term: SolarTerm,
}

impl SolarMonth {
    pub const fn new(solar_year: i32, month: u8) -> Self {
        Self {
            solar_year,
            month: month % 12,
            term: SolarTerm::from_index(month),
        }
    }
}
