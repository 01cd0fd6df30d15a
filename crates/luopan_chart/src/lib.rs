//! Chart computations of the luopan engine.
//!
//! This crate provides:
//! - The sexagenary clock and the four-pillars composer, with luck pillars
//! - Solar-term month lookups (apparent-sun and fixed-date sources)
//! - The 24-mountain directional locator
//! - Flying-star plates, plate patterns and the star evaluator
//!
//! Every function is a pure computation over its arguments.

pub mod clock;
pub mod error;
pub mod evaluator;
pub mod evaluator_types;
pub mod four_pillars;
pub mod four_pillars_types;
pub mod locator;
pub mod locator_types;
pub mod luck;
pub mod period;
pub mod plate;
pub mod plate_types;
pub mod solar_term;
pub mod solar_term_types;

pub use clock::{Granularity, SexagenaryClock, cycle};
pub use error::ChartError;
pub use evaluator::{
    classify, hazard_positions, key_positions, rate_cell, rate_plate, scholar_positions,
    wealth_positions,
};
pub use evaluator_types::{
    ALL_STAR_STATUSES, CellRating, Combination, Grade, KeyPosition, KeyPositions, StarStatus,
};
pub use four_pillars::{compose, four_pillars};
pub use four_pillars_types::{
    BirthInput, ComposeConfig, ElementTally, FourPillarsChart, Gender, PillarGods, ZiHourPolicy,
};
pub use locator::{locate, locate_with, mountain_at};
pub use locator_types::{
    DEFAULT_JIAN_OFFSET_DEG, DEFAULT_TOLERANCE_DEG, LocationResult, LocatorConfig,
};
pub use luck::{
    LuckCycle, LuckDirection, LuckPillar, MONTHS_PER_LUCK_PILLAR, MONTHS_PER_TERM_DAY,
    days_to_term, luck_cycle, luck_direction,
};
pub use period::{AnnualOverlay, Era, GREAT_CYCLE_START, PERIOD_YEARS, Period, annual_star};
pub use plate::{generate, generate_with, patterns, period_stars, proxy_mountain};
pub use plate_types::{
    ColumnFlight, FlightRule, Plate, PlateCell, PlateConfig, PlatePattern, StarColumn,
};
pub use solar_term::{
    ApparentSunTerms, CST_OFFSET_MINUTES, FixedDateTerms, SolarTermKind, SolarTermSource,
    apparent_solar_longitude, solar_month_from_longitude, source_for,
};
pub use solar_term_types::{ALL_SOLAR_TERMS, SolarMonth, SolarTerm};
