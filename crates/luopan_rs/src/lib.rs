//! Convenience wrapper for the luopan engine.
//!
//! Provides a global read-only configuration and high-level functions that
//! take instant strings and bearings directly, so callers never have to
//! wire solar-term sources, locator options and plate rules by hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use luopan_rs::*;
//!
//! init(EngineConfig::load("luopan.toml")?)?;
//!
//! let chart = birth_chart("1984-06-15T12:00", Gender::Male, true)?;
//! println!("day master: {}", chart.day_master.name());
//!
//! let reading = house_reading(180.0, 9)?;
//! println!("{}: {:?}", reading.location.label(), reading.patterns);
//! ```

pub mod config;
pub mod convenience;
pub mod error;
pub mod global;

pub use config::{CalendarConfig, EngineConfig, GeomancyConfig};
pub use convenience::{
    DEFAULT_LUCK_PILLARS, HouseQuery, HouseReading, birth_chart, birth_chart_with, house_reading,
    luck, luck_with, read_house,
};
pub use error::LuopanError;
pub use global::{config, init, is_initialized};

// Re-export the types that appear in results.
pub use luopan_base::{Element, Mountain, Palace, Pillar, Star, Stem};
pub use luopan_chart::{
    AnnualOverlay, BirthInput, CellRating, Combination, FlightRule, FourPillarsChart, Gender,
    Grade, KeyPosition, KeyPositions, LocationResult, LuckCycle, Period, Plate, PlatePattern,
    SolarTermKind, StarStatus, ZiHourPolicy,
};
pub use luopan_time::{CivilTime, SolarTimeMode};
