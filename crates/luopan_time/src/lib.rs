//! Civil time primitives for the luopan engine.
//!
//! This crate provides:
//! - `CivilTime`, a validated wall-clock date-time with parsing
//! - Julian day numbers and Julian Dates for the proleptic Gregorian calendar
//! - Mean and apparent solar-time correction for a birthplace longitude

pub mod civil;
pub mod error;
pub mod julian;
pub mod solar_time;

pub use civil::CivilTime;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, day_number, from_day_number,
    jd_to_centuries, julian_date,
};
pub use solar_time::{
    DEFAULT_MERIDIAN_DEG, SolarTimeMode, equation_of_time_minutes, mean_solar_offset_minutes,
    to_solar_time,
};
