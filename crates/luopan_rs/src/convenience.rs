use luopan_base::Star;
use luopan_chart::{
    AnnualOverlay, BirthInput, CellRating, FourPillarsChart, Gender, KeyPositions,
    LocationResult, LuckCycle, Period, Plate, PlatePattern, SolarTermSource, compose,
    generate_with, key_positions, locate_with, luck_cycle, patterns, rate_plate,
};
use luopan_time::CivilTime;
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::LuopanError;
use crate::global::config;

/// Luck pillars listed by [`luck`].
pub const DEFAULT_LUCK_PILLARS: u8 = 8;

/// Compose a chart from an instant string using the global config.
pub fn birth_chart(
    instant: &str,
    gender: Gender,
    time_known: bool,
) -> Result<FourPillarsChart, LuopanError> {
    let input = BirthInput::new(instant.parse()?, gender, time_known);
    birth_chart_with(&input, &config())
}

/// Compose a chart with an explicit config.
pub fn birth_chart_with(
    input: &BirthInput,
    config: &EngineConfig,
) -> Result<FourPillarsChart, LuopanError> {
    let terms = config.terms();
    Ok(compose(input, &config.compose_config(), terms.as_ref())?)
}

/// Luck pillars for an instant string using the global config.
pub fn luck(instant: &str, gender: Gender) -> Result<LuckCycle, LuopanError> {
    let input = BirthInput::new(instant.parse()?, gender, true);
    luck_with(&input, DEFAULT_LUCK_PILLARS, &config())
}

/// Luck pillars with an explicit config.
pub fn luck_with(
    input: &BirthInput,
    count: u8,
    config: &EngineConfig,
) -> Result<LuckCycle, LuopanError> {
    let terms = config.terms();
    let chart = compose(input, &config.compose_config(), terms.as_ref())?;
    Ok(luck_cycle(&chart, &input.instant, terms.as_ref(), count)?)
}

/// A house reading request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseQuery {
    /// Facing bearing in degrees.
    pub bearing_deg: f64,
    /// Construction period of the building.
    pub period: Period,
    /// Period the stars are judged against.
    pub current: Period,
    /// Solar year whose annual stars are overlaid.
    pub annual_year: Option<i32>,
}

impl HouseQuery {
    /// Judge against the construction period, with no annual overlay.
    pub fn new(bearing_deg: f64, period: Period) -> Self {
        Self {
            bearing_deg,
            period,
            current: period,
            annual_year: None,
        }
    }
}

/// Location, plate and evaluation of a building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseReading {
    pub location: LocationResult,
    pub plate: Plate,
    pub patterns: Vec<PlatePattern>,
    pub current_period: Period,
    /// Indexed by palace index.
    pub ratings: [CellRating; 9],
    pub positions: KeyPositions,
    pub annual: Option<AnnualOverlay>,
}

/// Read a house with an explicit config.
pub fn read_house(query: &HouseQuery, config: &EngineConfig) -> Result<HouseReading, LuopanError> {
    let location = locate_with(query.bearing_deg, &config.locator_config())?;
    let plate = generate_with(query.period, &location, &config.plate_config());
    let current: Star = query.current.star();
    let annual = query.annual_year.map(AnnualOverlay::for_year);
    let reading = HouseReading {
        location,
        patterns: patterns(&plate),
        current_period: query.current,
        ratings: rate_plate(&plate, current),
        positions: key_positions(&plate, current, annual.as_ref()),
        plate,
        annual,
    };
    debug!(
        label = %reading.location.label(),
        period = query.period.number(),
        current = query.current.number(),
        patterns = reading.patterns.len(),
        "read house"
    );
    Ok(reading)
}

/// Read a house built in `period` using the global config.
///
/// Stars are judged against the configured current period (or the
/// period of the present solar year), with this year's annual stars.
pub fn house_reading(bearing_deg: f64, period: u8) -> Result<HouseReading, LuopanError> {
    let config = config();
    let solar_year = config.terms().solar_month(&CivilTime::now()).solar_year;
    let query = HouseQuery {
        bearing_deg,
        period: Period::new(period)?,
        current: config.current_period(solar_year)?,
        annual_year: Some(solar_year),
    };
    read_house(&query, &config)
}
