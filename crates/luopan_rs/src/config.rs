//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! [calendar]
//! zi_hour = "late-rat"
//! solar_terms = "apparent-sun"
//! utc_offset_minutes = 480
//! solar_time = "true-solar"
//! meridian_deg = 120.0
//!
//! [geomancy]
//! tolerance_deg = 0.5
//! jian_offset_deg = 3.0
//! flight_rule = "yuan-long"
//! replace_on_jian = true
//! current_period = 9
//! ```
//!
//! Every key is optional and falls back to the default.

use std::path::Path;

use luopan_chart::{
    ComposeConfig, DEFAULT_JIAN_OFFSET_DEG, DEFAULT_TOLERANCE_DEG, FlightRule, LocatorConfig,
    Period, PlateConfig, SolarTermKind, SolarTermSource, ZiHourPolicy, source_for,
};
use luopan_time::{DEFAULT_MERIDIAN_DEG, SolarTimeMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LuopanError;

/// Largest accepted |UTC offset|, in minutes.
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Calendar-side options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    pub zi_hour: ZiHourPolicy,
    pub solar_terms: SolarTermKind,
    /// Zone of the wall clock, used to place solar terms.
    pub utc_offset_minutes: i32,
    pub solar_time: SolarTimeMode,
    /// Standard meridian for solar-time correction.
    pub meridian_deg: f64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            zi_hour: ZiHourPolicy::default(),
            solar_terms: SolarTermKind::default(),
            utc_offset_minutes: luopan_chart::CST_OFFSET_MINUTES,
            solar_time: SolarTimeMode::default(),
            meridian_deg: DEFAULT_MERIDIAN_DEG,
        }
    }
}

/// Locator, plate and evaluator options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeomancyConfig {
    pub tolerance_deg: f64,
    pub jian_offset_deg: f64,
    pub flight_rule: FlightRule,
    pub replace_on_jian: bool,
    /// Period stars are judged against; derived from the year when unset.
    pub current_period: Option<u8>,
}

impl Default for GeomancyConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: DEFAULT_TOLERANCE_DEG,
            jian_offset_deg: DEFAULT_JIAN_OFFSET_DEG,
            flight_rule: FlightRule::default(),
            replace_on_jian: false,
            current_period: None,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub calendar: CalendarConfig,
    pub geomancy: GeomancyConfig,
}

impl EngineConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, LuopanError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LuopanError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LuopanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Reject values the engine would refuse later.
    pub fn validate(&self) -> Result<(), LuopanError> {
        let cal = &self.calendar;
        if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&cal.utc_offset_minutes) {
            return Err(LuopanError::Config(format!(
                "utc_offset_minutes {} outside ±{MAX_UTC_OFFSET_MINUTES}",
                cal.utc_offset_minutes
            )));
        }
        if !(-180.0..=180.0).contains(&cal.meridian_deg) {
            return Err(LuopanError::Config(format!(
                "meridian_deg {} outside [-180, 180]",
                cal.meridian_deg
            )));
        }
        // Reuse the locator's own checks on a zero bearing.
        luopan_chart::locate_with(0.0, &self.locator_config())?;
        if let Some(n) = self.geomancy.current_period {
            Period::new(n)?;
        }
        Ok(())
    }

    pub fn compose_config(&self) -> ComposeConfig {
        ComposeConfig {
            zi_hour: self.calendar.zi_hour,
            solar_time: self.calendar.solar_time,
            meridian_deg: self.calendar.meridian_deg,
        }
    }

    pub fn terms(&self) -> Box<dyn SolarTermSource> {
        source_for(self.calendar.solar_terms, self.calendar.utc_offset_minutes)
    }

    pub fn locator_config(&self) -> LocatorConfig {
        LocatorConfig {
            tolerance_deg: self.geomancy.tolerance_deg,
            jian_offset_deg: self.geomancy.jian_offset_deg,
        }
    }

    pub fn plate_config(&self) -> PlateConfig {
        PlateConfig {
            flight_rule: self.geomancy.flight_rule,
            replace_on_jian: self.geomancy.replace_on_jian,
        }
    }

    /// The configured current period, or the period containing `solar_year`.
    pub fn current_period(&self, solar_year: i32) -> Result<Period, LuopanError> {
        match self.geomancy.current_period {
            Some(n) => Ok(Period::new(n)?),
            None => Ok(Period::from_year(solar_year)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn partial_sections() {
        let c = EngineConfig::from_toml_str(
            r#"
            [calendar]
            zi_hour = "late-rat"
            solar_time = "true-solar"

            [geomancy]
            flight_rule = "yuan-long"
            current_period = 8
            "#,
        )
        .unwrap();
        assert_eq!(c.calendar.zi_hour, ZiHourPolicy::LateRat);
        assert_eq!(c.calendar.utc_offset_minutes, 480);
        assert_eq!(c.compose_config().solar_time, SolarTimeMode::TrueSolar);
        assert_eq!(c.plate_config().flight_rule, FlightRule::YuanLong);
        assert_eq!(c.current_period(2030).unwrap().number(), 8);
        assert_eq!(c.locator_config().tolerance_deg, 0.5);
    }

    #[test]
    fn period_falls_back_to_year() {
        let c = EngineConfig::default();
        assert_eq!(c.current_period(2030).unwrap().number(), 9);
        assert_eq!(c.current_period(2010).unwrap().number(), 8);
    }

    #[test]
    fn rejects_bad_values() {
        for text in [
            "[geomancy]\ncurrent_period = 10",
            "[geomancy]\ntolerance_deg = 9.0",
            "[calendar]\nutc_offset_minutes = 2000",
            "[calendar]\nutc_offset_minutes = -2147483648",
            "[calendar]\nmeridian_deg = 200.0",
            "[calendar]\nzi_hour = \"sometimes\"",
            "[unknown]\nkey = 1",
        ] {
            assert!(
                matches!(EngineConfig::from_toml_str(text), Err(LuopanError::Config(_) | LuopanError::Chart(_))),
                "{text}"
            );
        }
    }
}
