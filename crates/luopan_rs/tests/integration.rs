//! End-to-end tests through the convenience API.

use std::io::Write;

use luopan_rs::{
    BirthInput, EngineConfig, FlightRule, Gender, HouseQuery, LuopanError, Mountain, Palace,
    Period, PlatePattern, ZiHourPolicy, birth_chart_with, luck_with, read_house,
};

fn config_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

#[test]
fn load_from_file() {
    let file = config_file(
        "[calendar]\nzi_hour = \"late-rat\"\n\n[geomancy]\nflight_rule = \"yuan-long\"\n",
    );
    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.calendar.zi_hour, ZiHourPolicy::LateRat);
    assert_eq!(config.geomancy.flight_rule, FlightRule::YuanLong);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, LuopanError::Io { .. }));
}

#[test]
fn malformed_file_is_config_error() {
    let file = config_file("[calendar\nzi_hour = ");
    assert!(matches!(
        EngineConfig::load(file.path()),
        Err(LuopanError::Config(_))
    ));
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

#[test]
fn late_rat_config_changes_day_pillar() {
    let input = BirthInput::new("1973-01-01T23:30".parse().unwrap(), Gender::Male, true);
    let roll = birth_chart_with(&input, &EngineConfig::default()).unwrap();
    let config = EngineConfig::from_toml_str("[calendar]\nzi_hour = \"late-rat\"").unwrap();
    let late = birth_chart_with(&input, &config).unwrap();
    assert_eq!(roll.day.name(), "戊戌");
    assert_eq!(late.day.name(), "丁酉");
    assert_eq!(roll.hour, late.hour);
}

#[test]
fn luck_from_config() {
    let input = BirthInput::new("1984-06-15T12:00".parse().unwrap(), Gender::Male, true);
    let cycle = luck_with(&input, 3, &EngineConfig::default()).unwrap();
    assert_eq!(cycle.pillars.len(), 3);
    assert_eq!(cycle.pillars[0].pillar.name(), "辛未");
}

#[test]
fn chart_serializes_to_json() {
    let input = BirthInput::new("2000-01-01T00:00".parse().unwrap(), Gender::Female, false);
    let chart = birth_chart_with(&input, &EngineConfig::default()).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["day"]["name"], "戊午");
    assert!(json["hour"].is_null());
    assert_eq!(json["gender"], "female");
}

// ---------------------------------------------------------------------------
// House readings
// ---------------------------------------------------------------------------

#[test]
fn yuan_long_reading_of_chou_mountain() {
    // Facing 未 (sitting 丑 at 30°).
    let config = EngineConfig::from_toml_str("[geomancy]\nflight_rule = \"yuan-long\"").unwrap();
    let query = HouseQuery::new(210.0, Period::new(8).unwrap());
    let reading = read_house(&query, &config).unwrap();
    assert_eq!(reading.location.zuo, Mountain::Chou);
    assert_eq!(reading.patterns[0], PlatePattern::ProsperousSittingAndFacing);
    assert_eq!(reading.positions.wealth[0].palace, Palace::Kun);
}

#[test]
fn annual_overlay_is_reported() {
    let query = HouseQuery {
        annual_year: Some(2024),
        ..HouseQuery::new(180.0, Period::new(9).unwrap())
    };
    let reading = read_house(&query, &EngineConfig::default()).unwrap();
    let annual = reading.annual.unwrap();
    assert_eq!(annual.center.number(), 3);
    let json = serde_json::to_value(&reading).unwrap();
    assert_eq!(json["plate"]["cells"].as_array().unwrap().len(), 9);
    assert_eq!(json["current_period"], 9);
}

#[test]
fn jian_reading_flags_combined_direction() {
    // Sitting 4.5° past 子's centre toward 癸.
    let query = HouseQuery::new(184.5, Period::new(9).unwrap());
    let reading = read_house(&query, &EngineConfig::default()).unwrap();
    assert!(reading.location.is_jian);
    assert_eq!(reading.location.jianzuo, Some(Mountain::Gui));
    assert_eq!(reading.location.label(), "子山午向兼癸丁");
}
