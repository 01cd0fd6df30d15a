//! Four-pillars composition.
//!
//! Year and month pillars come from the solar-term source applied to the
//! zone wall clock. Day and hour pillars are read from the (optionally
//! solar-corrected) clock, with the 子 hour handled per [`ZiHourPolicy`].

use luopan_base::{day_pillar, hour_pillar, month_pillar, year_pillar};
use luopan_time::{CivilTime, to_solar_time};
use tracing::debug;

use crate::error::ChartError;
use crate::four_pillars_types::{
    BirthInput, ComposeConfig, ElementTally, FourPillarsChart, Gender, PillarGods, ZiHourPolicy,
};
use crate::solar_term::{ApparentSunTerms, SolarTermSource};

/// Compose a chart from a birth input.
pub fn compose(
    input: &BirthInput,
    config: &ComposeConfig,
    terms: &dyn SolarTermSource,
) -> Result<FourPillarsChart, ChartError> {
    let chart_time = match input.longitude_deg {
        Some(lon) => to_solar_time(&input.instant, lon, config.meridian_deg, config.solar_time)?,
        None => input.instant,
    };

    let solar_month = terms.solar_month(&input.instant);
    let year = year_pillar(solar_month.solar_year);
    let month = month_pillar(solar_month.solar_year, solar_month.month);

    let jdn = chart_time.day_number();
    let late = chart_time.hour() >= 23;
    let (day, hour) = if input.time_known {
        match config.zi_hour {
            ZiHourPolicy::RollForward => {
                let day = day_pillar(jdn + i64::from(late));
                (day, Some(hour_pillar(day.stem(), chart_time.hour())))
            }
            ZiHourPolicy::LateRat => {
                let day = day_pillar(jdn);
                let stem = day_pillar(jdn + i64::from(late)).stem();
                (day, Some(hour_pillar(stem, chart_time.hour())))
            }
        }
    } else {
        (day_pillar(jdn), None)
    };

    let mut element_tally = ElementTally::default();
    for pillar in [Some(year), Some(month), Some(day), hour].into_iter().flatten() {
        element_tally.add_pillar(pillar);
    }

    debug!(
        instant = %input.instant,
        chart_time = %chart_time,
        year = %year,
        month = %month,
        day = %day,
        hour = ?hour.map(|p| p.name()),
        "composed four pillars"
    );

    let day_master = day.stem();
    let ten_gods = [
        Some(PillarGods::of(day_master, year, false)),
        Some(PillarGods::of(day_master, month, false)),
        Some(PillarGods::of(day_master, day, true)),
        hour.map(|p| PillarGods::of(day_master, p, false)),
    ];

    Ok(FourPillarsChart {
        year,
        month,
        day,
        hour,
        day_master,
        ten_gods,
        element_tally,
        gender: input.gender,
        solar_month,
        chart_time,
    })
}

/// Compose with default options and apparent-sun terms at UTC+8.
pub fn four_pillars(
    instant: CivilTime,
    gender: Gender,
    time_known: bool,
) -> Result<FourPillarsChart, ChartError> {
    compose(
        &BirthInput::new(instant, gender, time_known),
        &ComposeConfig::default(),
        &ApparentSunTerms::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use luopan_base::Element;
    use luopan_time::SolarTimeMode;

    fn chart(s: &str) -> FourPillarsChart {
        four_pillars(s.parse().unwrap(), Gender::Male, true).unwrap()
    }

    fn names(c: &FourPillarsChart) -> [String; 4] {
        [
            c.year.name(),
            c.month.name(),
            c.day.name(),
            c.hour.map(|p| p.name()).unwrap_or_default(),
        ]
    }

    #[test]
    fn j2000_midnight() {
        assert_eq!(names(&chart("2000-01-01T00:00")), ["己卯", "丙子", "戊午", "壬子"]);
    }

    #[test]
    fn day_master_copies_day_stem() {
        let c = chart("2000-01-01T00:00");
        assert_eq!(c.day_master, c.day.stem());
    }

    #[test]
    fn unknown_time_drops_hour_and_two_slots() {
        let c = four_pillars("2000-01-01T00:00".parse().unwrap(), Gender::Female, false).unwrap();
        assert!(c.hour.is_none());
        assert_eq!(c.element_tally.total(), 6);
        assert_eq!(chart("2000-01-01T00:00").element_tally.total(), 8);
    }

    #[test]
    fn tally_of_known_chart() {
        // 己卯 丙子 戊午 壬子: earth 己 戊; wood 卯; fire 丙 午; water 子 壬 子.
        let t = chart("2000-01-01T00:00").element_tally;
        assert_eq!(t.get(Element::Earth), 2);
        assert_eq!(t.get(Element::Wood), 1);
        assert_eq!(t.get(Element::Fire), 2);
        assert_eq!(t.get(Element::Water), 3);
        assert_eq!(t.get(Element::Metal), 0);
    }

    #[test]
    fn late_rat_keeps_civil_day() {
        let input = BirthInput::new("2024-06-15T23:30".parse().unwrap(), Gender::Male, true);
        let config = ComposeConfig {
            zi_hour: ZiHourPolicy::LateRat,
            ..Default::default()
        };
        let c = compose(&input, &config, &ApparentSunTerms::default()).unwrap();
        assert_eq!(c.day.name(), "庚戌");
        assert_eq!(c.hour.unwrap().name(), "戊子");
    }

    #[test]
    fn mean_solar_time_moves_hour() {
        // 13:00 at 87.6°E is 10:50:24 local mean time: 巳 hour instead of 未.
        let input =
            BirthInput::new("2024-06-15T13:00".parse().unwrap(), Gender::Male, true).with_longitude(87.6);
        let config = ComposeConfig {
            solar_time: SolarTimeMode::MeanSolar,
            ..Default::default()
        };
        let c = compose(&input, &config, &ApparentSunTerms::default()).unwrap();
        assert_eq!(c.hour.unwrap().branch().name(), "巳");
        assert_eq!(c.chart_time.to_string(), "2024-06-15T10:50:24");
    }

    #[test]
    fn bad_longitude_is_an_error() {
        let input =
            BirthInput::new("2024-06-15T13:00".parse().unwrap(), Gender::Male, true).with_longitude(181.0);
        let config = ComposeConfig {
            solar_time: SolarTimeMode::TrueSolar,
            ..Default::default()
        };
        assert!(compose(&input, &config, &ApparentSunTerms::default()).is_err());
    }
}
