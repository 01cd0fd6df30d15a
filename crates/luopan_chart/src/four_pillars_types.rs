//! Types for four-pillars (八字) charts.

use luopan_base::{ALL_ELEMENTS, Element, Pillar, Stem, TenGod, ten_god};
use luopan_time::{CivilTime, DEFAULT_MERIDIAN_DEG, SolarTimeMode};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::solar_term_types::SolarMonth;

/// Gender of the chart holder; decides luck-pillar direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Handling of the 23:00–24:00 子 hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZiHourPolicy {
    /// The whole 子 hour belongs to the next day: day and hour stems both roll forward.
    #[default]
    RollForward,
    /// 晚子时: the day pillar stays on the civil date; only the hour stem rolls forward.
    LateRat,
}

/// Input for composing a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    /// Local wall-clock birth time in the zone the solar-term source expects.
    pub instant: CivilTime,
    pub gender: Gender,
    /// When false, the hour pillar is omitted.
    pub time_known: bool,
    /// Birthplace longitude for solar-time correction, degrees east.
    pub longitude_deg: Option<f64>,
}

impl BirthInput {
    pub fn new(instant: CivilTime, gender: Gender, time_known: bool) -> Self {
        Self {
            instant,
            gender,
            time_known,
            longitude_deg: None,
        }
    }

    pub fn with_longitude(mut self, longitude_deg: f64) -> Self {
        self.longitude_deg = Some(longitude_deg);
        self
    }
}

/// Options for chart composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeConfig {
    pub zi_hour: ZiHourPolicy,
    /// Applied to the day and hour pillars when the input carries a longitude.
    pub solar_time: SolarTimeMode,
    /// Zone meridian the wall clock refers to, degrees east.
    pub meridian_deg: f64,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            zi_hour: ZiHourPolicy::RollForward,
            solar_time: SolarTimeMode::Civil,
            meridian_deg: DEFAULT_MERIDIAN_DEG,
        }
    }
}

/// Count of stems and branches per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    pub fn add(&mut self, element: Element) {
        self.counts[element.index() as usize] += 1;
    }

    /// Tally both symbols of a pillar.
    pub fn add_pillar(&mut self, pillar: Pillar) {
        self.add(pillar.stem().element());
        self.add(pillar.branch().element());
    }

    pub fn get(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Number of symbols counted (8, or 6 without an hour pillar).
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Elements with no symbol in the chart.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS.iter().copied().filter(|e| self.get(*e) == 0).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|e| (*e, self.get(*e)))
    }
}

impl Serialize for ElementTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (element, count) in self.iter() {
            map.serialize_entry(element.english_name(), &count)?;
        }
        map.end()
    }
}

/// Ten gods of one pillar, seen from the day master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarGods {
    /// God of the visible stem; `None` for the day stem, which is the day master itself.
    pub stem: Option<TenGod>,
    /// Gods of the branch's hidden stems, main qi first.
    pub hidden: Vec<(Stem, TenGod)>,
}

impl PillarGods {
    pub fn of(day_master: Stem, pillar: Pillar, is_day: bool) -> Self {
        Self {
            stem: (!is_day).then(|| ten_god(day_master, pillar.stem())),
            hidden: pillar
                .branch()
                .hidden_stems()
                .iter()
                .map(|h| (h.stem, ten_god(day_master, h.stem)))
                .collect(),
        }
    }

    /// God of the branch's main qi.
    pub fn branch_main(&self) -> Option<TenGod> {
        self.hidden.first().map(|(_, g)| *g)
    }
}

/// A composed four-pillars chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FourPillarsChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// `None` when the birth time is unknown.
    pub hour: Option<Pillar>,
    /// Stem of the day pillar (日主).
    pub day_master: Stem,
    /// Ten gods per pillar in year, month, day, hour order; `None` for a missing hour.
    pub ten_gods: [Option<PillarGods>; 4],
    pub element_tally: ElementTally,
    pub gender: Gender,
    /// Solar year and month the year and month pillars were taken from.
    pub solar_month: SolarMonth,
    /// Clock time the day and hour pillars were read from, after solar-time correction.
    pub chart_time: CivilTime,
}

impl FourPillarsChart {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Option<Pillar>; 4] {
        [Some(self.year), Some(self.month), Some(self.day), self.hour]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_pillars() {
        let mut t = ElementTally::default();
        t.add_pillar(Pillar::from_cycle_index(54)); // 戊午: earth, fire
        t.add_pillar(Pillar::from_cycle_index(0)); // 甲子: wood, water
        assert_eq!(t.total(), 4);
        assert_eq!(t.get(Element::Earth), 1);
        assert_eq!(t.get(Element::Fire), 1);
        assert_eq!(t.missing(), vec![Element::Metal]);
    }

    #[test]
    fn pillar_gods_of_day_and_year() {
        // Day master 丁; year 癸巳: 癸 is 七杀, 巳 hides 丙 戊 庚.
        let year = Pillar::from_cycle_index(29);
        assert_eq!(year.name(), "癸巳");
        let g = PillarGods::of(Stem::Ding, year, false);
        assert_eq!(g.stem, Some(TenGod::SevenKillings));
        assert_eq!(
            g.hidden,
            vec![
                (Stem::Bing, TenGod::RobWealth),
                (Stem::Wu, TenGod::HurtingOfficer),
                (Stem::Geng, TenGod::DirectWealth),
            ]
        );
        assert_eq!(g.branch_main(), Some(TenGod::RobWealth));

        let day = PillarGods::of(Stem::Ding, Pillar::from_cycle_index(33), true);
        assert_eq!(day.stem, None);
        assert_eq!(day.hidden, vec![(Stem::Xin, TenGod::IndirectWealth)]);
    }

    #[test]
    fn default_config() {
        let c = ComposeConfig::default();
        assert_eq!(c.zi_hour, ZiHourPolicy::RollForward);
        assert_eq!(c.solar_time, SolarTimeMode::Civil);
        assert_eq!(c.meridian_deg, 120.0);
    }
}
