//! Ten gods (十神): the relation of a stem to the day master.
//!
//! The relation is decided by the five-element cycle between the two stems
//! and whether they share polarity. Same polarity gives the "partial" god of
//! each pair (比肩, 食神, 偏财, 七杀, 偏印).

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::stem::Stem;

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Friend,
    /// 劫财: same element, opposite polarity.
    RobWealth,
    /// 食神: produced by the day master, same polarity.
    EatingGod,
    /// 伤官: produced by the day master, opposite polarity.
    HurtingOfficer,
    /// 偏财: controlled by the day master, same polarity.
    IndirectWealth,
    /// 正财: controlled by the day master, opposite polarity.
    DirectWealth,
    /// 偏官 (七杀): controls the day master, same polarity.
    SevenKillings,
    /// 正官: controls the day master, opposite polarity.
    DirectOfficer,
    /// 偏印: produces the day master, same polarity.
    IndirectResource,
    /// 正印: produces the day master, opposite polarity.
    DirectResource,
}

/// All ten gods in pair order (index 0 = 比肩).
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

const TEN_GOD_NAMES: [&str; 10] = [
    "比肩", "劫财", "食神", "伤官", "偏财", "正财", "偏官", "正官", "偏印", "正印",
];

const TEN_GOD_ENGLISH: [&str; 10] = [
    "Friend",
    "Rob Wealth",
    "Eating God",
    "Hurting Officer",
    "Indirect Wealth",
    "Direct Wealth",
    "Seven Killings",
    "Direct Officer",
    "Indirect Resource",
    "Direct Resource",
];

impl TenGod {
    pub const fn name(self) -> &'static str {
        TEN_GOD_NAMES[self.index() as usize]
    }

    pub const fn english_name(self) -> &'static str {
        TEN_GOD_ENGLISH[self.index() as usize]
    }

    /// 0-based index in pair order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Friend => 0,
            Self::RobWealth => 1,
            Self::EatingGod => 2,
            Self::HurtingOfficer => 3,
            Self::IndirectWealth => 4,
            Self::DirectWealth => 5,
            Self::SevenKillings => 6,
            Self::DirectOfficer => 7,
            Self::IndirectResource => 8,
            Self::DirectResource => 9,
        }
    }

    /// Element relation shared by both gods of a pair, as the element of
    /// the other stem seen from the day master's element.
    pub const fn element_for(self, day_master: Element) -> Element {
        let step = match self {
            Self::Friend | Self::RobWealth => 0,
            Self::EatingGod | Self::HurtingOfficer => 1,
            Self::IndirectWealth | Self::DirectWealth => 2,
            Self::SevenKillings | Self::DirectOfficer => 3,
            Self::IndirectResource | Self::DirectResource => 4,
        };
        crate::element::ALL_ELEMENTS[(day_master.index() as usize + step) % 5]
    }

    pub const fn all() -> &'static [TenGod; 10] {
        &ALL_TEN_GODS
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ten god of `stem` relative to `day_master`.
pub const fn ten_god(day_master: Stem, stem: Stem) -> TenGod {
    // Steps along the generating cycle from the day master's element.
    let step = (stem.element().index() + 5 - day_master.element().index()) % 5;
    let opposite = (stem.index() + day_master.index()) % 2 == 1;
    ALL_TEN_GODS[(step * 2 + opposite as u8) as usize]
}
