//! The 24 mountains (二十四山) of the compass ring.
//!
//! Each mountain owns a 15° sector. The ring starts at 子, whose sector
//! 352.5°..7.5° straddles north, and runs clockwise.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::palace::{Palace, Trigram};
use crate::star::Star;

/// Width of one mountain sector in degrees.
pub const SECTOR_SPAN_DEG: f64 = 15.0;

/// The 24 mountains in ring order (index 0 = 子, clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Mountain {
    Zi,
    Gui,
    Chou,
    Gen,
    Yin,
    Jia,
    Mao,
    Yi,
    Chen,
    Xun,
    Si,
    Bing,
    Wu,
    Ding,
    Wei,
    Kun,
    Shen,
    Geng,
    You,
    Xin,
    Xu,
    Qian,
    Hai,
    Ren,
}

/// All mountains in ring order.
pub const ALL_MOUNTAINS: [Mountain; 24] = [
    Mountain::Zi,
    Mountain::Gui,
    Mountain::Chou,
    Mountain::Gen,
    Mountain::Yin,
    Mountain::Jia,
    Mountain::Mao,
    Mountain::Yi,
    Mountain::Chen,
    Mountain::Xun,
    Mountain::Si,
    Mountain::Bing,
    Mountain::Wu,
    Mountain::Ding,
    Mountain::Wei,
    Mountain::Kun,
    Mountain::Shen,
    Mountain::Geng,
    Mountain::You,
    Mountain::Xin,
    Mountain::Xu,
    Mountain::Qian,
    Mountain::Hai,
    Mountain::Ren,
];

const MOUNTAIN_NAMES: [&str; 24] = [
    "子", "癸", "丑", "艮", "寅", "甲", "卯", "乙", "辰", "巽", "巳", "丙", "午", "丁", "未",
    "坤", "申", "庚", "酉", "辛", "戌", "乾", "亥", "壬",
];

const MOUNTAIN_PINYIN: [&str; 24] = [
    "Zi", "Gui", "Chou", "Gen", "Yin", "Jia", "Mao", "Yi", "Chen", "Xun", "Si", "Bing", "Wu",
    "Ding", "Wei", "Kun", "Shen", "Geng", "You", "Xin", "Xu", "Qian", "Hai", "Ren",
];

/// Compass sector of one mountain. `start_deg` is inclusive, `end_deg` exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountainSector {
    pub start_deg: f64,
    pub center_deg: f64,
    pub end_deg: f64,
}

impl MountainSector {
    /// Whether a bearing in [0, 360) lies in the sector.
    ///
    /// The 子 sector wraps through north and is the only one with `start > end`.
    pub fn contains(&self, deg: f64) -> bool {
        if self.start_deg > self.end_deg {
            deg >= self.start_deg || deg < self.end_deg
        } else {
            deg >= self.start_deg && deg < self.end_deg
        }
    }
}

/// Sector table in ring order.
pub const MOUNTAIN_SECTORS: [MountainSector; 24] = [
    MountainSector { start_deg: 352.5, center_deg: 0.0, end_deg: 7.5 },
    MountainSector { start_deg: 7.5, center_deg: 15.0, end_deg: 22.5 },
    MountainSector { start_deg: 22.5, center_deg: 30.0, end_deg: 37.5 },
    MountainSector { start_deg: 37.5, center_deg: 45.0, end_deg: 52.5 },
    MountainSector { start_deg: 52.5, center_deg: 60.0, end_deg: 67.5 },
    MountainSector { start_deg: 67.5, center_deg: 75.0, end_deg: 82.5 },
    MountainSector { start_deg: 82.5, center_deg: 90.0, end_deg: 97.5 },
    MountainSector { start_deg: 97.5, center_deg: 105.0, end_deg: 112.5 },
    MountainSector { start_deg: 112.5, center_deg: 120.0, end_deg: 127.5 },
    MountainSector { start_deg: 127.5, center_deg: 135.0, end_deg: 142.5 },
    MountainSector { start_deg: 142.5, center_deg: 150.0, end_deg: 157.5 },
    MountainSector { start_deg: 157.5, center_deg: 165.0, end_deg: 172.5 },
    MountainSector { start_deg: 172.5, center_deg: 180.0, end_deg: 187.5 },
    MountainSector { start_deg: 187.5, center_deg: 195.0, end_deg: 202.5 },
    MountainSector { start_deg: 202.5, center_deg: 210.0, end_deg: 217.5 },
    MountainSector { start_deg: 217.5, center_deg: 225.0, end_deg: 232.5 },
    MountainSector { start_deg: 232.5, center_deg: 240.0, end_deg: 247.5 },
    MountainSector { start_deg: 247.5, center_deg: 255.0, end_deg: 262.5 },
    MountainSector { start_deg: 262.5, center_deg: 270.0, end_deg: 277.5 },
    MountainSector { start_deg: 277.5, center_deg: 285.0, end_deg: 292.5 },
    MountainSector { start_deg: 292.5, center_deg: 300.0, end_deg: 307.5 },
    MountainSector { start_deg: 307.5, center_deg: 315.0, end_deg: 322.5 },
    MountainSector { start_deg: 322.5, center_deg: 330.0, end_deg: 337.5 },
    MountainSector { start_deg: 337.5, center_deg: 345.0, end_deg: 352.5 },
];

/// Yuan-long (元龙) class of a mountain within its trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yuan {
    /// 地元: first mountain of the trigram, clockwise.
    Earth,
    /// 天元: middle mountain.
    Heaven,
    /// 人元: last mountain.
    Human,
}

impl Yuan {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Earth => "地元",
            Self::Heaven => "天元",
            Self::Human => "人元",
        }
    }

    /// Position within [`Palace::mountains`].
    pub const fn slot(self) -> usize {
        match self {
            Self::Earth => 0,
            Self::Heaven => 1,
            Self::Human => 2,
        }
    }
}

impl Mountain {
    pub const fn name(self) -> &'static str {
        MOUNTAIN_NAMES[self.index() as usize]
    }

    pub const fn pinyin(self) -> &'static str {
        MOUNTAIN_PINYIN[self.index() as usize]
    }

    /// 0-based ring index (子=0, clockwise).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Gui => 1,
            Self::Chou => 2,
            Self::Gen => 3,
            Self::Yin => 4,
            Self::Jia => 5,
            Self::Mao => 6,
            Self::Yi => 7,
            Self::Chen => 8,
            Self::Xun => 9,
            Self::Si => 10,
            Self::Bing => 11,
            Self::Wu => 12,
            Self::Ding => 13,
            Self::Wei => 14,
            Self::Kun => 15,
            Self::Shen => 16,
            Self::Geng => 17,
            Self::You => 18,
            Self::Xin => 19,
            Self::Xu => 20,
            Self::Qian => 21,
            Self::Hai => 22,
            Self::Ren => 23,
        }
    }

    /// Mountain at a ring position; the index wraps modulo 24.
    pub const fn from_index(index: i64) -> Mountain {
        ALL_MOUNTAINS[index.rem_euclid(24) as usize]
    }

    /// The opposite mountain (坐 ↔ 向).
    pub const fn pair(self) -> Mountain {
        match self {
            Self::Zi => Self::Wu,
            Self::Gui => Self::Ding,
            Self::Chou => Self::Wei,
            Self::Gen => Self::Kun,
            Self::Yin => Self::Shen,
            Self::Jia => Self::Geng,
            Self::Mao => Self::You,
            Self::Yi => Self::Xin,
            Self::Chen => Self::Xu,
            Self::Xun => Self::Qian,
            Self::Si => Self::Hai,
            Self::Bing => Self::Ren,
            Self::Wu => Self::Zi,
            Self::Ding => Self::Gui,
            Self::Wei => Self::Chou,
            Self::Kun => Self::Gen,
            Self::Shen => Self::Yin,
            Self::Geng => Self::Jia,
            Self::You => Self::Mao,
            Self::Xin => Self::Yi,
            Self::Xu => Self::Chen,
            Self::Qian => Self::Xun,
            Self::Hai => Self::Si,
            Self::Ren => Self::Bing,
        }
    }

    /// Neighbour one step clockwise.
    pub const fn clockwise(self) -> Mountain {
        Self::from_index(self.index() as i64 + 1)
    }

    /// Neighbour one step counter-clockwise.
    pub const fn counter_clockwise(self) -> Mountain {
        Self::from_index(self.index() as i64 - 1)
    }

    pub const fn sector(self) -> MountainSector {
        MOUNTAIN_SECTORS[self.index() as usize]
    }

    /// Palace (and trigram) the mountain belongs to.
    pub const fn palace(self) -> Palace {
        match self {
            Self::Ren | Self::Zi | Self::Gui => Palace::Kan,
            Self::Chou | Self::Gen | Self::Yin => Palace::Gen,
            Self::Jia | Self::Mao | Self::Yi => Palace::Zhen,
            Self::Chen | Self::Xun | Self::Si => Palace::Xun,
            Self::Bing | Self::Wu | Self::Ding => Palace::Li,
            Self::Wei | Self::Kun | Self::Shen => Palace::Kun,
            Self::Geng | Self::You | Self::Xin => Palace::Dui,
            Self::Xu | Self::Qian | Self::Hai => Palace::Qian,
        }
    }

    pub const fn trigram(self) -> Trigram {
        match self.palace() {
            Palace::Kan => Trigram::Kan,
            Palace::Gen => Trigram::Gen,
            Palace::Zhen => Trigram::Zhen,
            Palace::Xun => Trigram::Xun,
            Palace::Li => Trigram::Li,
            Palace::Kun => Trigram::Kun,
            Palace::Dui => Trigram::Dui,
            Palace::Qian | Palace::Center => Trigram::Qian,
        }
    }

    /// Position within the trigram, counted clockwise.
    pub const fn yuan(self) -> Yuan {
        match (self.index() + 1) % 3 {
            0 => Yuan::Earth,
            1 => Yuan::Heaven,
            _ => Yuan::Human,
        }
    }

    /// Yin/yang of the mountain as used for star flight.
    ///
    /// In the cardinal trigrams only the 地元 mountain is yang; in the
    /// corner trigrams the 天元 and 人元 mountains are yang.
    pub const fn polarity(self) -> Polarity {
        let earth = matches!(self.yuan(), Yuan::Earth);
        let yang = if self.palace().is_cardinal() { earth } else { !earth };
        if yang { Polarity::Yang } else { Polarity::Yin }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Ren | Self::Zi | Self::Gui | Self::Hai => Element::Water,
            Self::Chou | Self::Gen | Self::Chen | Self::Wei | Self::Kun | Self::Xu => {
                Element::Earth
            }
            Self::Yin | Self::Jia | Self::Mao | Self::Yi | Self::Xun => Element::Wood,
            Self::Si | Self::Bing | Self::Wu | Self::Ding => Element::Fire,
            Self::Shen | Self::Geng | Self::You | Self::Xin | Self::Qian => Element::Metal,
        }
    }

    /// Replacement star (替星) used when a combined direction swaps stars.
    pub const fn replacement_star(self) -> Star {
        match self {
            Self::Zi | Self::Gui | Self::Jia | Self::Shen => Star::One,
            Self::Kun | Self::Ren | Self::Yi | Self::Mao | Self::Wei => Star::Two,
            Self::Xu | Self::Qian | Self::Hai | Self::Chen | Self::Xun | Self::Si => Star::Six,
            Self::Gen | Self::Bing | Self::Xin | Self::You | Self::Chou => Star::Seven,
            Self::Yin | Self::Wu | Self::Geng | Self::Ding => Star::Nine,
        }
    }

    pub const fn all() -> &'static [Mountain; 24] {
        &ALL_MOUNTAINS
    }
}
