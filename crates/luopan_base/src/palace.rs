//! The nine palaces of the Lo Shu grid and the eight trigrams.

use serde::{Deserialize, Serialize};

use crate::mountain::Mountain;

/// The eight trigrams (八卦) in Later Heaven arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    Kan,
    Kun,
    Zhen,
    Xun,
    Qian,
    Dui,
    Gen,
    Li,
}

impl Trigram {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kan => "坎",
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Gen => "艮",
            Self::Li => "离",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kan => "☵",
            Self::Kun => "☷",
            Self::Zhen => "☳",
            Self::Xun => "☴",
            Self::Qian => "☰",
            Self::Dui => "☱",
            Self::Gen => "☶",
            Self::Li => "☲",
        }
    }
}

/// A palace of the Lo Shu grid, numbered 1..9 by its home star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Palace {
    Kan,
    Kun,
    Zhen,
    Xun,
    Center,
    Qian,
    Dui,
    Gen,
    Li,
}

/// All palaces in number order (index 0 = Kan/1).
pub const ALL_PALACES: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Center,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// Flight order of the Lo Shu path: 5 → 6 → 7 → 8 → 9 → 1 → 2 → 3 → 4.
pub const LUOSHU_PATH: [Palace; 9] = [
    Palace::Center,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
];

impl Palace {
    /// Lo Shu number (1..9).
    pub const fn number(self) -> u8 {
        match self {
            Self::Kan => 1,
            Self::Kun => 2,
            Self::Zhen => 3,
            Self::Xun => 4,
            Self::Center => 5,
            Self::Qian => 6,
            Self::Dui => 7,
            Self::Gen => 8,
            Self::Li => 9,
        }
    }

    /// 0-based index into [`ALL_PALACES`] and plate arrays.
    pub const fn index(self) -> usize {
        (self.number() - 1) as usize
    }

    pub const fn from_number(n: u8) -> Option<Palace> {
        if n >= 1 && n <= 9 {
            Some(ALL_PALACES[(n - 1) as usize])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self.trigram() {
            Some(t) => t.name(),
            None => "中",
        }
    }

    /// Compass abbreviation; the centre is "C".
    pub const fn direction(self) -> &'static str {
        match self {
            Self::Kan => "N",
            Self::Kun => "SW",
            Self::Zhen => "E",
            Self::Xun => "SE",
            Self::Center => "C",
            Self::Qian => "NW",
            Self::Dui => "W",
            Self::Gen => "NE",
            Self::Li => "S",
        }
    }

    pub const fn trigram(self) -> Option<Trigram> {
        match self {
            Self::Kan => Some(Trigram::Kan),
            Self::Kun => Some(Trigram::Kun),
            Self::Zhen => Some(Trigram::Zhen),
            Self::Xun => Some(Trigram::Xun),
            Self::Center => None,
            Self::Qian => Some(Trigram::Qian),
            Self::Dui => Some(Trigram::Dui),
            Self::Gen => Some(Trigram::Gen),
            Self::Li => Some(Trigram::Li),
        }
    }

    /// N, E, S and W palaces.
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::Kan | Self::Zhen | Self::Li | Self::Dui)
    }

    /// The three mountains of an outer palace as (地元, 天元, 人元).
    pub const fn mountains(self) -> Option<[Mountain; 3]> {
        use Mountain as M;
        match self {
            Self::Kan => Some([M::Ren, M::Zi, M::Gui]),
            Self::Gen => Some([M::Chou, M::Gen, M::Yin]),
            Self::Zhen => Some([M::Jia, M::Mao, M::Yi]),
            Self::Xun => Some([M::Chen, M::Xun, M::Si]),
            Self::Li => Some([M::Bing, M::Wu, M::Ding]),
            Self::Kun => Some([M::Wei, M::Kun, M::Shen]),
            Self::Dui => Some([M::Geng, M::You, M::Xin]),
            Self::Qian => Some([M::Xu, M::Qian, M::Hai]),
            Self::Center => None,
        }
    }

    pub const fn all() -> &'static [Palace; 9] {
        &ALL_PALACES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for p in ALL_PALACES {
            assert_eq!(Palace::from_number(p.number()), Some(p));
            assert_eq!(ALL_PALACES[p.index()], p);
        }
        assert_eq!(Palace::from_number(0), None);
        assert_eq!(Palace::from_number(10), None);
    }

    #[test]
    fn path_visits_every_palace_once() {
        let mut seen = [false; 9];
        for p in LUOSHU_PATH {
            assert!(!seen[p.index()]);
            seen[p.index()] = true;
        }
        let numbers: Vec<u8> = LUOSHU_PATH.iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![5, 6, 7, 8, 9, 1, 2, 3, 4]);
    }

    #[test]
    fn mountains_belong_to_palace() {
        for p in ALL_PALACES {
            match p.mountains() {
                Some(ms) => {
                    for m in ms {
                        assert_eq!(m.palace(), p, "{} in {}", m.name(), p.name());
                    }
                }
                None => assert_eq!(p, Palace::Center),
            }
        }
    }

    #[test]
    fn names() {
        assert_eq!(Palace::Li.name(), "离");
        assert_eq!(Palace::Center.name(), "中");
        assert_eq!(Palace::Qian.trigram().map(Trigram::symbol), Some("☰"));
    }
}
