//! Earthly branches (地支).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// A stem stored inside a branch (藏干) with its share of the branch's qi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: Stem,
    /// Percent of the branch's qi; a branch's entries sum to 100.
    pub weight: u8,
}

const fn hs(stem: Stem, weight: u8) -> HiddenStem {
    HiddenStem { stem, weight }
}

/// Hidden stems per branch, main qi first.
const HIDDEN_STEMS: [&[HiddenStem]; 12] = [
    &[hs(Stem::Gui, 100)],
    &[hs(Stem::Ji, 60), hs(Stem::Gui, 20), hs(Stem::Xin, 20)],
    &[hs(Stem::Jia, 60), hs(Stem::Bing, 20), hs(Stem::Wu, 20)],
    &[hs(Stem::Yi, 100)],
    &[hs(Stem::Wu, 60), hs(Stem::Yi, 20), hs(Stem::Gui, 20)],
    &[hs(Stem::Bing, 60), hs(Stem::Wu, 20), hs(Stem::Geng, 20)],
    &[hs(Stem::Ding, 70), hs(Stem::Ji, 30)],
    &[hs(Stem::Ji, 60), hs(Stem::Ding, 20), hs(Stem::Yi, 20)],
    &[hs(Stem::Geng, 60), hs(Stem::Ren, 20), hs(Stem::Wu, 20)],
    &[hs(Stem::Xin, 100)],
    &[hs(Stem::Wu, 60), hs(Stem::Xin, 20), hs(Stem::Ding, 20)],
    &[hs(Stem::Ren, 70), hs(Stem::Jia, 30)],
];

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl Branch {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Romanised name.
    pub const fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    /// Zodiac animal (生肖).
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch from a 0-based index; `None` when out of range.
    pub const fn from_index(index: u8) -> Option<Branch> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Element of the branch; the four storehouse branches are Earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    /// Even-indexed branches are yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Stems hidden in the branch (藏干), main qi first.
    pub const fn hidden_stems(self) -> &'static [HiddenStem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Main qi (本气) of the branch.
    pub const fn main_stem(self) -> Stem {
        self.hidden_stems()[0].stem
    }

    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}
