//! The nine flying stars and their flight along the Lo Shu path.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::palace::{LUOSHU_PATH, Palace};

/// A flying star, numbered 1..9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Star {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

/// All stars in number order (index 0 = One).
pub const ALL_STARS: [Star; 9] = [
    Star::One,
    Star::Two,
    Star::Three,
    Star::Four,
    Star::Five,
    Star::Six,
    Star::Seven,
    Star::Eight,
    Star::Nine,
];

const STAR_NAMES: [&str; 9] = [
    "一白", "二黑", "三碧", "四绿", "五黄", "六白", "七赤", "八白", "九紫",
];

impl Star {
    /// Star number (1..9).
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
        }
    }

    pub const fn from_number(n: u8) -> Option<Star> {
        if n >= 1 && n <= 9 {
            Some(ALL_STARS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Traditional name, e.g. 八白.
    pub const fn name(self) -> &'static str {
        STAR_NAMES[(self.number() - 1) as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::One => Element::Water,
            Self::Two | Self::Five | Self::Eight => Element::Earth,
            Self::Three | Self::Four => Element::Wood,
            Self::Six | Self::Seven => Element::Metal,
            Self::Nine => Element::Fire,
        }
    }

    /// The star `steps` places later in 1..9, wrapping (9 + 1 = 1).
    pub const fn offset(self, steps: i64) -> Star {
        let idx = (self.number() as i64 - 1 + steps).rem_euclid(9);
        ALL_STARS[idx as usize]
    }

    pub const fn is_odd(self) -> bool {
        self.number() % 2 == 1
    }

    /// Palace whose Lo Shu number equals the star number.
    pub const fn home_palace(self) -> Palace {
        crate::palace::ALL_PALACES[(self.number() - 1) as usize]
    }

    pub const fn all() -> &'static [Star; 9] {
        &ALL_STARS
    }
}

/// Direction a star column flies along the Lo Shu path (顺飞 / 逆飞).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightDirection {
    /// Star number rises by one at each step.
    Forward,
    /// Star number falls by one at each step.
    Reverse,
}

/// Fly `center` from the centre palace along [`LUOSHU_PATH`].
///
/// The result is indexed by [`Palace::index`].
pub const fn fly(center: Star, direction: FlightDirection) -> [Star; 9] {
    let mut out = [center; 9];
    let mut step = 0;
    while step < 9 {
        let delta = match direction {
            FlightDirection::Forward => step as i64,
            FlightDirection::Reverse => -(step as i64),
        };
        out[LUOSHU_PATH[step].index()] = center.offset(delta);
        step += 1;
    }
    out
}
