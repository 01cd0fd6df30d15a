//! Pillars: (stem, branch) pairs of the sixty-term cycle.
//!
//! A pillar stores only its stem and branch. The cycle index is derived,
//! and only parity-matching pairs can be constructed, so
//! `cycle_index % 10 == stem.index()` and `cycle_index % 12 == branch.index()`
//! hold for every value.

use std::fmt::{Display, Formatter};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::element::Element;
use crate::stem::{ALL_STEMS, Stem};

/// One stem/branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

/// The full cycle in order (index 0 = 甲子, 59 = 癸亥).
pub const SEXAGENARY_CYCLE: [Pillar; 60] = build_cycle();

const fn build_cycle() -> [Pillar; 60] {
    let mut out = [Pillar::from_cycle_index(0); 60];
    let mut i = 0;
    while i < 60 {
        out[i] = Pillar::from_cycle_index(i as u8);
        i += 1;
    }
    out
}

/// Nayin (纳音) sound element shared by two consecutive pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nayin {
    /// Traditional three-character name, e.g. 海中金.
    pub name: &'static str,
    /// Element of the nayin.
    pub element: Element,
}

const NAYIN_TABLE: [(&str, Element); 30] = [
    ("海中金", Element::Metal),
    ("炉中火", Element::Fire),
    ("大林木", Element::Wood),
    ("路旁土", Element::Earth),
    ("剑锋金", Element::Metal),
    ("山头火", Element::Fire),
    ("涧下水", Element::Water),
    ("城头土", Element::Earth),
    ("白蜡金", Element::Metal),
    ("杨柳木", Element::Wood),
    ("泉中水", Element::Water),
    ("屋上土", Element::Earth),
    ("霹雳火", Element::Fire),
    ("松柏木", Element::Wood),
    ("长流水", Element::Water),
    ("砂中金", Element::Metal),
    ("山下火", Element::Fire),
    ("平地木", Element::Wood),
    ("壁上土", Element::Earth),
    ("金箔金", Element::Metal),
    ("覆灯火", Element::Fire),
    ("天河水", Element::Water),
    ("大驿土", Element::Earth),
    ("钗钏金", Element::Metal),
    ("桑柘木", Element::Wood),
    ("大溪水", Element::Water),
    ("沙中土", Element::Earth),
    ("天上火", Element::Fire),
    ("石榴木", Element::Wood),
    ("大海水", Element::Water),
];

impl Pillar {
    /// Pillar at a cycle position; the index is reduced modulo 60.
    pub const fn from_cycle_index(index: u8) -> Pillar {
        let idx = (index % 60) as usize;
        Pillar {
            stem: ALL_STEMS[idx % 10],
            branch: ALL_BRANCHES[idx % 12],
        }
    }

    /// Pair a stem and branch; `None` when their parities differ (e.g. 甲丑).
    pub const fn new(stem: Stem, branch: Branch) -> Option<Pillar> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Pillar { stem, branch })
        } else {
            None
        }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the sixty-term cycle (0..59).
    pub const fn cycle_index(self) -> u8 {
        // Chinese remainder: 6 ≡ 1 (mod 10), 6 ≡ 0 (mod 12); 55 ≡ 0 (mod 10), 55 ≡ 1 (mod 12).
        let s = self.stem.index() as u16;
        let b = self.branch.index() as u16;
        ((6 * s + 55 * b) % 60) as u8
    }

    /// The pillar `steps` positions away, wrapping around the cycle.
    pub const fn offset(self, steps: i64) -> Pillar {
        let idx = (self.cycle_index() as i64 + steps).rem_euclid(60);
        Pillar::from_cycle_index(idx as u8)
    }

    /// Element of the pillar, taken from its stem.
    pub const fn element(self) -> Element {
        self.stem.element()
    }

    /// Nayin of the pillar.
    pub const fn nayin(self) -> Nayin {
        let (name, element) = NAYIN_TABLE[(self.cycle_index() / 2) as usize];
        Nayin { name, element }
    }

    /// Two-character Chinese name, e.g. 戊午.
    pub fn name(self) -> String {
        self.to_string()
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Pillar", 4)?;
        st.serialize_field("name", &self.name())?;
        st.serialize_field("stem", &self.stem)?;
        st.serialize_field("branch", &self.branch)?;
        st.serialize_field("cycle_index", &self.cycle_index())?;
        st.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_round_trip() {
        for i in 0..60u8 {
            let p = Pillar::from_cycle_index(i);
            assert_eq!(p.cycle_index(), i);
            assert_eq!(p.stem().index(), i % 10);
            assert_eq!(p.branch().index(), i % 12);
        }
    }

    #[test]
    fn known_positions() {
        assert_eq!(SEXAGENARY_CYCLE[0].name(), "甲子");
        assert_eq!(SEXAGENARY_CYCLE[54].name(), "戊午");
        assert_eq!(SEXAGENARY_CYCLE[59].name(), "癸亥");
    }

    #[test]
    fn new_rejects_mixed_parity() {
        assert!(Pillar::new(Stem::Jia, Branch::Chou).is_none());
        let p = Pillar::new(Stem::Wu, Branch::Wu).unwrap();
        assert_eq!(p.cycle_index(), 54);
    }

    #[test]
    fn offset_wraps() {
        let gui_hai = Pillar::from_cycle_index(59);
        assert_eq!(gui_hai.offset(1).cycle_index(), 0);
        assert_eq!(Pillar::from_cycle_index(0).offset(-1), gui_hai);
        assert_eq!(gui_hai.offset(-120), gui_hai);
    }

    #[test]
    fn nayin_pairs() {
        assert_eq!(Pillar::from_cycle_index(0).nayin().name, "海中金");
        assert_eq!(Pillar::from_cycle_index(1).nayin().name, "海中金");
        // 戊午 → 天上火
        let wu_wu = Pillar::from_cycle_index(54).nayin();
        assert_eq!(wu_wu.name, "天上火");
        assert_eq!(wu_wu.element, Element::Fire);
    }

    #[test]
    fn element_follows_stem() {
        assert_eq!(Pillar::from_cycle_index(54).element(), Element::Earth);
    }
}
