//! Types for flying-star plates.

use luopan_base::{FlightDirection, Mountain, Palace, Star};
use serde::{Deserialize, Serialize};

use crate::period::Period;

/// Rule deciding whether the mountain and facing columns fly forward or in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightRule {
    /// Odd anchor stars fly forward, even ones in reverse.
    #[default]
    Parity,
    /// Direction follows the yin/yang of the mountain of the anchor star's home
    /// trigram that shares the sitting (or facing) mountain's yuan-long.
    YuanLong,
}

/// Options for plate generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlateConfig {
    pub flight_rule: FlightRule,
    /// Substitute replacement stars (替卦) when the location is a combined direction.
    pub replace_on_jian: bool,
}

/// One palace of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlateCell {
    pub palace: Palace,
    /// Period star (运星).
    pub period_star: Star,
    /// Mountain star (山星).
    pub mountain_star: Star,
    /// Facing star (向星).
    pub facing_star: Star,
}

impl PlateCell {
    /// (period, mountain, facing).
    pub fn stars(&self) -> [Star; 3] {
        [self.period_star, self.mountain_star, self.facing_star]
    }

    pub fn contains(&self, star: Star) -> bool {
        self.stars().contains(&star)
    }

    pub fn count(&self, star: Star) -> usize {
        self.stars().iter().filter(|s| **s == star).count()
    }
}

/// Which placed column a pattern concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StarColumn {
    Mountain,
    Facing,
}

/// How one column was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnFlight {
    /// Period-plate star found in the anchor palace.
    pub anchor: Star,
    /// Star placed in the centre (the anchor, or its replacement).
    pub center: Star,
    pub direction: FlightDirection,
    /// Whether a replacement star was substituted.
    pub replaced: bool,
}

/// A complete nine-palace flying-star plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plate {
    pub period: Period,
    pub zuo: Mountain,
    pub xiang: Mountain,
    pub mountain_flight: ColumnFlight,
    pub facing_flight: ColumnFlight,
    /// Indexed by [`Palace::index`].
    pub cells: [PlateCell; 9],
}

impl Plate {
    pub fn cell(&self, palace: Palace) -> &PlateCell {
        &self.cells[palace.index()]
    }

    pub fn sitting_palace(&self) -> Palace {
        self.zuo.palace()
    }

    pub fn facing_palace(&self) -> Palace {
        self.xiang.palace()
    }

    pub fn sitting_cell(&self) -> &PlateCell {
        self.cell(self.sitting_palace())
    }

    pub fn facing_cell(&self) -> &PlateCell {
        self.cell(self.facing_palace())
    }

    /// Stars of one column, indexed by [`Palace::index`].
    pub fn column(&self, column: StarColumn) -> [Star; 9] {
        self.cells.map(|cell| match column {
            StarColumn::Mountain => cell.mountain_star,
            StarColumn::Facing => cell.facing_star,
        })
    }
}

/// Named whole-plate patterns (格局).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlatePattern {
    /// 旺山旺向: the period's mountain star sits, its facing star faces.
    ProsperousSittingAndFacing,
    /// 上山下水: the period's facing star sits, its mountain star faces.
    ReversedSittingAndFacing,
    /// 双星会向: both period stars meet in the facing palace.
    DoubleStarsAtFacing,
    /// 双星会坐: both period stars meet in the sitting palace.
    DoubleStarsAtSitting,
    /// 合十: the column and the period stars sum to ten in every palace.
    CombinedTen(StarColumn),
    /// 连珠三般卦: every palace holds three consecutive stars.
    ConsecutiveStrings,
    /// 父母三般卦: every palace holds one of 147, 258, 369.
    ParentStrings,
    /// 伏吟: the column repeats the Lo Shu home arrangement.
    Echo(StarColumn),
    /// 反吟: the column mirrors the Lo Shu home arrangement.
    CounterEcho(StarColumn),
}

impl PlatePattern {
    pub fn name(self) -> &'static str {
        match self {
            Self::ProsperousSittingAndFacing => "旺山旺向",
            Self::ReversedSittingAndFacing => "上山下水",
            Self::DoubleStarsAtFacing => "双星会向",
            Self::DoubleStarsAtSitting => "双星会坐",
            Self::CombinedTen(StarColumn::Mountain) => "山星合十",
            Self::CombinedTen(StarColumn::Facing) => "向星合十",
            Self::ConsecutiveStrings => "连珠三般卦",
            Self::ParentStrings => "父母三般卦",
            Self::Echo(StarColumn::Mountain) => "山星伏吟",
            Self::Echo(StarColumn::Facing) => "向星伏吟",
            Self::CounterEcho(StarColumn::Mountain) => "山星反吟",
            Self::CounterEcho(StarColumn::Facing) => "向星反吟",
        }
    }

    /// Whether the pattern is traditionally read as favourable.
    pub fn is_favourable(self) -> bool {
        matches!(
            self,
            Self::ProsperousSittingAndFacing
                | Self::CombinedTen(_)
                | Self::ConsecutiveStrings
                | Self::ParentStrings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_queries() {
        let cell = PlateCell {
            palace: Palace::Kan,
            period_star: Star::Four,
            mountain_star: Star::Eight,
            facing_star: Star::Eight,
        };
        assert!(cell.contains(Star::Four));
        assert!(!cell.contains(Star::One));
        assert_eq!(cell.count(Star::Eight), 2);
    }

    #[test]
    fn pattern_names() {
        assert_eq!(PlatePattern::ProsperousSittingAndFacing.name(), "旺山旺向");
        assert_eq!(PlatePattern::Echo(StarColumn::Facing).name(), "向星伏吟");
        assert!(!PlatePattern::ReversedSittingAndFacing.is_favourable());
    }

    #[test]
    fn default_config_is_parity() {
        let c = PlateConfig::default();
        assert_eq!(c.flight_rule, FlightRule::Parity);
        assert!(!c.replace_on_jian);
    }
}
