//! Result types for star evaluation.

use luopan_base::{Palace, Star};
use serde::Serialize;

/// Quality of a star relative to the current period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum StarStatus {
    Prosperous,
    Generating,
    Declining,
    Killing,
    Dead,
}

pub const ALL_STAR_STATUSES: [StarStatus; 5] = [
    StarStatus::Prosperous,
    StarStatus::Generating,
    StarStatus::Declining,
    StarStatus::Killing,
    StarStatus::Dead,
];

impl StarStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prosperous => "旺",
            Self::Generating => "生",
            Self::Declining => "退",
            Self::Killing => "煞",
            Self::Dead => "死",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Prosperous => "prosperous",
            Self::Generating => "generating",
            Self::Declining => "declining",
            Self::Killing => "killing",
            Self::Dead => "dead",
        }
    }

    pub const fn is_timely(self) -> bool {
        matches!(self, Self::Prosperous | Self::Generating)
    }

    pub const fn all() -> &'static [StarStatus; 5] {
        &ALL_STAR_STATUSES
    }
}

/// Five-level grade of a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Grade {
    Bad,
    Poor,
    Neutral,
    Good,
    Excellent,
}

impl Grade {
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            65..=79 => Self::Good,
            40..=64 => Self::Neutral,
            25..=39 => Self::Poor,
            _ => Self::Bad,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "大吉",
            Self::Good => "吉",
            Self::Neutral => "平",
            Self::Poor => "凶",
            Self::Bad => "大凶",
        }
    }
}

/// Rating of one palace of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRating {
    pub palace: Palace,
    pub mountain_star: Star,
    pub facing_star: Star,
    pub mountain_status: StarStatus,
    pub facing_status: StarStatus,
    /// 0..=100.
    pub score: u8,
    pub grade: Grade,
}

/// Star combinations the position queries look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combination {
    /// The facing star is the current period star.
    ProsperousFacing,
    /// The facing star is the next period's star.
    GeneratingFacing,
    /// Two or more eights in one palace.
    DoubleEight,
    SixEight,
    OneSix,
    OneEight,
    /// 一四同宫.
    OneFour,
    /// 二五交加.
    TwoFive,
    /// The annual 8 visits a wealth palace.
    AnnualWealthStar,
    /// The annual 1 or 4 visits a scholar palace.
    AnnualScholarStar,
    /// The annual 2 or 5 visits a hazard palace.
    AnnualHazardStar,
}

impl Combination {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProsperousFacing => "当运向星",
            Self::GeneratingFacing => "生气向星",
            Self::DoubleEight => "双八",
            Self::SixEight => "六八武曲",
            Self::OneSix => "一六共宗",
            Self::OneEight => "一八合",
            Self::OneFour => "一四同宫",
            Self::TwoFive => "二五交加",
            Self::AnnualWealthStar => "流年八白",
            Self::AnnualScholarStar => "流年文昌",
            Self::AnnualHazardStar => "流年二五",
        }
    }

    /// Base contribution to a position's score.
    pub const fn weight(self) -> u32 {
        match self {
            Self::ProsperousFacing => 40,
            Self::GeneratingFacing => 30,
            Self::DoubleEight => 20,
            Self::SixEight => 15,
            Self::OneSix | Self::OneEight => 10,
            Self::OneFour => 40,
            Self::TwoFive => 40,
            Self::AnnualWealthStar | Self::AnnualScholarStar | Self::AnnualHazardStar => 10,
        }
    }
}

/// A palace that qualifies for a named position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPosition {
    pub palace: Palace,
    pub score: u32,
    pub combinations: Vec<Combination>,
    pub labels: Vec<&'static str>,
}

/// Wealth, scholar and hazard positions of a plate, each ranked best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyPositions {
    pub wealth: Vec<KeyPosition>,
    pub scholar: Vec<KeyPosition>,
    pub hazard: Vec<KeyPosition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::Excellent);
        assert_eq!(Grade::from_score(80), Grade::Excellent);
        assert_eq!(Grade::from_score(79), Grade::Good);
        assert_eq!(Grade::from_score(65), Grade::Good);
        assert_eq!(Grade::from_score(50), Grade::Neutral);
        assert_eq!(Grade::from_score(25), Grade::Poor);
        assert_eq!(Grade::from_score(0), Grade::Bad);
        assert!(Grade::Excellent > Grade::Poor);
    }

    #[test]
    fn status_names() {
        let names: Vec<_> = StarStatus::all().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["旺", "生", "退", "煞", "死"]);
        assert!(StarStatus::Generating.is_timely());
        assert!(!StarStatus::Killing.is_timely());
    }
}
