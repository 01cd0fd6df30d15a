//! Star classification and position finding.
//!
//! Statuses are recomputed per query from the plate and a current period
//! star, so the same plate can be read against a later period or an annual
//! overlay without being regenerated.

use luopan_base::{Palace, Star};

use crate::evaluator_types::{
    CellRating, Combination, Grade, KeyPosition, KeyPositions, StarStatus,
};
use crate::period::AnnualOverlay;
use crate::plate_types::{Plate, PlateCell};

const BASE_SCORE: i32 = 50;
const PROSPEROUS_BONUS: i32 = 15;
const GENERATING_BONUS: i32 = 10;
const AFFLICTION_PENALTY: i32 = 20;
const PAIRED_BONUS: i32 = 5;
const SCHOLAR_FACING_BONUS: u32 = 10;
const SCHOLAR_MOUNTAIN_BONUS: u32 = 5;

/// Status of `star` relative to `current`.
pub fn classify(star: Star, current: Star) -> StarStatus {
    if star == current {
        StarStatus::Prosperous
    } else if star == current.offset(1) {
        StarStatus::Generating
    } else if star == current.offset(-1) {
        StarStatus::Declining
    } else if star == current.offset(2) {
        StarStatus::Killing
    } else {
        StarStatus::Dead
    }
}

fn is_affliction(star: Star) -> bool {
    matches!(star, Star::Two | Star::Five)
}

fn star_points(star: Star, current: Star) -> i32 {
    let mut points = match classify(star, current) {
        StarStatus::Prosperous => PROSPEROUS_BONUS,
        StarStatus::Generating => GENERATING_BONUS,
        _ => 0,
    };
    if is_affliction(star) {
        points -= AFFLICTION_PENALTY;
    }
    points
}

/// Rate one palace by its mountain and facing stars.
pub fn rate_cell(cell: &PlateCell, current: Star) -> CellRating {
    let mut score = BASE_SCORE
        + star_points(cell.mountain_star, current)
        + star_points(cell.facing_star, current);
    if cell.mountain_star == cell.facing_star {
        score += PAIRED_BONUS;
    }
    let score = score.clamp(0, 100) as u8;
    CellRating {
        palace: cell.palace,
        mountain_star: cell.mountain_star,
        facing_star: cell.facing_star,
        mountain_status: classify(cell.mountain_star, current),
        facing_status: classify(cell.facing_star, current),
        score,
        grade: Grade::from_score(score),
    }
}

/// Ratings for every palace, indexed by [`Palace::index`].
pub fn rate_plate(plate: &Plate, current: Star) -> [CellRating; 9] {
    plate.cells.map(|cell| rate_cell(&cell, current))
}

fn position(palace: Palace, combinations: Vec<Combination>, extra: u32) -> KeyPosition {
    let score = combinations.iter().map(|c| c.weight()).sum::<u32>() + extra;
    let labels = combinations.iter().map(|c| c.label()).collect();
    KeyPosition {
        palace,
        score,
        combinations,
        labels,
    }
}

fn ranked(mut positions: Vec<KeyPosition>) -> Vec<KeyPosition> {
    positions.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.palace.number().cmp(&b.palace.number()))
    });
    positions
}

fn annual_at(annual: Option<&AnnualOverlay>, palace: Palace) -> Option<Star> {
    annual.map(|a| a.star_at(palace))
}

/// Palaces where wealth combinations gather.
pub fn wealth_positions(
    plate: &Plate,
    current: Star,
    annual: Option<&AnnualOverlay>,
) -> Vec<KeyPosition> {
    let found = plate
        .cells
        .iter()
        .filter_map(|cell| {
            let mut combos = Vec::new();
            if cell.facing_star == current {
                combos.push(Combination::ProsperousFacing);
            } else if cell.facing_star == current.offset(1) {
                combos.push(Combination::GeneratingFacing);
            }
            if cell.count(Star::Eight) >= 2 {
                combos.push(Combination::DoubleEight);
            }
            if cell.contains(Star::Six) && cell.contains(Star::Eight) {
                combos.push(Combination::SixEight);
            }
            if cell.contains(Star::One) && cell.contains(Star::Six) {
                combos.push(Combination::OneSix);
            }
            if cell.contains(Star::One) && cell.contains(Star::Eight) {
                combos.push(Combination::OneEight);
            }
            if combos.is_empty() {
                return None;
            }
            if annual_at(annual, cell.palace) == Some(Star::Eight) {
                combos.push(Combination::AnnualWealthStar);
            }
            Some(position(cell.palace, combos, 0))
        })
        .collect();
    ranked(found)
}

/// Palaces where 1 and 4 meet.
pub fn scholar_positions(plate: &Plate, annual: Option<&AnnualOverlay>) -> Vec<KeyPosition> {
    let is_scholar = |s: Star| matches!(s, Star::One | Star::Four);
    let found = plate
        .cells
        .iter()
        .filter(|cell| cell.contains(Star::One) && cell.contains(Star::Four))
        .map(|cell| {
            let mut combos = vec![Combination::OneFour];
            if annual_at(annual, cell.palace).is_some_and(is_scholar) {
                combos.push(Combination::AnnualScholarStar);
            }
            let mut extra = 0;
            if is_scholar(cell.facing_star) {
                extra += SCHOLAR_FACING_BONUS;
            }
            if is_scholar(cell.mountain_star) {
                extra += SCHOLAR_MOUNTAIN_BONUS;
            }
            position(cell.palace, combos, extra)
        })
        .collect();
    ranked(found)
}

/// Palaces where 2 and 5 meet.
pub fn hazard_positions(plate: &Plate, annual: Option<&AnnualOverlay>) -> Vec<KeyPosition> {
    let found = plate
        .cells
        .iter()
        .filter(|cell| cell.contains(Star::Two) && cell.contains(Star::Five))
        .map(|cell| {
            let mut combos = vec![Combination::TwoFive];
            if annual_at(annual, cell.palace).is_some_and(is_affliction) {
                combos.push(Combination::AnnualHazardStar);
            }
            position(cell.palace, combos, 0)
        })
        .collect();
    ranked(found)
}

/// All three position lists.
pub fn key_positions(
    plate: &Plate,
    current: Star,
    annual: Option<&AnnualOverlay>,
) -> KeyPositions {
    KeyPositions {
        wealth: wealth_positions(plate, current, annual),
        scholar: scholar_positions(plate, annual),
        hazard: hazard_positions(plate, annual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator_types::LocationResult;
    use crate::period::Period;
    use crate::plate::generate;
    use luopan_base::{ALL_STARS, Mountain};

    #[test]
    fn classify_period_nine() {
        assert_eq!(classify(Star::Nine, Star::Nine), StarStatus::Prosperous);
        assert_eq!(classify(Star::One, Star::Nine), StarStatus::Generating);
        assert_eq!(classify(Star::Eight, Star::Nine), StarStatus::Declining);
        assert_eq!(classify(Star::Two, Star::Nine), StarStatus::Killing);
        assert_eq!(classify(Star::Five, Star::Nine), StarStatus::Dead);
    }

    #[test]
    fn every_period_has_one_of_each_timely_status() {
        for current in ALL_STARS {
            let statuses: Vec<_> = ALL_STARS.iter().map(|s| classify(*s, current)).collect();
            for status in [
                StarStatus::Prosperous,
                StarStatus::Generating,
                StarStatus::Declining,
                StarStatus::Killing,
            ] {
                assert_eq!(statuses.iter().filter(|s| **s == status).count(), 1);
            }
            assert_eq!(statuses.iter().filter(|s| **s == StarStatus::Dead).count(), 5);
        }
    }

    #[test]
    fn cell_score_bounds() {
        let best = PlateCell {
            palace: Palace::Li,
            period_star: Star::Three,
            mountain_star: Star::Eight,
            facing_star: Star::Eight,
        };
        let r = rate_cell(&best, Star::Eight);
        assert_eq!(r.score, 85);
        assert_eq!(r.grade, Grade::Excellent);

        let worst = PlateCell {
            palace: Palace::Kun,
            period_star: Star::Five,
            mountain_star: Star::Two,
            facing_star: Star::Five,
        };
        let r = rate_cell(&worst, Star::Eight);
        assert_eq!(r.score, 10);
        assert_eq!(r.grade, Grade::Bad);
    }

    #[test]
    fn period_nine_zi_positions() {
        // Li holds 4/9/9, Gen holds 3/8/1.
        let plate = generate(Period::new(9).unwrap(), &LocationResult::centered(Mountain::Zi));
        let positions = key_positions(&plate, Star::Nine, None);
        let top: Vec<_> = positions.wealth[..2].iter().map(|p| (p.palace, p.score)).collect();
        assert_eq!(top, vec![(Palace::Gen, 40), (Palace::Li, 40)]);
        assert_eq!(
            positions.wealth[0].combinations,
            vec![Combination::GeneratingFacing, Combination::OneEight]
        );
        assert_eq!(positions.wealth[1].labels, vec!["当运向星"]);
        assert!(positions.scholar.is_empty());
        assert!(positions.hazard.is_empty());
    }

    #[test]
    fn annual_stars_add_bonuses() {
        // Period 8, 子: Kan holds 4/8/8; Xun 7/5/2 and Dui 1/2/5 carry 2-5.
        // 2024 puts annual 8 in Kan, 2 in Xun and 5 in Dui.
        let plate = generate(Period::new(8).unwrap(), &LocationResult::centered(Mountain::Zi));
        assert_eq!(plate.cell(Palace::Kan).stars(), [Star::Four, Star::Eight, Star::Eight]);
        let annual = AnnualOverlay::for_year(2024);
        let positions = key_positions(&plate, Star::Eight, Some(&annual));

        let kan = &positions.wealth[0];
        assert_eq!(kan.palace, Palace::Kan);
        assert_eq!(
            kan.combinations,
            vec![
                Combination::ProsperousFacing,
                Combination::DoubleEight,
                Combination::AnnualWealthStar
            ]
        );
        assert_eq!(kan.score, 70);

        let hazards: Vec<_> = positions.hazard.iter().map(|p| (p.palace, p.score)).collect();
        assert_eq!(hazards, vec![(Palace::Xun, 50), (Palace::Dui, 50)]);
        assert!(positions.scholar.is_empty());
    }

    #[test]
    fn rankings_are_sorted() {
        let plate = generate(Period::new(8).unwrap(), &LocationResult::centered(Mountain::Chou));
        let annual = AnnualOverlay::for_year(2024);
        let positions = key_positions(&plate, Star::Eight, Some(&annual));
        for list in [&positions.wealth, &positions.scholar, &positions.hazard] {
            for pair in list.windows(2) {
                assert!(
                    pair[0].score > pair[1].score
                        || (pair[0].score == pair[1].score
                            && pair[0].palace.number() < pair[1].palace.number())
                );
            }
            for p in list.iter() {
                assert_eq!(p.labels.len(), p.combinations.len());
            }
        }
    }
}
