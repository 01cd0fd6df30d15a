//! Golden flying-star plates and patterns.

use luopan_base::{Mountain, Palace, Star};
use luopan_chart::{
    FlightRule, LocationResult, Period, Plate, PlateConfig, PlatePattern, StarColumn, generate,
    generate_with, locate, patterns,
};

fn parity(period: u8, zuo: Mountain) -> Plate {
    generate(Period::new(period).unwrap(), &LocationResult::centered(zuo))
}

fn yuan_long(period: u8, zuo: Mountain) -> Plate {
    let config = PlateConfig {
        flight_rule: FlightRule::YuanLong,
        ..Default::default()
    };
    generate_with(Period::new(period).unwrap(), &LocationResult::centered(zuo), &config)
}

/// (mountain, facing) per palace 1..=9.
fn pairs(plate: &Plate) -> Vec<(u8, u8)> {
    plate
        .cells
        .iter()
        .map(|c| (c.mountain_star.number(), c.facing_star.number()))
        .collect()
}

// ---------------------------------------------------------------------------
// Parity rule
// ---------------------------------------------------------------------------

#[test]
fn period_eight_zi() {
    let plate = parity(8, Mountain::Zi);
    assert_eq!(
        pairs(&plate),
        vec![(8, 8), (7, 9), (6, 1), (5, 2), (4, 3), (3, 4), (2, 5), (1, 6), (9, 7)]
    );
    assert_eq!(patterns(&plate), vec![PlatePattern::DoubleStarsAtSitting]);
}

#[test]
fn period_eight_chou() {
    let plate = parity(8, Mountain::Chou);
    assert_eq!(
        pairs(&plate),
        vec![(6, 1), (5, 2), (4, 3), (3, 4), (2, 5), (1, 6), (9, 7), (8, 8), (7, 9)]
    );
    assert_eq!(plate.sitting_palace(), Palace::Gen);
    assert_eq!(plate.facing_palace(), Palace::Kun);
    assert_eq!(
        patterns(&plate),
        vec![
            PlatePattern::DoubleStarsAtSitting,
            PlatePattern::CombinedTen(StarColumn::Mountain),
            PlatePattern::Echo(StarColumn::Facing),
        ]
    );
}

#[test]
fn period_seven_mao_is_reversed() {
    let plate = parity(7, Mountain::Mao);
    assert_eq!(
        patterns(&plate),
        vec![
            PlatePattern::ReversedSittingAndFacing,
            PlatePattern::Echo(StarColumn::Mountain)
        ]
    );
}

#[test]
fn period_two_chou_combines_ten() {
    assert_eq!(
        patterns(&parity(2, Mountain::Chou)),
        vec![
            PlatePattern::DoubleStarsAtFacing,
            PlatePattern::Echo(StarColumn::Mountain),
            PlatePattern::CombinedTen(StarColumn::Facing),
        ]
    );
}

#[test]
fn period_four_geng_combines_ten_on_mountain() {
    let found = patterns(&parity(4, Mountain::Geng));
    assert_eq!(
        found,
        vec![
            PlatePattern::ProsperousSittingAndFacing,
            PlatePattern::CombinedTen(StarColumn::Mountain)
        ]
    );
}

#[test]
fn period_four_chen_consecutive() {
    let found = patterns(&parity(4, Mountain::Chen));
    assert!(found.contains(&PlatePattern::ReversedSittingAndFacing));
    assert!(found.contains(&PlatePattern::ConsecutiveStrings));
    assert!(found.contains(&PlatePattern::Echo(StarColumn::Facing)));
}

// ---------------------------------------------------------------------------
// Yuan-long rule
// ---------------------------------------------------------------------------

#[test]
fn period_eight_zi_yuan_long() {
    let plate = yuan_long(8, Mountain::Zi);
    assert_eq!(
        pairs(&plate),
        vec![(9, 7), (1, 6), (2, 5), (3, 4), (4, 3), (5, 2), (6, 1), (7, 9), (8, 8)]
    );
}

#[test]
fn period_eight_chou_yuan_long_prospers() {
    let plate = yuan_long(8, Mountain::Chou);
    assert_eq!(
        pairs(&plate),
        vec![(6, 9), (5, 8), (4, 7), (3, 6), (2, 5), (1, 4), (9, 3), (8, 2), (7, 1)]
    );
    let found = patterns(&plate);
    assert_eq!(found[0], PlatePattern::ProsperousSittingAndFacing);
    assert!(found.contains(&PlatePattern::CombinedTen(StarColumn::Mountain)));
    assert!(found.contains(&PlatePattern::CounterEcho(StarColumn::Facing)));
}

#[test]
fn period_one_xun_yuan_long() {
    let found = patterns(&yuan_long(1, Mountain::Xun));
    assert_eq!(
        found,
        vec![
            PlatePattern::DoubleStarsAtSitting,
            PlatePattern::CombinedTen(StarColumn::Mountain)
        ]
    );
}

// ---------------------------------------------------------------------------
// From a bearing
// ---------------------------------------------------------------------------

#[test]
fn facing_south_in_period_nine() {
    let location = locate(180.0, 0.5).unwrap();
    assert_eq!(location.zuo, Mountain::Zi);
    let plate = generate(Period::new(9).unwrap(), &location);
    let li = plate.cell(Palace::Li);
    assert_eq!((li.mountain_star, li.facing_star), (Star::Nine, Star::Nine));
    assert_eq!(plate.cell(Palace::Center).period_star, Star::Nine);
}
