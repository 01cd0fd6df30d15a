//! Flying-star plate generation.
//!
//! The period star sits in the centre and flies forward along the Lo Shu
//! path. The stars that land in the sitting and facing palaces become the
//! anchors of the mountain and facing columns: each anchor is moved to the
//! centre and flown in the direction its [`FlightRule`] gives.

use luopan_base::{ALL_PALACES, FlightDirection, Mountain, Star, fly};
use tracing::debug;

use crate::locator_types::LocationResult;
use crate::period::Period;
use crate::plate_types::{
    ColumnFlight, FlightRule, Plate, PlateCell, PlateConfig, PlatePattern, StarColumn,
};

/// Period stars of a period, indexed by palace.
pub fn period_stars(period: Period) -> [Star; 9] {
    fly(period.star(), FlightDirection::Forward)
}

/// Mountain standing in for `anchor` when judging yin/yang and replacement.
///
/// This is the mountain of the anchor's home trigram with the same yuan-long
/// as `reference`; the centre star 5 has no trigram and uses `reference`.
pub fn proxy_mountain(anchor: Star, reference: Mountain) -> Mountain {
    match anchor.home_palace().mountains() {
        Some(ms) => ms[reference.yuan().slot()],
        None => reference,
    }
}

fn place_column(
    anchor: Star,
    reference: Mountain,
    is_jian: bool,
    config: &PlateConfig,
) -> ColumnFlight {
    let proxy = proxy_mountain(anchor, reference);
    let direction = match config.flight_rule {
        FlightRule::Parity if anchor.is_odd() => FlightDirection::Forward,
        FlightRule::Parity => FlightDirection::Reverse,
        FlightRule::YuanLong if proxy.polarity().is_yang() => FlightDirection::Forward,
        FlightRule::YuanLong => FlightDirection::Reverse,
    };
    let center = if config.replace_on_jian && is_jian {
        proxy.replacement_star()
    } else {
        anchor
    };
    ColumnFlight {
        anchor,
        center,
        direction,
        replaced: center != anchor,
    }
}

/// Generate a plate with default options.
pub fn generate(period: Period, location: &LocationResult) -> Plate {
    generate_with(period, location, &PlateConfig::default())
}

/// Generate a plate.
pub fn generate_with(period: Period, location: &LocationResult, config: &PlateConfig) -> Plate {
    let periods = period_stars(period);
    let zuo = location.zuo;
    let xiang = location.xiang;

    let mountain_flight = place_column(
        periods[zuo.palace().index()],
        zuo,
        location.is_jian,
        config,
    );
    let facing_flight = place_column(
        periods[xiang.palace().index()],
        xiang,
        location.is_jian,
        config,
    );
    let mountains = fly(mountain_flight.center, mountain_flight.direction);
    let facings = fly(facing_flight.center, facing_flight.direction);

    let cells = ALL_PALACES.map(|palace| PlateCell {
        palace,
        period_star: periods[palace.index()],
        mountain_star: mountains[palace.index()],
        facing_star: facings[palace.index()],
    });

    debug!(
        period = period.number(),
        zuo = zuo.name(),
        xiang = xiang.name(),
        mountain_center = mountain_flight.center.number(),
        facing_center = facing_flight.center.number(),
        "generated plate"
    );

    Plate {
        period,
        zuo,
        xiang,
        mountain_flight,
        facing_flight,
        cells,
    }
}

fn is_consecutive(stars: [Star; 3]) -> bool {
    stars.iter().any(|a| {
        let run = [*a, a.offset(1), a.offset(2)];
        run.iter().all(|s| stars.contains(s))
    })
}

fn is_parent_string(stars: [Star; 3]) -> bool {
    let [a, b, c] = stars.map(Star::number);
    a != b && b != c && a != c && a % 3 == b % 3 && b % 3 == c % 3
}

/// Whole-plate patterns present in a plate.
pub fn patterns(plate: &Plate) -> Vec<PlatePattern> {
    let p = plate.period.star();
    let sit = plate.sitting_cell();
    let face = plate.facing_cell();
    let mut out = Vec::new();

    if sit.mountain_star == p && face.facing_star == p {
        out.push(PlatePattern::ProsperousSittingAndFacing);
    }
    if sit.facing_star == p && face.mountain_star == p {
        out.push(PlatePattern::ReversedSittingAndFacing);
    }
    if face.mountain_star == p && face.facing_star == p {
        out.push(PlatePattern::DoubleStarsAtFacing);
    }
    if sit.mountain_star == p && sit.facing_star == p {
        out.push(PlatePattern::DoubleStarsAtSitting);
    }

    for column in [StarColumn::Mountain, StarColumn::Facing] {
        let stars = plate.column(column);
        if plate
            .cells
            .iter()
            .all(|c| c.period_star.number() + stars[c.palace.index()].number() == 10)
        {
            out.push(PlatePattern::CombinedTen(column));
        }
        if ALL_PALACES.iter().all(|pal| stars[pal.index()].number() == pal.number()) {
            out.push(PlatePattern::Echo(column));
        }
        if ALL_PALACES
            .iter()
            .all(|pal| stars[pal.index()].number() + pal.number() == 10)
        {
            out.push(PlatePattern::CounterEcho(column));
        }
    }

    if plate.cells.iter().all(|c| is_consecutive(c.stars())) {
        out.push(PlatePattern::ConsecutiveStrings);
    }
    if plate.cells.iter().all(|c| is_parent_string(c.stars())) {
        out.push(PlatePattern::ParentStrings);
    }
    out
}
