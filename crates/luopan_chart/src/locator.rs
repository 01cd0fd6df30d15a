//! Directional locator: compass bearing to sitting/facing mountains.
//!
//! The input bearing is the facing direction. The sitting mountain is the
//! one whose sector holds the opposite bearing; the facing mountain is
//! then taken from the pairing table rather than from the angle.

use luopan_base::{ALL_MOUNTAINS, Mountain, SECTOR_SPAN_DEG, normalize_360, signed_offset};
use tracing::trace;

use crate::error::ChartError;
use crate::locator_types::{LocationResult, LocatorConfig};

const HALF_SPAN_DEG: f64 = SECTOR_SPAN_DEG / 2.0;

fn check_band(deg: f64) -> Result<f64, ChartError> {
    if deg.is_finite() && (0.0..HALF_SPAN_DEG).contains(&deg) {
        Ok(deg)
    } else {
        Err(ChartError::InvalidTolerance(deg))
    }
}

/// Mountain whose sector contains a bearing in [0, 360).
pub fn mountain_at(deg: f64) -> Mountain {
    if Mountain::Zi.sector().contains(deg) {
        return Mountain::Zi;
    }
    ALL_MOUNTAINS[1..]
        .iter()
        .copied()
        .find(|m| m.sector().contains(deg))
        .unwrap_or_else(|| Mountain::from_index(((deg + HALF_SPAN_DEG) / SECTOR_SPAN_DEG) as i64))
}

/// Locate a facing bearing with the given edge tolerance.
pub fn locate(bearing_deg: f64, tolerance_deg: f64) -> Result<LocationResult, ChartError> {
    locate_with(
        bearing_deg,
        &LocatorConfig {
            tolerance_deg,
            ..Default::default()
        },
    )
}

/// Locate a facing bearing.
pub fn locate_with(bearing_deg: f64, config: &LocatorConfig) -> Result<LocationResult, ChartError> {
    if !bearing_deg.is_finite() {
        return Err(ChartError::InvalidBearing(bearing_deg));
    }
    let tolerance = check_band(config.tolerance_deg)?;
    let jian_offset = check_band(config.jian_offset_deg)?;

    let bearing = normalize_360(bearing_deg);
    let sitting = normalize_360(bearing + 180.0);
    let zuo = mountain_at(sitting);
    let offset = signed_offset(sitting, zuo.sector().center_deg);

    let is_jian = offset.abs() > jian_offset;
    let jianzuo = if !is_jian {
        None
    } else if offset < 0.0 {
        Some(zuo.counter_clockwise())
    } else {
        Some(zuo.clockwise())
    };
    let ambiguous = HALF_SPAN_DEG - offset.abs() <= tolerance;

    trace!(bearing, zuo = zuo.name(), offset, is_jian, ambiguous, "located bearing");

    Ok(LocationResult {
        bearing_deg: bearing,
        zuo,
        xiang: zuo.pair(),
        jianzuo,
        jianxiang: jianzuo.map(Mountain::pair),
        is_jian,
        ambiguous,
        offset_deg: offset,
    })
}
