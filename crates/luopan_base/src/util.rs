//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // A tiny negative remainder rounds up to exactly 360.
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed difference `deg - reference` folded into [-180, 180).
pub fn signed_offset(deg: f64, reference: f64) -> f64 {
    normalize_360(deg - reference + 180.0) - 180.0
}
