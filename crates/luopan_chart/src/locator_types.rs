//! Types for compass location results.

use luopan_base::Mountain;
use serde::Serialize;

/// Default width of the low-confidence band at each sector edge.
pub const DEFAULT_TOLERANCE_DEG: f64 = 0.5;

/// Default distance from a sector centre to its combined-direction sub-bounds.
pub const DEFAULT_JIAN_OFFSET_DEG: f64 = 3.0;

/// Options for [`crate::locator::locate_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatorConfig {
    /// Bearings this close to a sector edge are flagged ambiguous.
    pub tolerance_deg: f64,
    /// Offsets from the sector centre beyond this are combined directions (兼向).
    pub jian_offset_deg: f64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: DEFAULT_TOLERANCE_DEG,
            jian_offset_deg: DEFAULT_JIAN_OFFSET_DEG,
        }
    }
}

/// A sitting/facing reading of a compass bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationResult {
    /// Facing bearing, normalized to [0, 360).
    pub bearing_deg: f64,
    /// Sitting mountain (坐).
    pub zuo: Mountain,
    /// Facing mountain (向), always `zuo.pair()`.
    pub xiang: Mountain,
    /// Neighbouring sitting mountain of a combined direction.
    pub jianzuo: Option<Mountain>,
    /// Pair of `jianzuo`.
    pub jianxiang: Option<Mountain>,
    /// The bearing lies between a sector edge and its combined-direction sub-bound.
    pub is_jian: bool,
    /// The bearing lies within tolerance of a sector edge.
    pub ambiguous: bool,
    /// Signed offset of the sitting bearing from the `zuo` centre, degrees (clockwise positive).
    pub offset_deg: f64,
}

impl LocationResult {
    /// Reading of a bearing at the exact centre of a sitting mountain.
    pub fn centered(zuo: Mountain) -> Self {
        Self {
            bearing_deg: zuo.pair().sector().center_deg,
            zuo,
            xiang: zuo.pair(),
            jianzuo: None,
            jianxiang: None,
            is_jian: false,
            ambiguous: false,
            offset_deg: 0.0,
        }
    }

    /// Sitting bearing, opposite the facing bearing.
    pub fn sitting_bearing_deg(&self) -> f64 {
        luopan_base::normalize_360(self.bearing_deg + 180.0)
    }

    /// Conventional label, e.g. 子山午向 or 子山午向兼癸丁.
    pub fn label(&self) -> String {
        match (self.jianzuo, self.jianxiang) {
            (Some(jz), Some(jx)) => format!(
                "{}山{}向兼{}{}",
                self.zuo.name(),
                self.xiang.name(),
                jz.name(),
                jx.name()
            ),
            _ => format!("{}山{}向", self.zuo.name(), self.xiang.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_reading() {
        let r = LocationResult::centered(Mountain::Zi);
        assert_eq!(r.xiang, Mountain::Wu);
        assert_eq!(r.bearing_deg, 180.0);
        assert_eq!(r.sitting_bearing_deg(), 0.0);
        assert_eq!(r.label(), "子山午向");
    }

    #[test]
    fn default_config() {
        let c = LocatorConfig::default();
        assert_eq!(c.tolerance_deg, 0.5);
        assert_eq!(c.jian_offset_deg, 3.0);
    }
}
