//! Error types for chart and plate computation.

use luopan_time::TimeError;
use thiserror::Error;

/// Errors from chart composition, location or plate generation.
///
/// Every variant is a caller input problem; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Construction period outside 1..=9.
    #[error("period {0} outside 1..=9")]
    InvalidPeriod(u8),
    /// Star number outside 1..=9.
    #[error("star {0} outside 1..=9")]
    InvalidStar(u8),
    /// Bearing is NaN or infinite.
    #[error("bearing {0} is not a finite angle")]
    InvalidBearing(f64),
    /// Tolerance or combined-direction offset outside [0, 7.5) degrees.
    #[error("sector tolerance {0} outside [0, 7.5) degrees")]
    InvalidTolerance(f64),
    /// Instant could not be built, parsed or corrected.
    #[error(transparent)]
    Time(#[from] TimeError),
}

impl ChartError {
    /// Whether the error should be reported as a client input error.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidPeriod(_)
            | Self::InvalidStar(_)
            | Self::InvalidBearing(_)
            | Self::InvalidTolerance(_) => true,
            Self::Time(TimeError::OutOfRange) => false,
            Self::Time(_) => true,
        }
    }
}
