//! Error types for civil time handling.

use thiserror::Error;

/// Errors from constructing, parsing or shifting civil times.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day does not name a proleptic Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute or second is out of range.
    #[error("invalid clock time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// Input string is not a recognised date-time.
    #[error("cannot parse instant '{0}'")]
    Parse(String),
    /// Longitude or meridian outside [-180, 180] degrees.
    #[error("longitude {0} outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),
    /// Shifting would leave the representable date range.
    #[error("date-time arithmetic out of range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_fields() {
        let e = TimeError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(e.to_string(), "invalid calendar date 2023-02-29");
    }

    #[test]
    fn display_parse() {
        let e = TimeError::Parse("yesterday".into());
        assert!(e.to_string().contains("yesterday"));
    }
}
