//! Local civil date-time with whole-second precision.
//!
//! `CivilTime` is the wall-clock instant every chart is built from. It
//! carries no zone; callers decide which meridian the clock refers to.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::Serialize;

use crate::error::TimeError;
use crate::julian;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Validated civil date-time (proleptic Gregorian, local wall clock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CivilTime {
    inner: NaiveDateTime,
}

impl CivilTime {
    /// Build from calendar fields, rejecting impossible dates and clock times.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(TimeError::InvalidTime {
            hour,
            minute,
            second,
        })?;
        Ok(Self {
            inner: NaiveDateTime::new(date, time),
        })
    }

    /// Midnight at the start of a calendar date.
    pub fn from_date(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Wrap a chrono value, dropping sub-second precision.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        let inner = dt.with_nanosecond(0).unwrap_or(dt);
        Self { inner }
    }

    /// The system's local wall clock.
    pub fn now() -> Self {
        Self::from_naive(chrono::Local::now().naive_local())
    }

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm[:ss]` (or with a space), or RFC 3339.
    ///
    /// An RFC 3339 offset is accepted but only its wall-clock part is kept.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_naive(dt.naive_local()));
        }
        let bare = s.trim_end_matches('Z');
        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(bare, fmt) {
                return Ok(Self::from_naive(dt));
            }
        }
        NaiveDate::parse_from_str(bare, "%Y-%m-%d")
            .map(|d| Self::from_naive(d.and_time(NaiveTime::MIN)))
            .map_err(|_| TimeError::Parse(s.to_string()))
    }

    /// Midnight of the day with the given Julian day number, plus a clock time.
    pub fn from_day_number(
        jdn: i64,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let (year, month, day) = julian::from_day_number(jdn);
        Self::new(year, month, day, hour, minute, second)
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    /// 1-based day of the year.
    pub fn day_of_year(&self) -> u32 {
        self.inner.ordinal()
    }

    /// Seconds elapsed since local midnight.
    pub fn seconds_of_day(&self) -> u32 {
        self.inner.num_seconds_from_midnight()
    }

    /// Julian day number of the calendar date (time of day ignored).
    pub fn day_number(&self) -> i64 {
        julian::day_number(self.year(), self.month(), self.day())
    }

    /// Julian Date of this wall-clock instant, treating the clock as
    /// `utc_offset_minutes` ahead of UTC.
    pub fn julian_date_ut(&self, utc_offset_minutes: i32) -> f64 {
        let secs = f64::from(self.seconds_of_day()) - f64::from(utc_offset_minutes) * 60.0;
        julian::julian_date(self.day_number(), secs)
    }

    /// Shift by a signed number of seconds.
    pub fn shift_seconds(&self, seconds: i64) -> Result<Self, TimeError> {
        let delta = TimeDelta::try_seconds(seconds).ok_or(TimeError::OutOfRange)?;
        self.inner
            .checked_add_signed(delta)
            .map(|inner| Self { inner })
            .ok_or(TimeError::OutOfRange)
    }

    /// Shift by a signed number of whole days, keeping the clock time.
    pub fn shift_days(&self, days: i64) -> Result<Self, TimeError> {
        let delta = TimeDelta::try_days(days).ok_or(TimeError::OutOfRange)?;
        self.inner
            .checked_add_signed(delta)
            .map(|inner| Self { inner })
            .ok_or(TimeError::OutOfRange)
    }

    /// The underlying chrono value.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.inner
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%dT%H:%M:%S"))
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_date() {
        assert!(CivilTime::new(2024, 2, 29, 0, 0, 0).is_ok());
        assert_eq!(
            CivilTime::new(2023, 2, 29, 0, 0, 0),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn new_validates_clock() {
        assert!(matches!(
            CivilTime::new(2024, 1, 1, 24, 0, 0),
            Err(TimeError::InvalidTime { hour: 24, .. })
        ));
        assert!(CivilTime::new(2024, 1, 1, 23, 60, 0).is_err());
    }

    #[test]
    fn parse_variants() {
        let want = CivilTime::new(1973, 1, 1, 23, 30, 0).unwrap();
        assert_eq!(CivilTime::parse("1973-01-01T23:30").unwrap(), want);
        assert_eq!(CivilTime::parse("1973-01-01T23:30:00").unwrap(), want);
        assert_eq!(CivilTime::parse("1973-01-01 23:30").unwrap(), want);
        assert_eq!(CivilTime::parse("1973-01-01T23:30:00Z").unwrap(), want);
        assert_eq!(CivilTime::parse("1973-01-01T23:30:00+08:00").unwrap(), want);
    }

    #[test]
    fn parse_date_only_is_midnight() {
        let t: CivilTime = "2000-01-01".parse().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (0, 0, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(CivilTime::parse("not a date"), Err(TimeError::Parse(_))));
        assert!(CivilTime::parse("2023-02-30T10:00").is_err());
        assert!(CivilTime::parse("2023-01-01T25:00").is_err());
    }

    #[test]
    fn display_round_trip() {
        let t = CivilTime::new(2024, 6, 15, 23, 5, 9).unwrap();
        assert_eq!(t.to_string(), "2024-06-15T23:05:09");
        assert_eq!(t.to_string().parse::<CivilTime>().unwrap(), t);
    }

    #[test]
    fn shift_days_crosses_year() {
        let t = CivilTime::new(1972, 12, 31, 23, 30, 0).unwrap();
        let next = t.shift_days(1).unwrap();
        assert_eq!((next.year(), next.month(), next.day()), (1973, 1, 1));
        assert_eq!(next.hour(), 23);
    }

    #[test]
    fn shift_seconds_negative() {
        let t = CivilTime::new(2024, 1, 1, 0, 10, 0).unwrap();
        let back = t.shift_seconds(-15 * 60).unwrap();
        assert_eq!(back, CivilTime::new(2023, 12, 31, 23, 55, 0).unwrap());
    }

    #[test]
    fn julian_date_with_offset() {
        // 2000-01-01 20:00 at UTC+8 is 12:00 UT.
        let t = CivilTime::new(2000, 1, 1, 20, 0, 0).unwrap();
        assert!((t.julian_date_ut(480) - julian::J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn from_day_number_matches_fields() {
        let t = CivilTime::from_day_number(2_451_545, 6, 0, 0).unwrap();
        assert_eq!(t, CivilTime::new(2000, 1, 1, 6, 0, 0).unwrap());
    }
}
