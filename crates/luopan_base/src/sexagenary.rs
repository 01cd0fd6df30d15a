//! Sexagenary cycle arithmetic for years, months, days and hours.
//!
//! Each granularity has a reference point whose cycle index is fixed by
//! convention; a pillar is `(anchor + elapsed units) mod 60`. Hours are the
//! exception and come from the day stem through the five-rats table.
//!
//! Solar months are numbered from the 寅 month (0) to the 丑 month (11).
//! Deciding which solar year and month an instant falls in is the caller's
//! job; see the solar-term sources in `luopan_chart`.
//!
//! Clean-room: traditional 干支 reckoning, public domain.

use crate::pillar::Pillar;
use crate::stem::Stem;

/// Solar year whose pillar is 甲子.
pub const YEAR_ANCHOR: i32 = 1984;

/// Cycle index of the 寅 month of [`YEAR_ANCHOR`] (丙寅).
pub const MONTH_ANCHOR_INDEX: i64 = 2;

/// Julian day number of 2000-01-01.
pub const DAY_ANCHOR_JDN: i64 = 2_451_545;

/// Cycle index of 2000-01-01 (戊午).
pub const DAY_ANCHOR_INDEX: i64 = 54;

/// Hour pillars for each day stem (五鼠遁), indexed by `[day_stem][hour_bucket]`.
///
/// 甲 and 己 days start at 甲子, 乙 and 庚 at 丙子, 丙 and 辛 at 戊子,
/// 丁 and 壬 at 庚子, 戊 and 癸 at 壬子.
pub const FIVE_RATS: [[Pillar; 12]; 10] = build_five_rats();

const fn build_five_rats() -> [[Pillar; 12]; 10] {
    let mut table = [[Pillar::from_cycle_index(0); 12]; 10];
    let mut stem = 0;
    while stem < 10 {
        let start = (stem % 5) * 12;
        let mut bucket = 0;
        while bucket < 12 {
            table[stem][bucket] = Pillar::from_cycle_index((start + bucket) as u8);
            bucket += 1;
        }
        stem += 1;
    }
    table
}

/// Year pillar of a solar year (years begin at 立春).
pub const fn year_pillar(solar_year: i32) -> Pillar {
    let idx = (solar_year as i64 - YEAR_ANCHOR as i64).rem_euclid(60);
    Pillar::from_cycle_index(idx as u8)
}

/// Month pillar for a solar year and solar month (0 = 寅 .. 11 = 丑).
///
/// Month indices above 11 wrap.
pub const fn month_pillar(solar_year: i32, solar_month: u8) -> Pillar {
    let elapsed = (solar_year as i64 - YEAR_ANCHOR as i64) * 12 + (solar_month % 12) as i64;
    let idx = (MONTH_ANCHOR_INDEX + elapsed).rem_euclid(60);
    Pillar::from_cycle_index(idx as u8)
}

/// Day pillar of the civil day with the given Julian day number.
pub const fn day_pillar(jdn: i64) -> Pillar {
    let idx = (DAY_ANCHOR_INDEX + jdn - DAY_ANCHOR_JDN).rem_euclid(60);
    Pillar::from_cycle_index(idx as u8)
}

/// Two-hour bucket (时辰) of a clock hour: 23:00–00:59 is 0 (子), 01:00–02:59 is 1 (丑) ...
pub const fn hour_bucket(hour: u32) -> u8 {
    (((hour % 24) + 1) % 24 / 2) as u8
}

/// Hour pillar from the governing day stem and the raw clock hour.
pub const fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    FIVE_RATS[day_stem.index() as usize][hour_bucket(hour) as usize]
}
