//! Symbolic vocabularies of the luopan engine.
//!
//! Closed enumerations for stems, branches, elements, pillars, mountains,
//! palaces, stars and ten gods, with the fixed lookup tables that relate
//! them. All tables are `const` and every function here is pure.

pub mod branch;
pub mod element;
pub mod mountain;
pub mod palace;
pub mod pillar;
pub mod sexagenary;
pub mod star;
pub mod stem;
pub mod ten_god;
pub mod util;

pub use branch::{ALL_BRANCHES, Branch, HiddenStem};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use mountain::{
    ALL_MOUNTAINS, MOUNTAIN_SECTORS, Mountain, MountainSector, SECTOR_SPAN_DEG, Yuan,
};
pub use palace::{ALL_PALACES, LUOSHU_PATH, Palace, Trigram};
pub use pillar::{Nayin, Pillar, SEXAGENARY_CYCLE};
pub use sexagenary::{
    DAY_ANCHOR_INDEX, DAY_ANCHOR_JDN, FIVE_RATS, MONTH_ANCHOR_INDEX, YEAR_ANCHOR, day_pillar,
    hour_bucket, hour_pillar, month_pillar, year_pillar,
};
pub use star::{ALL_STARS, FlightDirection, Star, fly};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
pub use util::{normalize_360, signed_offset};
