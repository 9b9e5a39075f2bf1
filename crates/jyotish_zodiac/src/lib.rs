//! Zodiac model: houses, nakshatras, degree ranges, and the static body
//! speed/period table.

pub mod body;
pub mod degree_range;
pub mod house;
pub mod house_range;
pub mod nakshatra;
pub mod util;

pub use body::{Body, BodyTable, ALL_BODIES};
pub use degree_range::DegreeRange;
pub use house::{House, HOUSE_NAMES};
pub use house_range::HouseRange;
pub use nakshatra::{vimshottari_cycle, Nakshatra, ALL_NAKSHATRAS, NAKSHATRA_SPAN_ARCSEC, NAKSHATRA_SPAN_DEG};
