//! Calendar-unit ladder, Julian Day conversion, and interval arithmetic.
//!
//! This crate provides:
//! - Julian Day ↔ civil-calendar conversion with the proleptic Julian/Gregorian switch
//! - `Instant`/`Duration`, second-precision UTC wall time
//! - `Interval`, half-open time spans with the near-edge slices the transit
//!   sweep and edge-correction machinery rely on
//! - the coarse-to-fine `Unit` ladder and duration-to-granularity conversion

pub mod granularity;
pub mod instant;
pub mod interval;
pub mod julian;

pub use granularity::{granularity_of, Granularity, Unit, ALL_UNITS};
pub use instant::{Duration, Instant};
pub use interval::Interval;
pub use julian::{calendar_to_jd, jd_to_calendar, jd_to_gregorian_calendar, J2000_JD, SECONDS_PER_DAY};
