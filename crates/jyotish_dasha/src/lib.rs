//! Vimshottari daśā computation: a three-level nested schedule of planetary
//! rulerships over a 120-year lifespan, keyed off a birth-chart marker's
//! nakshatra.

pub mod calculator;
pub mod model;

pub use calculator::{DashaCalculator, DashaMarker};
pub use model::{DashaForest, DashaNode};
