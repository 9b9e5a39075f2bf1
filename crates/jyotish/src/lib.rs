//! Indic (Vedic) astrological quantities from a birth event: transit
//! search, retrograde-period search, and Vimshottari daśā computation,
//! built on an external high-precision ephemeris oracle.
//!
//! This crate is a thin facade over the workspace: construct an
//! [`Ephemeris`] from a birth instant, a [`Place`], and a [`Config`], then
//! hand it to a [`TransitFinder`] or a [`DashaCalculator`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use jyotish::{Body, Config, DegreeRange, Ephemeris, Instant, Place, TransitFinder, TransitLimit};
//!
//! let birth = Instant::from_utc_ymd_hms(1977, 6, 9, 20, 50, 0.0);
//! let place = Place::new("Hyderabad", 0, 17.384_167, 78.456_389, 500.0);
//! let ephemeris = Ephemeris::new(birth, place, Config::default())?;
//!
//! let finder = TransitFinder::new(&ephemeris);
//! let window = TransitLimit::Duration(/* ... */);
//! let mars_in_aries = finder.transits(Body::Mars, DegreeRange::new(0.0, 30.0), window)?;
//! # Ok::<(), jyotish::JyotishError>(())
//! ```

pub use jyotish_dasha::{DashaCalculator, DashaForest, DashaMarker, DashaNode};
pub use jyotish_ephemeris::{
    Ayanamsha, Config, DashaDepth, Ephemeris, FringePolicy, JyotishError, Phase, Place, Position,
};
pub use jyotish_parallel::{map_reduce, shard_interval};
pub use jyotish_search::{TransitFinder, TransitLimit};
pub use jyotish_time::{granularity_of, Duration, Granularity, Instant, Interval, Unit};
pub use jyotish_zodiac::{
    Body, BodyTable, DegreeRange, House, HouseRange, Nakshatra, ALL_BODIES, ALL_NAKSHATRAS,
};
