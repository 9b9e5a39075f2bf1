//! `Ephemeris`: the adapter wrapping the external oracle.

use jyotish_time::{Duration, Instant, Interval};
use jyotish_zodiac::Body;

use crate::config::Config;
use crate::error::JyotishError;
use crate::oracle;
use crate::place::Place;
use crate::position::{Phase, Position};

/// Birth instant plus place plus configuration, owning a handle to the
/// oracle (in practice, the oracle's thread-local state, applied lazily on
/// first use from whichever thread this adapter lives on).
///
/// **Concurrency hazard**: the oracle hides mutable state in thread-local
/// storage. An `Ephemeris` must not be shared across threads; each
/// `map_reduce` worker (see `jyotish_parallel`) constructs its own.
pub struct Ephemeris {
    birth_utc: Instant,
    place: Place,
    config: Config,
}

impl Ephemeris {
    /// `birth_local` is a UTC instant already adjusted by the caller, or a
    /// "local" instant meant to be shifted by `place`'s UTC offset — this
    /// constructor performs that shift, converting to UTC by subtracting the
    /// timezone offset.
    pub fn new(birth_local: Instant, place: Place, config: Config) -> Result<Self, JyotishError> {
        config.validate()?;
        oracle::set_thread_options(config.ayanamsha, config.data_path.as_deref());
        let birth_utc = birth_local - Duration::from_seconds(place.utc_offset_seconds as f64);
        Ok(Self {
            birth_utc,
            place,
            config,
        })
    }

    pub fn birth_utc(&self) -> Instant {
        self.birth_utc
    }

    pub fn place(&self) -> &Place {
        &self.place
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Julian Day for `instant`, or the birth instant if `None`.
    ///
    /// `instant` already carries the canonical Julian Day under the
    /// proleptic Julian/Gregorian switch (`jyotish_time::julian`), since that
    /// is how every `Instant` in this crate is represented internally. This
    /// method re-decomposes that canonical value into *proleptic Gregorian*
    /// civil fields — the calendar the oracle itself always assumes — and
    /// hands those to the oracle, so the returned value is the oracle's own
    /// Julian Day rather than a value this crate invented independently.
    pub fn julian_day(&self, instant: Option<Instant>) -> Result<f64, JyotishError> {
        let instant = instant.unwrap_or(self.birth_utc);
        let (year, month, day_frac) = jyotish_time::jd_to_gregorian_calendar(instant.julian_day());
        let day = day_frac.floor() as i32;
        let hour_frac = day_frac.fract() * 24.0;
        Ok(oracle::julian_day_ut(year, month as i32, day, hour_frac))
    }

    /// Position of `body` at `instant`. `SouthNode` is derived from
    /// `NorthNode` by antipodal inversion.
    pub fn position(&self, body: Body, instant: Instant) -> Result<Position, JyotishError> {
        let jd = self.julian_day(Some(instant))?;
        let query_body = if body == Body::SouthNode {
            Body::NorthNode
        } else {
            body
        };
        let (lon, lat, dist, speed) = oracle::calc_body(
            query_body,
            jd,
            self.place.latitude_deg,
            self.place.longitude_deg,
            self.place.altitude_meters,
        )?;
        let position = Position::body(lon, lat, dist, speed);
        Ok(if body == Body::SouthNode {
            position.invert_node()
        } else {
            position
        })
    }

    /// Vectorised position lookup: one oracle call per instant, batched by
    /// the caller's choice of instants (used by `fix_edges` to
    /// issue exactly one batch call per forced-sample set).
    pub fn positions(
        &self,
        body: Body,
        instants: &[Instant],
    ) -> Result<Vec<(Instant, Position)>, JyotishError> {
        instants
            .iter()
            .map(|&instant| self.position(body, instant).map(|p| (instant, p)))
            .collect()
    }

    /// Sample `body`'s position across `interval`, striding by `every`,
    /// inclusive of `interval.start`, exclusive of `interval.end`.
    pub fn positions_during(
        &self,
        body: Body,
        interval: Interval,
        every: Duration,
    ) -> Result<Vec<(Instant, Position)>, JyotishError> {
        let mut instants = Vec::new();
        let mut cursor = interval.start;
        while cursor < interval.end {
            instants.push(cursor);
            cursor = cursor + every;
        }
        self.positions(body, &instants)
    }

    /// The ascendant's sidereal longitude at the birth instant.
    pub fn ascendant(&self) -> Result<Position, JyotishError> {
        let jd = self.julian_day(None)?;
        let lon = oracle::calc_ascendant(jd, self.place.latitude_deg, self.place.longitude_deg)?;
        Ok(Position::longitude_only(lon))
    }

    /// Illumination fraction of `body`, read from its elongation from the
    /// Sun at the birth instant. A thin accessor, matching the "single
    /// instant quantity" façades this crate deliberately does not offer: it is not a
    /// photometric model, only a convenience read.
    pub fn phase(&self, body: Body) -> Result<Phase, JyotishError> {
        let body_pos = self.position(body, self.birth_utc)?;
        let sun_pos = self.position(Body::Sun, self.birth_utc)?;
        let elongation = (body_pos.longitude_deg - sun_pos.longitude_deg)
            .to_radians()
            .cos();
        let illuminated_fraction = (1.0 - elongation) / 2.0;
        Ok(Phase {
            illuminated_fraction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ujjain() -> Place {
        Place::new("Ujjain", 19_800, 23.293, 75.626, 478.0)
    }

    #[test]
    fn julian_day_matches_known_gap_value() {
        let birth = Instant::from_utc_ymd_hms(1582, 10, 10, 0, 0, 0.0);
        let ephemeris = Ephemeris::new(birth, ujjain(), Config::default()).unwrap();
        let jd = ephemeris.julian_day(None).unwrap();
        assert!((jd - 2_299_165.5).abs() < 1e-6);
    }
}
