//! `TransitFinder`: the public transit and retrograde search surface.

use jyotish_ephemeris::{Ephemeris, FringePolicy, JyotishError, Position};
use jyotish_time::{Duration, Instant, Interval, Unit};
use jyotish_zodiac::{Body, DegreeRange, HouseRange};

use crate::fix_edges::fix_edges;
use crate::fringe::collapse_fringes;
use crate::limit::TransitLimit;
use crate::retrograde;
use crate::shard::stitch;
use crate::sweep::baseline_sweep;

/// Adaptive-sampling, bisection-refined transit and retrograde search over
/// one [`Ephemeris`].
pub struct TransitFinder<'a> {
    ephemeris: &'a Ephemeris,
}

impl<'a> TransitFinder<'a> {
    pub fn new(ephemeris: &'a Ephemeris) -> Self {
        Self { ephemeris }
    }

    /// Every interval during which `body`'s longitude lies in `range`,
    /// bounded by `limit`.
    pub fn transits(
        &self,
        body: Body,
        range: DegreeRange,
        limit: TransitLimit,
    ) -> Result<Vec<Interval>, JyotishError> {
        let (search_interval, max_count, backward) = self.resolve_limit(body, limit)?;

        let config = self.ephemeris.config().clone();
        let place = self.ephemeris.place().clone();
        let birth = self.ephemeris.birth_utc();
        let resolution = config.transit_resolution;
        let fringe_policy = config.transit_fringe_policy;
        let sampling = Duration::from_seconds(body.table().min_time(range.size));

        let raw: Vec<Interval> = jyotish_parallel::map_reduce(
            birth,
            &place,
            &config,
            search_interval,
            sampling,
            move |adapter: &Ephemeris, shard: Interval| -> Result<Vec<Interval>, JyotishError> {
                let predicate = move |position: &Position| range.contains(position.longitude_deg);
                let swept = baseline_sweep(adapter, body, shard, sampling, &predicate, resolution)?;
                fix_edges(adapter, body, swept, range, resolution)
            },
            stitch,
        )?;

        let max_interfringe =
            Duration::from_seconds(2.0 * body.table().synodic_period_seconds / 378.0);
        let collapsed = collapse_fringes(raw, fringe_policy, max_interfringe);

        Ok(match max_count {
            // Forward counts keep the earliest `n`; backward counts search a
            // window ending at `from`, so the intervals nearest `from` are
            // the *last* `n` of the chronologically sorted list.
            Some(n) if backward => {
                let n = n as usize;
                let len = collapsed.len();
                collapsed.into_iter().skip(len.saturating_sub(n)).collect()
            }
            Some(n) => collapsed.into_iter().take(n as usize).collect(),
            None => collapsed,
        })
    }

    /// Convenience overload of [`Self::transits`] taking a `HouseRange`,
    /// delegating via its `DegreeRange` projection.
    pub fn transits_in_houses(
        &self,
        body: Body,
        range: HouseRange,
        limit: TransitLimit,
    ) -> Result<Vec<Interval>, JyotishError> {
        self.transits(body, range.degrees(), limit)
    }

    /// Every maximal retrograde interval of `body` overlapping `overlapping`.
    pub fn retrogrades(
        &self,
        body: Body,
        overlapping: Interval,
        policy: Option<FringePolicy>,
    ) -> Result<Vec<Interval>, JyotishError> {
        let policy = policy.unwrap_or(self.ephemeris.config().retrograde_fringe_policy);
        retrograde::retrogrades(self.ephemeris, body, overlapping, policy)
    }

    /// The first transit of `body` into `range` on or after this
    /// ephemeris's birth instant.
    pub fn next_transit(
        &self,
        body: Body,
        range: HouseRange,
    ) -> Result<Option<Interval>, JyotishError> {
        let limit = TransitLimit::Count {
            from: self.ephemeris.birth_utc(),
            count: 1,
        };
        Ok(self.transits_in_houses(body, range, limit)?.into_iter().next())
    }

    /// The most recent transit of `body` into `range` before this
    /// ephemeris's birth instant.
    pub fn previous_transit(
        &self,
        body: Body,
        range: HouseRange,
    ) -> Result<Option<Interval>, JyotishError> {
        let limit = TransitLimit::Count {
            from: self.ephemeris.birth_utc(),
            count: -1,
        };
        Ok(self.transits_in_houses(body, range, limit)?.into_iter().last())
    }

    /// Every transit of `body` into `range` across a 120-year lifetime
    /// starting at birth, matching the Vimshottari cycle's span.
    pub fn lifetime_transits(
        &self,
        body: Body,
        range: HouseRange,
    ) -> Result<Vec<Interval>, JyotishError> {
        let lifetime = Duration::from_seconds(120.0 * Unit::Year.seconds());
        let birth = self.ephemeris.birth_utc();
        let limit = TransitLimit::Duration(Interval::new(birth, birth + lifetime));
        self.transits_in_houses(body, range, limit)
    }

    fn resolve_limit(
        &self,
        body: Body,
        limit: TransitLimit,
    ) -> Result<(Interval, Option<i32>, bool), JyotishError> {
        match limit {
            TransitLimit::Duration(interval) => Ok((interval, None, false)),
            TransitLimit::Count { from, count } => {
                if count == 0 {
                    return Err(JyotishError::InvalidInput(
                        "TransitLimit::Count count must be non-zero".to_string(),
                    ));
                }
                let window_seconds = body.table().avg_time((count.unsigned_abs() as f64 + 2.0) * 360.0);
                let window = Duration::from_seconds(window_seconds);
                let backward = count < 0;
                let interval = if !backward {
                    Interval::new(from, from + window)
                } else {
                    Interval::new(from - window, from)
                };
                Ok((interval, Some(count.abs()), backward))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_ephemeris::{Config, Place};
    use jyotish_zodiac::House;

    fn ujjain_ephemeris() -> Ephemeris {
        let birth = Instant::from_utc_ymd_hms(2020, 1, 1, 0, 0, 0.0);
        let place = Place::new("Ujjain", 0, 23.293, 75.626, 478.0);
        Ephemeris::new(birth, place, Config::default()).unwrap()
    }

    #[test]
    fn previous_transit_is_nearest_to_birth_not_oldest_in_window() {
        let ephemeris = ujjain_ephemeris();
        let finder = TransitFinder::new(&ephemeris);
        let range = HouseRange::new(House::from_ordinal(0), 1);
        let birth = ephemeris.birth_utc();

        let limit = TransitLimit::Count { from: birth, count: -3 };
        let window = finder
            .transits_in_houses(Body::Moon, range, limit)
            .unwrap();
        let nearest = finder.previous_transit(Body::Moon, range).unwrap().unwrap();

        assert_eq!(Some(&nearest), window.last());
        assert!(window.iter().all(|t| t.start <= nearest.start));
    }

    #[test]
    fn zero_count_limit_is_rejected() {
        let ephemeris = ujjain_ephemeris();
        let finder = TransitFinder::new(&ephemeris);
        let range = HouseRange::new(House::from_ordinal(0), 1);
        let limit = TransitLimit::Count {
            from: ephemeris.birth_utc(),
            count: 0,
        };
        let result = finder.transits_in_houses(Body::Mars, range, limit);
        assert!(matches!(result, Err(JyotishError::InvalidInput(_))));
    }
}
