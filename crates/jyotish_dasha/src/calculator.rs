//! `DashaCalculator`: Vimshottari daśā computation.

use jyotish_ephemeris::{DashaDepth, Ephemeris, JyotishError};
use jyotish_time::{Duration, Instant, Interval, Unit};
use jyotish_zodiac::{vimshottari_cycle, Body, Nakshatra, NAKSHATRA_SPAN_ARCSEC};

use crate::model::{DashaForest, DashaNode};

/// The birth-chart point whose nakshatra seeds the Vimshottari cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashaMarker {
    Planet(Body),
    Ascendant,
}

impl Default for DashaMarker {
    /// The conventional marker: the Moon's nakshatra at birth.
    fn default() -> Self {
        DashaMarker::Planet(Body::Moon)
    }
}

/// Vimshottari daśā computation over one [`Ephemeris`].
pub struct DashaCalculator<'a> {
    ephemeris: &'a Ephemeris,
}

impl<'a> DashaCalculator<'a> {
    pub fn new(ephemeris: &'a Ephemeris) -> Self {
        Self { ephemeris }
    }

    /// `(prenatal, postnatal)` daśā forests, keyed off `starting`'s
    /// nakshatra at birth (default: the Moon's).
    pub fn vimshottari(
        &self,
        starting: Option<DashaMarker>,
    ) -> Result<(DashaForest, DashaForest), JyotishError> {
        let marker = starting.unwrap_or_default();
        let longitude = self.marker_longitude(marker)?;
        let (nakshatra, deg, min, sec) = Nakshatra::locate(longitude);
        let ruler = nakshatra.ruling_body();

        let elapsed_angle_seconds = deg * 3_600.0 + min * 60.0 + sec;
        let lifetime = Duration::from_seconds(120.0 * Unit::Year.seconds());
        let elapsed_time = Duration::from_seconds(
            (elapsed_angle_seconds / NAKSHATRA_SPAN_ARCSEC)
                * ruler.table().vimshottari_ratio
                * lifetime.as_seconds(),
        );

        let birth = self.ephemeris.birth_utc();
        let max_depth = self.ephemeris.config().max_dasha_depth;

        let postnatal_interval = Interval::new(birth, birth + lifetime - elapsed_time);
        let mut postnatal_arena = Vec::new();
        subdivide(
            &mut postnatal_arena,
            postnatal_interval,
            ruler,
            elapsed_time,
            DashaDepth::Maha,
            max_depth,
            None,
        );
        let postnatal = DashaForest::from_arena(postnatal_arena);

        let prenatal_start = birth - elapsed_time;
        let prenatal_full_interval = Interval::new(prenatal_start, prenatal_start + lifetime);
        let mut prenatal_arena = Vec::new();
        subdivide(
            &mut prenatal_arena,
            prenatal_full_interval,
            ruler,
            Duration::from_seconds(0.0),
            DashaDepth::Maha,
            max_depth,
            None,
        );
        let prenatal_full = DashaForest::from_arena(prenatal_arena);
        let prenatal = prenatal_full.overlapping(Interval::new(prenatal_start, birth));

        Ok((prenatal, postnatal))
    }

    /// The postnatal forest filtered to nodes (recursively) overlapping
    /// `range`.
    pub fn vimshottari_overlapping(
        &self,
        range: Interval,
        starting: Option<DashaMarker>,
    ) -> Result<DashaForest, JyotishError> {
        let (_, postnatal) = self.vimshottari(starting)?;
        Ok(postnatal.overlapping(range))
    }

    fn marker_longitude(&self, marker: DashaMarker) -> Result<f64, JyotishError> {
        match marker {
            DashaMarker::Planet(body) => {
                Ok(self.ephemeris.position(body, self.ephemeris.birth_utc())?.longitude_deg)
            }
            DashaMarker::Ascendant => Ok(self.ephemeris.ascendant()?.longitude_deg),
        }
    }
}

/// Subdivide `interval` into successive cycle periods starting at
/// `starting`, with `elapsed` seconds of the cycle already consumed before
/// `interval.start` (non-zero only for the very first emitted period:
/// subsequent periods in the walk always start fresh). Recurses one level
/// deeper until `depth == max_depth`; clamping on `min` rather than `max`
/// is what makes this terminate.
fn subdivide(
    arena: &mut Vec<DashaNode>,
    interval: Interval,
    starting: Body,
    elapsed: Duration,
    depth: DashaDepth,
    max_depth: DashaDepth,
    parent: Option<usize>,
) {
    let cycle = vimshottari_cycle();
    let start_idx = cycle
        .iter()
        .position(|&b| b == starting)
        .expect("starting body is always a member of the Vimshottari cycle");
    let total = interval.duration().as_seconds() + elapsed.as_seconds();

    // Walk the cycle from `starting`, subtracting each planet's full period
    // from the residual until it goes non-positive: that planet is the
    // first to surface, with an "emerging" duration equal to the residual's
    // magnitude. A planet whose whole period is consumed by the residual
    // (already fully elapsed before the interval starts) is skipped.
    let mut residual = elapsed.as_seconds();
    let mut offset = 0usize;
    let first_duration = loop {
        let planet = cycle[(start_idx + offset) % cycle.len()];
        let full = planet.table().vimshottari_ratio * total;
        residual -= full;
        if residual <= 0.0 {
            break -residual;
        }
        offset += 1;
    };

    let mut cursor = interval.start;
    let mut first = true;
    while cursor < interval.end {
        let planet = cycle[(start_idx + offset) % cycle.len()];
        let full = planet.table().vimshottari_ratio * total;
        let nominal = if first { first_duration } else { full };
        let remaining = (interval.end - cursor).as_seconds();
        let duration_seconds = nominal.min(remaining);

        let end = cursor + Duration::from_seconds(duration_seconds);
        let period = Interval::new(cursor, end);

        let node_index = arena.len();
        arena.push(DashaNode {
            period,
            planet,
            depth,
            children: Vec::new(),
            parent,
        });
        if let Some(parent_index) = parent {
            arena[parent_index].children.push(node_index);
        }

        if depth != max_depth {
            let child_elapsed = if first { elapsed } else { Duration::from_seconds(0.0) };
            subdivide(arena, period, planet, child_elapsed, depth.deeper(), max_depth, Some(node_index));
        } else if depth != DashaDepth::Pratyantar {
            log::debug!(
                "dasha recursion clamped at {depth:?} (configured max), planet={planet:?}, period={period:?}"
            );
        }

        cursor = end;
        first = false;
        offset += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_ephemeris::{Config, Place};

    fn ujjain_ephemeris(max_depth: DashaDepth) -> Ephemeris {
        let birth = Instant::from_utc_ymd_hms(2020, 1, 1, 0, 0, 0.0);
        let place = Place::new("Ujjain", 0, 23.293, 75.626, 478.0);
        let config = Config::default().with_max_dasha_depth(max_depth);
        Ephemeris::new(birth, place, config).unwrap()
    }

    #[test]
    fn mahadasha_completeness_across_prenatal_and_postnatal() {
        let ephemeris = ujjain_ephemeris(DashaDepth::Maha);
        let calculator = DashaCalculator::new(&ephemeris);
        let (prenatal, postnatal) = calculator.vimshottari(None).unwrap();

        let lifetime_seconds = 120.0 * Unit::Year.seconds();
        let total = prenatal.total_duration_seconds() + postnatal.total_duration_seconds();
        assert!((total - lifetime_seconds).abs() < 1e-3, "total={total}");
    }

    #[test]
    fn antardasha_children_sum_to_parent_duration() {
        let ephemeris = ujjain_ephemeris(DashaDepth::Antar);
        let calculator = DashaCalculator::new(&ephemeris);
        let (_, postnatal) = calculator.vimshottari(None).unwrap();

        for root in postnatal.roots() {
            let children: Vec<_> = postnatal.children_of(root).collect();
            let child_sum: f64 = children.iter().map(|c| c.period.duration().as_seconds()).sum();
            let parent_duration = root.period.duration().as_seconds();
            assert!(
                (child_sum - parent_duration).abs() < 1e-6,
                "parent={parent_duration} children={child_sum}"
            );
        }
    }

    #[test]
    fn child_cycle_starts_at_parent_planet() {
        let ephemeris = ujjain_ephemeris(DashaDepth::Antar);
        let calculator = DashaCalculator::new(&ephemeris);
        let (_, postnatal) = calculator.vimshottari(None).unwrap();

        let root = postnatal.roots().next().unwrap();
        let first_child = postnatal.children_of(root).next().unwrap();
        assert_eq!(first_child.planet, root.planet);
    }

    #[test]
    fn depth_clamps_at_configured_max() {
        let ephemeris = ujjain_ephemeris(DashaDepth::Maha);
        let calculator = DashaCalculator::new(&ephemeris);
        let (_, postnatal) = calculator.vimshottari(None).unwrap();
        let root = postnatal.roots().next().unwrap();
        assert!(postnatal.children_of(root).next().is_none());
    }

    #[test]
    fn vimshottari_overlapping_filters_to_range() {
        let ephemeris = ujjain_ephemeris(DashaDepth::Antar);
        let calculator = DashaCalculator::new(&ephemeris);
        let birth = ephemeris.birth_utc();
        let window = Interval::new(birth, birth + Duration::from_days(365.0));
        let filtered = calculator.vimshottari_overlapping(window, None).unwrap();
        for root in filtered.roots() {
            assert!(root.period.intersects(window) || root.period.start == window.start);
        }
    }
}
