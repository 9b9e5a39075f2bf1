//! Retrograde-aware edge correction.
//!
//! A raw transit edge found by [`crate::sweep::baseline_sweep`] can be wrong
//! when the body executes a retrograde loop that partially exits and
//! re-enters the target arc near that edge. This re-samples densely around
//! each edge, and if a genuine retrograde sub-interval turns up there,
//! rebuilds the transit from an augmented, forced sample set instead of
//! trusting the original uniform stride.

use jyotish_ephemeris::{Ephemeris, JyotishError};
use jyotish_time::{Duration, Instant, Interval, Unit};
use jyotish_zodiac::{Body, DegreeRange};

use crate::sweep::{baseline_sweep, walk_samples};

fn retrograde_predicate(body: Body) -> impl Fn(&jyotish_ephemeris::Position) -> bool {
    let forward_is_negative = !matches!(body, Body::NorthNode | Body::SouthNode);
    move |position: &jyotish_ephemeris::Position| {
        let speed = position.speed_deg_per_day.unwrap_or(0.0);
        if forward_is_negative {
            speed < 0.0
        } else {
            speed > 0.0
        }
    }
}

/// Correct the edges of each raw transit interval in `transits` for
/// retrograde-induced mis-sampling, returning the corrected interval list
/// (one raw transit may split into several, or stay as-is).
pub fn fix_edges(
    ephemeris: &Ephemeris,
    body: Body,
    transits: Vec<Interval>,
    range: DegreeRange,
    resolution: Unit,
) -> Result<Vec<Interval>, JyotishError> {
    let table = body.table();
    let retrograde_duration = table.retrograde_duration_seconds;
    if retrograde_duration <= 0.0 {
        return Ok(transits);
    }

    let window = Duration::from_seconds(2.0 * retrograde_duration);
    if table.max_degrees(window.as_seconds()) > 360.0 - range.size + 6.0 {
        log::warn!(
            "fix_edges: insufficient room between transits of {} to correct edges safely; skipping",
            body.name()
        );
        return Ok(transits);
    }

    let predicate = move |position: &jyotish_ephemeris::Position| range.contains(position.longitude_deg);
    let retro_predicate = retrograde_predicate(body);

    let mut corrected = Vec::with_capacity(transits.len());
    for transit in transits {
        let start_windows = [transit.before_start(window), transit.from_start(window)];
        let end_windows = [transit.before_end(window), transit.from_end(window)];

        let mut forced: Vec<Instant> = Vec::new();
        let mut any_found = false;

        for (edge, windows) in [(transit.start, &start_windows), (transit.end, &end_windows)] {
            let mut edge_found = false;
            for w in windows {
                let retro_step = Duration::from_seconds(retrograde_duration / 2.0);
                let retro_intervals = baseline_sweep(ephemeris, body, *w, retro_step, &retro_predicate, resolution)?;
                for retro in retro_intervals {
                    edge_found = true;
                    forced.push(retro.start);
                    forced.push(retro.end);
                    let midpoint_offset = Duration::from_seconds(retro.duration().as_seconds() * 0.5);
                    forced.push(retro.start + midpoint_offset);
                }
            }
            if edge_found {
                any_found = true;
                forced.push(edge);
                forced.push(edge - window - Duration::from_days(1.0));
                forced.push(edge + window + Duration::from_days(1.0));
            }
        }

        if !any_found {
            corrected.push(transit);
            continue;
        }

        forced.push(transit.start);
        forced.push(transit.end);
        forced.sort_by(|a, b| a.partial_cmp(b).expect("instants are totally ordered"));
        forced.dedup();

        let samples = ephemeris.positions(body, &forced)?;
        let rebuilt = walk_samples(ephemeris, body, &samples, &predicate, resolution)?;
        corrected.extend(rebuilt);
    }

    Ok(corrected)
}
