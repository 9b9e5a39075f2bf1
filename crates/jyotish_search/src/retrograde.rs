//! Retrograde-period search: find every maximal interval in which
//! a body's longitudinal speed carries the retrograde sign.

use jyotish_ephemeris::{Ephemeris, FringePolicy, JyotishError, Position};
use jyotish_time::{Duration, Interval, Unit};
use jyotish_zodiac::Body;

use crate::fringe::collapse_fringes;
use crate::sweep::baseline_sweep;

fn retrograde_predicate(body: Body) -> impl Fn(&Position) -> bool {
    let forward_is_negative = !matches!(body, Body::NorthNode | Body::SouthNode);
    move |position: &Position| {
        let speed = position.speed_deg_per_day.unwrap_or(0.0);
        if forward_is_negative {
            speed < 0.0
        } else {
            speed > 0.0
        }
    }
}

/// Every maximal retrograde interval of `body` overlapping `range`.
/// Returns `[]` for bodies with no retrograde motion (Sun, Moon).
pub fn retrogrades(
    ephemeris: &Ephemeris,
    body: Body,
    range: Interval,
    policy: FringePolicy,
) -> Result<Vec<Interval>, JyotishError> {
    let table = body.table();
    let retrograde_duration = table.retrograde_duration_seconds;
    if retrograde_duration <= 0.0 {
        return Ok(Vec::new());
    }

    let r = Duration::from_seconds(retrograde_duration);
    let predicate = retrograde_predicate(body);

    // Expand the search range outward by R on any side where the predicate
    // already holds at the endpoint, so a retrograde episode straddling the
    // boundary is captured whole.
    let start_position = ephemeris.position(body, range.start)?;
    let end_position = ephemeris.position(body, range.end)?;
    let expanded_start = if predicate(&start_position) {
        range.start - r
    } else {
        range.start
    };
    let expanded_end = if predicate(&end_position) {
        range.end + r
    } else {
        range.end
    };
    let expanded = Interval::new(expanded_start, expanded_end);

    let coarse_step = Duration::from_seconds(retrograde_duration / 2.0);
    let day_resolution = Unit::Day;
    let candidates = baseline_sweep(ephemeris, body, expanded, coarse_step, &predicate, day_resolution)?;

    let synodic_period = table.synodic_period_seconds;
    let max_fringe = Duration::from_seconds(2.0 * synodic_period / 378.0);
    let hour = Duration::from_seconds(3_600.0);

    let mut episodes = Vec::new();
    for candidate in candidates {
        if candidate.duration().as_seconds() < retrograde_duration / 2.0 {
            // Brief speed-sign flicker, not a genuine episode.
            continue;
        }

        let windows = [
            candidate.before_start(max_fringe),
            candidate.from_start(max_fringe),
            candidate.before_end(max_fringe),
            candidate.from_end(max_fringe),
        ];

        let mut refined = Vec::new();
        for w in windows {
            refined.extend(baseline_sweep(ephemeris, body, w, hour, &predicate, Unit::Hour)?);
        }

        if refined.is_empty() {
            episodes.push(candidate);
        } else {
            refined.sort_by(|a, b| a.start.partial_cmp(&b.start).expect("instants are totally ordered"));
            episodes.extend(refined);
        }
    }

    episodes.sort_by(|a, b| a.start.partial_cmp(&b.start).expect("instants are totally ordered"));
    Ok(collapse_fringes(episodes, policy, max_fringe))
}
