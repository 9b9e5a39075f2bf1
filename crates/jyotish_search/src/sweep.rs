//! Baseline adaptive-sampling sweep and bisection edge refinement.
//!
//! Both functions are generic over a `Position -> bool` predicate, the seam
//! named in the design notes as the "polymorphic predicate": a longitude
//! range test for transit search, a speed-sign test for retrograde search.

use jyotish_ephemeris::{Ephemeris, JyotishError, Position};
use jyotish_time::{granularity_of, Duration, Instant, Interval, Unit};
use jyotish_zodiac::Body;

/// Walk `body`'s position across `interval` at stride `step`, emitting one
/// `Interval` per run of samples where `predicate` holds, with both edges
/// refined to `resolution` by bisection.
pub fn baseline_sweep(
    ephemeris: &Ephemeris,
    body: Body,
    interval: Interval,
    step: Duration,
    predicate: &impl Fn(&Position) -> bool,
    resolution: Unit,
) -> Result<Vec<Interval>, JyotishError> {
    let mut samples = ephemeris.positions_during(body, interval, step)?;
    if samples.last().map(|(t, _)| *t) != Some(interval.end) {
        let end_position = ephemeris.position(body, interval.end)?;
        samples.push((interval.end, end_position));
    }
    walk_samples(ephemeris, body, &samples, predicate, resolution)
}

/// Run the baseline sweep walk over an already-fetched, chronologically sorted
/// sample list, rather than striding `interval` uniformly. Used both by
/// [`baseline_sweep`] and by `fix_edges`'s rebuild over a forced,
/// irregularly-spaced sample set.
pub fn walk_samples(
    ephemeris: &Ephemeris,
    body: Body,
    samples: &[(Instant, Position)],
    predicate: &impl Fn(&Position) -> bool,
    resolution: Unit,
) -> Result<Vec<Interval>, JyotishError> {
    let mut results = Vec::new();
    let mut run_start: Option<Instant> = None;

    for pair in samples.windows(2) {
        let (t_prev, pos_prev) = pair[0];
        let (t_curr, pos_curr) = pair[1];
        let held_prev = predicate(&pos_prev);
        let held_curr = predicate(&pos_curr);

        if !held_prev && held_curr && run_start.is_none() {
            let refined = refine_edge(ephemeris, body, predicate, t_prev, t_curr, resolution)?;
            run_start = Some(refined.unwrap_or(t_curr));
        } else if held_prev && !held_curr {
            if let Some(start) = run_start.take() {
                let negated = |position: &Position| !predicate(position);
                let refined = refine_edge(ephemeris, body, &negated, t_prev, t_curr, resolution)?;
                let end = refined.unwrap_or(t_curr);
                results.push(Interval::new(start, end));
            }
        }
    }

    if let Some(start) = run_start {
        let last_instant = samples.last().expect("samples non-empty").0;
        results.push(Interval::new(start, last_instant));
    }

    Ok(results)
}

/// Refine the first instant in `[a, b]` where `predicate` holds, by
/// bisection to `resolution`. `a` is assumed not to satisfy `predicate` and
/// `b` (or some sample between them) is assumed to.
///
/// Terminates because each recursive call narrows to one stride of a
/// strictly finer calendar unit, and `resolution` is no coarser than
/// `Unit::Second`.
pub fn refine_edge(
    ephemeris: &Ephemeris,
    body: Body,
    predicate: &impl Fn(&Position) -> bool,
    a: Instant,
    b: Instant,
    resolution: Unit,
) -> Result<Option<Instant>, JyotishError> {
    let span = (b - a).as_seconds().abs();

    if span <= resolution.seconds() {
        let position_a = ephemeris.position(body, a)?;
        if predicate(&position_a) {
            return Ok(Some(a));
        }
        let position_b = ephemeris.position(body, b)?;
        if predicate(&position_b) {
            return Ok(Some(b));
        }
        return Ok(None);
    }

    let span_unit = granularity_of(span).unit;
    let step_unit = if span_unit > resolution {
        span_unit
    } else {
        span_unit.finer().unwrap_or(span_unit)
    };
    let step = Duration::from_seconds(step_unit.seconds());

    let mut samples = Vec::new();
    let mut cursor = a;
    while cursor < b {
        samples.push(cursor);
        cursor = cursor + step;
    }
    samples.push(b);

    let mut prior = a;
    for sample in samples {
        let position = ephemeris.position(body, sample)?;
        if predicate(&position) {
            if sample == prior {
                return Ok(Some(sample));
            }
            return refine_edge(ephemeris, body, predicate, prior, sample, resolution);
        }
        prior = sample;
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_ephemeris::{Config, Place};

    fn ujjain_ephemeris() -> Ephemeris {
        let birth = Instant::from_utc_ymd_hms(2020, 1, 1, 0, 0, 0.0);
        let place = Place::new("Ujjain", 0, 23.293, 75.626, 478.0);
        Ephemeris::new(birth, place, Config::default()).unwrap()
    }

    #[test]
    fn refine_edge_base_case_returns_b_when_only_b_holds() {
        let ephemeris = ujjain_ephemeris();
        let a = Instant::from_utc_ymd_hms(2020, 1, 1, 0, 0, 0.0);
        let b = a + Duration::from_seconds(30.0);
        let always_true = |_: &Position| true;
        let refined = refine_edge(&ephemeris, Body::Moon, &always_true, a, b, Unit::Minute).unwrap();
        assert_eq!(refined, Some(a));
    }
}
