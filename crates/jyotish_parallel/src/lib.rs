//! Parallel map-reduce over a time range, sharded across worker threads.
//!
//! The oracle keeps mutable per-thread state, so sharing one [`Ephemeris`]
//! across threads is unsound. Each worker therefore constructs its own
//! adapter from the same `(birth, place, config)` triple before running the
//! caller's `map` closure on its shard, and results are reduced strictly in
//! shard order — not completion order — so the result (and which shard's
//! error surfaces, if any fail) never depends on thread scheduling.

use std::sync::Arc;

use jyotish_ephemeris::{Config, Ephemeris, JyotishError, Place};
use jyotish_time::{Duration, Instant, Interval};

/// Split `range` into `shard_count` contiguous, equal-duration sub-intervals
/// covering it exactly, in order.
pub fn shard_interval(range: Interval, shard_count: usize) -> Vec<Interval> {
    let shard_count = shard_count.max(1);
    let total = range.duration().as_seconds();
    let mut shards = Vec::with_capacity(shard_count);
    let mut cursor = range.start;
    for i in 0..shard_count {
        let shard_end = if i + 1 == shard_count {
            range.end
        } else {
            range.start + Duration::from_seconds(total * (i + 1) as f64 / shard_count as f64)
        };
        shards.push(Interval::new(cursor, shard_end));
        cursor = shard_end;
    }
    shards
}

/// Run `map` over `range`, sharded across `config.concurrency` worker
/// threads, and combine the per-shard results with `reduce`.
///
/// `sampling` is the resolution `map` will step at internally; below
/// `config.concurrency_threshold` samples, this runs `map` once inline on
/// the whole range rather than paying for thread spawn overhead on a
/// handful of points.
///
/// Errors propagate from the lowest-indexed failing shard, regardless of
/// which worker finishes first.
pub fn map_reduce<T, M, R, W>(
    birth_utc: Instant,
    place: &Place,
    config: &Config,
    range: Interval,
    sampling: Duration,
    map: M,
    reduce: R,
) -> Result<W, JyotishError>
where
    M: Fn(&Ephemeris, Interval) -> Result<T, JyotishError> + Send + Sync + 'static,
    R: FnOnce(Vec<T>) -> W,
    T: Send + 'static,
{
    let sample_count = range.duration().as_seconds() / sampling.as_seconds().abs().max(1e-9);
    let shard_count = config.concurrency.max(1);

    if shard_count == 1 || (sample_count as u64) < config.concurrency_threshold {
        log::debug!(
            "map_reduce: running inline, {sample_count} samples below threshold {}",
            config.concurrency_threshold
        );
        let ephemeris = Ephemeris::new(birth_utc, place.clone(), config.clone())?;
        let result = map(&ephemeris, range)?;
        return Ok(reduce(vec![result]));
    }

    let shards = shard_interval(range, shard_count);
    let map = Arc::new(map);

    let handles: Vec<_> = shards
        .into_iter()
        .map(|shard| {
            let birth_utc = birth_utc;
            let place = place.clone();
            let config = config.clone();
            let map = Arc::clone(&map);
            std::thread::spawn(move || -> Result<T, JyotishError> {
                let ephemeris = Ephemeris::new(birth_utc, place, config)?;
                map(&ephemeris, shard)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    let mut first_error: Option<JyotishError> = None;
    for handle in handles {
        match handle.join() {
            Ok(Ok(value)) => results.push(Some(value)),
            Ok(Err(err)) => {
                results.push(None);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
            Err(_) => {
                results.push(None);
                if first_error.is_none() {
                    first_error = Some(JyotishError::Oracle(
                        "map_reduce worker thread panicked".to_string(),
                    ));
                }
            }
        }
    }

    if let Some(err) = first_error {
        return Err(err);
    }

    let results: Vec<T> = results.into_iter().map(|r| r.expect("checked above")).collect();
    Ok(reduce(results))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32) -> Instant {
        Instant::from_utc_ymd_hms(2020, 1, day, 0, 0, 0.0)
    }

    #[test]
    fn shard_interval_covers_range_contiguously() {
        let range = Interval::new(at(1), at(11));
        let shards = shard_interval(range, 5);
        assert_eq!(shards.len(), 5);
        assert_eq!(shards.first().unwrap().start, range.start);
        assert_eq!(shards.last().unwrap().end, range.end);
        for pair in shards.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn shard_interval_single_shard_is_whole_range() {
        let range = Interval::new(at(1), at(11));
        let shards = shard_interval(range, 1);
        assert_eq!(shards, vec![range]);
    }

    #[test]
    fn map_reduce_preserves_shard_order_in_reduce() {
        let place = Place::new("Ujjain", 0, 23.293, 75.626, 478.0);
        let mut config = Config::default().with_concurrency(4);
        config.concurrency_threshold = 1;
        let range = Interval::new(at(1), at(9));

        let result = map_reduce(
            at(1),
            &place,
            &config,
            range,
            Duration::from_days(1.0),
            |_ephemeris, shard| Ok(shard.start),
            |starts| starts,
        )
        .unwrap();

        let mut sorted = result.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(result, sorted, "reduce input must already be in shard order");
    }

    #[test]
    fn map_reduce_falls_back_to_inline_below_threshold() {
        let place = Place::new("Ujjain", 0, 23.293, 75.626, 478.0);
        let mut config = Config::default().with_concurrency(4);
        config.concurrency_threshold = 1_000_000;
        let range = Interval::new(at(1), at(2));

        let result: Vec<Interval> = map_reduce(
            at(1),
            &place,
            &config,
            range,
            Duration::from_days(1.0),
            |_ephemeris, shard| Ok(shard),
            |shards| shards,
        )
        .unwrap();

        assert_eq!(result, vec![range]);
    }
}
