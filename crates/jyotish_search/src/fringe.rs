//! Fringe-policy collapsing: group sub-intervals separated by small
//! gaps into clusters, then emit one interval per cluster per the policy.

use jyotish_ephemeris::FringePolicy;
use jyotish_time::{Duration, Interval};

/// Collapse `intervals` (assumed sorted, non-overlapping, chronological)
/// into clusters whose inter-gap does not exceed `max_interfringe`, emitting
/// one interval per cluster according to `policy`.
pub fn collapse_fringes(
    intervals: Vec<Interval>,
    policy: FringePolicy,
    max_interfringe: Duration,
) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }

    let mut clusters: Vec<Vec<Interval>> = Vec::new();
    for interval in intervals {
        let joins_last = clusters
            .last()
            .and_then(|cluster| cluster.last())
            .is_some_and(|last: &Interval| {
                (interval.start - last.end).as_seconds() <= max_interfringe.as_seconds()
            });

        if joins_last {
            clusters.last_mut().expect("checked above").push(interval);
        } else {
            clusters.push(vec![interval]);
        }
    }

    clusters
        .into_iter()
        .flat_map(|cluster| collapse_cluster(cluster, policy))
        .collect()
}

fn collapse_cluster(cluster: Vec<Interval>, policy: FringePolicy) -> Vec<Interval> {
    match policy {
        FringePolicy::Strict => cluster,
        FringePolicy::Largest => {
            let largest = cluster
                .into_iter()
                .max_by(|a, b| {
                    a.duration()
                        .as_seconds()
                        .partial_cmp(&b.duration().as_seconds())
                        .expect("durations are finite")
                })
                .expect("cluster is non-empty");
            vec![largest]
        }
        FringePolicy::Covering => {
            let start = cluster.first().expect("cluster is non-empty").start;
            let end = cluster.last().expect("cluster is non-empty").end;
            vec![Interval::new(start, end)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_time::Instant;

    fn at(day: u32, hour: u32) -> Instant {
        Instant::from_utc_ymd_hms(2020, 1, day, hour, 0, 0.0)
    }

    #[test]
    fn strict_emits_every_subinterval() {
        let intervals = vec![Interval::new(at(1, 0), at(1, 1)), Interval::new(at(1, 2), at(1, 3))];
        let result = collapse_fringes(intervals.clone(), FringePolicy::Strict, Duration::from_seconds(3_600.0));
        assert_eq!(result, intervals);
    }

    #[test]
    fn covering_merges_close_cluster() {
        let intervals = vec![Interval::new(at(1, 0), at(1, 1)), Interval::new(at(1, 2), at(1, 3))];
        let result = collapse_fringes(intervals, FringePolicy::Covering, Duration::from_seconds(3_600.0 * 2.0));
        assert_eq!(result, vec![Interval::new(at(1, 0), at(1, 3))]);
    }

    #[test]
    fn largest_keeps_biggest_subinterval_only() {
        let intervals = vec![Interval::new(at(1, 0), at(1, 1)), Interval::new(at(1, 2), at(1, 5))];
        let result = collapse_fringes(intervals, FringePolicy::Largest, Duration::from_seconds(3_600.0 * 2.0));
        assert_eq!(result, vec![Interval::new(at(1, 2), at(1, 5))]);
    }

    #[test]
    fn distant_intervals_are_not_clustered() {
        let intervals = vec![Interval::new(at(1, 0), at(1, 1)), Interval::new(at(5, 0), at(5, 1))];
        let result = collapse_fringes(intervals.clone(), FringePolicy::Covering, Duration::from_seconds(3_600.0));
        assert_eq!(result, intervals);
    }
}
