//! Shard stitching: fuse adjacent shard results that meet exactly
//! at a shard boundary, rather than emitting two abutting intervals.

use jyotish_time::Interval;

/// Combine shard-ordered interval lists into one chronological list, fusing
/// a shard's last interval into the next shard's first interval when they
/// meet exactly (no gap). A small gap, even sub-second, is left unfused.
pub fn stitch(shards: Vec<Vec<Interval>>) -> Vec<Interval> {
    let mut result: Vec<Interval> = Vec::new();
    for shard in shards {
        for interval in shard {
            if let Some(last) = result.last_mut() {
                if last.end == interval.start {
                    *last = Interval::new(last.start, interval.end);
                    continue;
                }
            }
            result.push(interval);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_time::Instant;

    fn at(day: u32) -> Instant {
        Instant::from_utc_ymd_hms(2020, 1, day, 0, 0, 0.0)
    }

    #[test]
    fn fuses_exact_boundary_meetup() {
        let shards = vec![
            vec![Interval::new(at(1), at(5))],
            vec![Interval::new(at(5), at(8))],
        ];
        let stitched = stitch(shards);
        assert_eq!(stitched, vec![Interval::new(at(1), at(8))]);
    }

    #[test]
    fn does_not_fuse_across_a_gap() {
        let shards = vec![
            vec![Interval::new(at(1), at(5))],
            vec![Interval::new(at(6), at(8))],
        ];
        let stitched = stitch(shards);
        assert_eq!(stitched, vec![Interval::new(at(1), at(5)), Interval::new(at(6), at(8))]);
    }
}
