//! `DegreeRange`: a possibly-wrapping span of ecliptic longitude.

use crate::util::normalize_360;

/// A span of the ecliptic, `[lowerBound, lowerBound + size)` mod 360,
/// possibly wrapping across 0°/360°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeRange {
    pub lower_bound: f64,
    pub size: f64,
}

impl DegreeRange {
    pub fn new(lower_bound: f64, size: f64) -> Self {
        Self {
            lower_bound: normalize_360(lower_bound),
            size,
        }
    }

    pub fn upper_bound(self) -> f64 {
        normalize_360(self.lower_bound + self.size)
    }

    /// Does this range contain degree `d`? Handles the wrap case where
    /// `lower_bound > upper_bound` by testing the complement.
    pub fn contains(self, d: f64) -> bool {
        let d = normalize_360(d);
        let lower = self.lower_bound;
        let upper = self.upper_bound();
        if lower <= upper {
            d >= lower && d < upper
        } else {
            // wraps through 0°: the range is everything except [upper, lower)
            d >= lower || d < upper
        }
    }

    /// The complementary range: starts where this one ends, spans the rest
    /// of the circle.
    pub fn inverted(self) -> DegreeRange {
        DegreeRange::new(self.upper_bound(), 360.0 - self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_wrapping_range_contains_interior_point() {
        let r = DegreeRange::new(10.0, 20.0); // [10, 30)
        assert!(r.contains(15.0));
        assert!(!r.contains(30.0));
        assert!(!r.contains(5.0));
    }

    #[test]
    fn wrapping_range_contains_across_zero() {
        let r = DegreeRange::new(350.0, 20.0); // [350, 10)
        assert!(r.contains(355.0));
        assert!(r.contains(5.0));
        assert!(!r.contains(100.0));
    }

    #[test]
    fn contains_xor_inverted_contains() {
        let r = DegreeRange::new(40.0, 75.0);
        for d in (0..3600).map(|i| i as f64 / 10.0) {
            // boundary points are excluded from this check, matching the
            // half-open contract at lower/upper bounds
            if (d - r.lower_bound).abs() < 1e-9 || (d - r.upper_bound()).abs() < 1e-9 {
                continue;
            }
            assert_ne!(r.contains(d), r.inverted().contains(d), "d={d}");
        }
    }

    #[test]
    fn inverted_round_trips() {
        let r = DegreeRange::new(40.0, 75.0);
        let double_inverted = r.inverted().inverted();
        assert!((double_inverted.lower_bound - r.lower_bound).abs() < 1e-9);
        assert!((double_inverted.size - r.size).abs() < 1e-9);
    }
}
