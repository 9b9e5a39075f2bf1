//! `Body`, the canonical enumeration of transiting points, and its static
//! per-body speed/period table.

/// A transiting body, including the two lunar nodes. Ordered by the
/// canonical ordinal used throughout comparisons and the Vimshottari cycle
/// table (see [`crate::dasha_cycle`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    NorthNode,
    SouthNode,
}

pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::NorthNode,
    Body::SouthNode,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::NorthNode => "NorthNode",
            Self::SouthNode => "SouthNode",
        }
    }

    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::NorthNode => 7,
            Self::SouthNode => 8,
        }
    }

    /// Static speed/period table entry for this body.
    pub const fn table(self) -> BodyTable {
        match self {
            Self::Sun => BodyTable {
                avg_speed_deg_per_day: 0.9856,
                max_speed_deg_per_day: 1.0197,
                retrograde_duration_seconds: 0.0,
                synodic_period_seconds: 0.0,
                vimshottari_ratio: 6.0 / 120.0,
            },
            Self::Moon => BodyTable {
                avg_speed_deg_per_day: 13.176,
                max_speed_deg_per_day: 15.39,
                retrograde_duration_seconds: 0.0,
                synodic_period_seconds: 0.0,
                vimshottari_ratio: 10.0 / 120.0,
            },
            Self::Mercury => BodyTable {
                avg_speed_deg_per_day: 1.383,
                max_speed_deg_per_day: 2.2,
                retrograde_duration_seconds: 21.0 * 86_400.0,
                synodic_period_seconds: 115.88 * 86_400.0,
                vimshottari_ratio: 17.0 / 120.0,
            },
            Self::Venus => BodyTable {
                avg_speed_deg_per_day: 1.2,
                max_speed_deg_per_day: 1.27,
                retrograde_duration_seconds: 42.0 * 86_400.0,
                synodic_period_seconds: 583.92 * 86_400.0,
                vimshottari_ratio: 20.0 / 120.0,
            },
            Self::Mars => BodyTable {
                avg_speed_deg_per_day: 0.524,
                max_speed_deg_per_day: 0.79,
                retrograde_duration_seconds: 72.0 * 86_400.0,
                synodic_period_seconds: 779.94 * 86_400.0,
                vimshottari_ratio: 7.0 / 120.0,
            },
            Self::Jupiter => BodyTable {
                avg_speed_deg_per_day: 0.0831,
                max_speed_deg_per_day: 0.24,
                retrograde_duration_seconds: 121.0 * 86_400.0,
                synodic_period_seconds: 398.88 * 86_400.0,
                vimshottari_ratio: 16.0 / 120.0,
            },
            Self::Saturn => BodyTable {
                avg_speed_deg_per_day: 0.0334,
                max_speed_deg_per_day: 0.13,
                retrograde_duration_seconds: 138.0 * 86_400.0,
                synodic_period_seconds: 378.09 * 86_400.0,
                vimshottari_ratio: 19.0 / 120.0,
            },
            // True-node motion regresses on average but briefly turns direct
            // (positive speed) a few times a year around its stationary
            // points; under this table's sign convention (`speed > 0` is
            // "retrograde" for nodes, see `crate::Body`'s doc comment on the
            // search crate) those direct excursions are exactly what
            // `retrogrades()` searches for, so `max_speed` must exceed
            // `avg_speed` in magnitude or no node search would ever find
            // anything.
            Self::NorthNode => BodyTable {
                avg_speed_deg_per_day: -0.0529,
                max_speed_deg_per_day: 0.3,
                retrograde_duration_seconds: 2.0 * 86_400.0,
                synodic_period_seconds: 27.32 * 86_400.0,
                vimshottari_ratio: 18.0 / 120.0,
            },
            Self::SouthNode => BodyTable {
                avg_speed_deg_per_day: -0.0529,
                max_speed_deg_per_day: 0.3,
                retrograde_duration_seconds: 2.0 * 86_400.0,
                synodic_period_seconds: 27.32 * 86_400.0,
                vimshottari_ratio: 7.0 / 120.0,
            },
        }
    }
}

/// Static per-body speed/period data.
///
/// For the nodes, `avg_speed` is the small mean regression rate and
/// `max_speed` is the larger (in magnitude) speed reached during a brief
/// direct excursion; `effective_max_speed` falls back to `avg_speed` only
/// for the degenerate case where a future table entry sets `max_speed` to
/// exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTable {
    pub avg_speed_deg_per_day: f64,
    pub max_speed_deg_per_day: f64,
    pub retrograde_duration_seconds: f64,
    pub synodic_period_seconds: f64,
    pub vimshottari_ratio: f64,
}

impl BodyTable {
    fn effective_max_speed(self) -> f64 {
        if self.max_speed_deg_per_day.abs() > 0.0 {
            self.max_speed_deg_per_day.abs()
        } else {
            self.avg_speed_deg_per_day.abs()
        }
    }

    /// Minimum time (seconds) to traverse `deg` degrees at maximum speed.
    pub fn min_time(self, deg: f64) -> f64 {
        deg.abs() / self.effective_max_speed() * 86_400.0
    }

    /// Average time (seconds) to traverse `deg` degrees at average speed.
    pub fn avg_time(self, deg: f64) -> f64 {
        deg.abs() / self.avg_speed_deg_per_day.abs() * 86_400.0
    }

    /// Degrees traversed in `sec` seconds at average speed.
    pub fn avg_degrees(self, sec: f64) -> f64 {
        sec.abs() * self.avg_speed_deg_per_day.abs() / 86_400.0
    }

    /// Degrees traversed in `sec` seconds at maximum speed.
    pub fn max_degrees(self, sec: f64) -> f64 {
        sec.abs() * self.effective_max_speed() / 86_400.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_matches_declaration_order() {
        for (i, body) in ALL_BODIES.iter().enumerate() {
            assert_eq!(body.ordinal() as usize, i);
        }
    }

    #[test]
    fn vimshottari_ratios_sum_across_nine_slot_cycle() {
        // Ketu(7) Venus(20) Sun(6) Moon(10) Mars(7) Rahu(18) Jupiter(16) Saturn(19) Mercury(17) = 120
        let sum = 7.0 + 20.0 + 6.0 + 10.0 + 7.0 + 18.0 + 16.0 + 19.0 + 17.0;
        assert!((sum - 120.0).abs() < 1e-9);
    }

    #[test]
    fn sun_and_moon_have_no_retrograde() {
        assert_eq!(Body::Sun.table().retrograde_duration_seconds, 0.0);
        assert_eq!(Body::Moon.table().retrograde_duration_seconds, 0.0);
    }

    #[test]
    fn nodes_share_vimshottari_split() {
        assert!((Body::NorthNode.table().vimshottari_ratio - 18.0 / 120.0).abs() < 1e-12);
        assert!((Body::SouthNode.table().vimshottari_ratio - 7.0 / 120.0).abs() < 1e-12);
    }

    #[test]
    fn min_time_is_faster_than_avg_time_for_same_span() {
        let table = Body::Mars.table();
        assert!(table.min_time(30.0) < table.avg_time(30.0));
    }
}
