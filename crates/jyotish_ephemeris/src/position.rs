//! `Position` and `Phase`: the quantities read back from the oracle.

/// A body's (or the ascendant's) location and motion at an instant.
///
/// `longitude` is always present. The other fields are present for bodies
/// but absent for the ascendant, which the oracle reports as a longitude
/// only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub longitude_deg: f64,
    pub latitude_deg: Option<f64>,
    pub distance: Option<f64>,
    pub speed_deg_per_day: Option<f64>,
}

impl Position {
    pub fn body(longitude_deg: f64, latitude_deg: f64, distance: f64, speed_deg_per_day: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg: Some(latitude_deg),
            distance: Some(distance),
            speed_deg_per_day: Some(speed_deg_per_day),
        }
    }

    pub fn longitude_only(longitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg: None,
            distance: None,
            speed_deg_per_day: None,
        }
    }

    /// Transform a North Node reading into the South Node's, by antipodal
    /// inversion: `(lon + 180, -lat, dist, -speed)`. The speed sign is
    /// kept negated so "retrograde ⇔ positive speed" still holds for nodes.
    pub fn invert_node(self) -> Self {
        Self {
            longitude_deg: crate::oracle::normalize_360(self.longitude_deg + 180.0),
            latitude_deg: self.latitude_deg.map(|v| -v),
            distance: self.distance,
            speed_deg_per_day: self.speed_deg_per_day.map(|v| -v),
        }
    }
}

/// Illumination phase of a body, as a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub illuminated_fraction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_inversion_flips_longitude_and_speed() {
        let north = Position::body(10.0, 1.0, 0.002, 0.05);
        let south = north.invert_node();
        assert!((south.longitude_deg - 190.0).abs() < 1e-9);
        assert_eq!(south.latitude_deg, Some(-1.0));
        assert_eq!(south.speed_deg_per_day, Some(-0.05));
    }

    #[test]
    fn node_inversion_wraps_longitude() {
        let north = Position::body(270.0, 0.0, 0.0, -0.05);
        let south = north.invert_node();
        assert!((south.longitude_deg - 90.0).abs() < 1e-9);
    }
}
