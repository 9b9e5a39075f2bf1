//! `Place`: an immutable geographic location with a fixed UTC offset.

/// An immutable birth location.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    /// Timezone offset from UTC, in seconds (east positive).
    pub utc_offset_seconds: i32,
    /// Signed latitude, degrees (north positive).
    pub latitude_deg: f64,
    /// Signed longitude, degrees (east positive).
    pub longitude_deg: f64,
    /// Altitude above sea level, meters.
    pub altitude_meters: f64,
}

impl Place {
    pub fn new(
        name: impl Into<String>,
        utc_offset_seconds: i32,
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_meters: f64,
    ) -> Self {
        Self {
            name: name.into(),
            utc_offset_seconds,
            latitude_deg,
            longitude_deg,
            altitude_meters,
        }
    }
}
