//! UTC instants and durations, at second precision.

use std::ops::{Add, Sub};

use crate::julian::{calendar_to_jd, jd_to_calendar, seconds_to_jd};

/// A UTC wall-clock instant, stored as seconds past the J2000 epoch.
/// Second precision is sufficient for every operation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    seconds_since_j2000: f64,
}

/// A signed duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Duration {
    seconds: f64,
}

impl Duration {
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn from_days(days: f64) -> Self {
        Self::from_seconds(days * 86_400.0)
    }

    pub fn as_seconds(self) -> f64 {
        self.seconds
    }

    pub fn as_days(self) -> f64 {
        self.seconds / 86_400.0
    }

    pub fn granularity(self) -> crate::granularity::Granularity {
        crate::granularity::granularity_of(self.seconds)
    }
}

impl Add for Duration {
    type Output = Duration;
    fn add(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.seconds + rhs.seconds)
    }
}

impl Sub for Duration {
    type Output = Duration;
    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.seconds - rhs.seconds)
    }
}

impl Instant {
    /// Construct an instant from a civil UTC calendar date/time, honoring the
    /// proleptic Julian/Gregorian switch (see [`crate::julian`]).
    pub fn from_utc_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let day_frac =
            day as f64 + hour as f64 / 24.0 + minute as f64 / 1440.0 + second / 86_400.0;
        let jd = calendar_to_jd(year, month, day_frac);
        Self {
            seconds_since_j2000: (jd - crate::julian::J2000_JD) * 86_400.0,
        }
    }

    pub fn from_julian_day(jd: f64) -> Self {
        Self {
            seconds_since_j2000: (jd - crate::julian::J2000_JD) * 86_400.0,
        }
    }

    pub fn julian_day(self) -> f64 {
        seconds_to_jd(self.seconds_since_j2000)
    }

    /// Decompose back into a civil UTC calendar date/time.
    pub fn to_utc_ymd_hms(self) -> (i32, u32, u32, u32, u32, f64) {
        let (year, month, day_frac) = jd_to_calendar(self.julian_day());
        let day = day_frac.floor() as u32;
        let remainder_seconds = day_frac.fract() * 86_400.0;
        let hour = (remainder_seconds / 3_600.0).floor() as u32;
        let minute = ((remainder_seconds % 3_600.0) / 60.0).floor() as u32;
        let second = remainder_seconds % 60.0;
        (year, month, day, hour, minute, second)
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;
    fn add(self, rhs: Duration) -> Instant {
        Instant {
            seconds_since_j2000: self.seconds_since_j2000 + rhs.seconds,
        }
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;
    fn sub(self, rhs: Duration) -> Instant {
        Instant {
            seconds_since_j2000: self.seconds_since_j2000 - rhs.seconds,
        }
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;
    fn sub(self, rhs: Instant) -> Duration {
        Duration::from_seconds(self.seconds_since_j2000 - rhs.seconds_since_j2000)
    }
}
