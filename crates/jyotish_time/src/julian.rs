//! Civil-calendar to Julian Day conversion with the proleptic Julian/Gregorian switch.
//!
//! The oracle consumes proleptic Gregorian Julian Days throughout, but the
//! host calendar most callers pass in is proleptic Julian before
//! 1582-10-15 UTC. This module performs the calendar-aware conversion
//! (Meeus, *Astronomical Algorithms*, ch. 7) rather than assuming Gregorian
//! unconditionally.

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in a nominal day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// The civil instant at which the proleptic Gregorian calendar switch
/// happens to match the historical adoption date (1582-10-15 UTC).
const GREGORIAN_SWITCH_JD: f64 = 2_299_160.5;

/// The Julian-formula JD of the switch date itself (1582-10-15), used to
/// decide `calendar_to_jd`'s branch from the *civil label* being converted.
/// This is not the same threshold `jd_to_calendar` compares against: that
/// one tests an already-computed JD (the inverse direction), this one tests
/// the Julian-calendar reading of the incoming year/month/day before we
/// know which calendar it belongs to.
const CIVIL_SWITCH_JD_JULIAN_FORMULA: f64 = 2_299_170.5;

/// Convert a civil calendar date/time to a Julian Day, honoring the
/// proleptic Julian/Gregorian calendar switch at 1582-10-15 UTC.
///
/// `day` may carry a fractional part (hours/minutes/seconds folded in).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    // Tentative Julian-calendar JD to decide which side of the switch we are on.
    let jd_int_julian =
        (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day
            - 1524.5;

    let b = if jd_int_julian < CIVIL_SWITCH_JD_JULIAN_FORMULA {
        0.0
    } else {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    };

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Day back to a civil calendar (year, month, day-with-fraction),
/// honoring the same proleptic Julian/Gregorian switch.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd_adj = jd + 0.5;
    let z = jd_adj.floor();
    let f = jd_adj - z;

    let a = if z < GREGORIAN_SWITCH_JD + 0.5 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Convert a Julian Day to its *proleptic Gregorian* calendar fields,
/// unconditionally — no Julian-calendar branch. This is the representation
/// the ephemeris oracle itself expects (`swe_julday` with the Gregorian
/// flag always set), as distinct from [`jd_to_calendar`], which reproduces
/// the host application's own civil-date convention (Julian before the
/// 1582-10-15 switch).
pub fn jd_to_gregorian_calendar(jd: f64) -> (i32, u32, f64) {
    let jd_adj = jd + 0.5;
    let z = jd_adj.floor();
    let f = jd_adj - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Seconds past the J2000 epoch for a given Julian Day (no leap-second handling;
/// this is a nominal day-count conversion, not a TAI/TDB time-scale transform).
pub fn jd_to_seconds(jd: f64) -> f64 {
    (jd - J2000_JD) * SECONDS_PER_DAY
}

/// Julian Day for a given count of seconds past the J2000 epoch.
pub fn seconds_to_jd(seconds: f64) -> f64 {
    J2000_JD + seconds / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_gap_at_calendar_switch() {
        // 1582-10-10T00:00:00Z in the proleptic Julian calendar.
        let jd = calendar_to_jd(1582, 10, 10.0);
        assert!((jd - 2_299_165.5).abs() < 1e-9);
    }

    #[test]
    fn julian_day_continuity_after_switch() {
        let d1 = calendar_to_jd(1990, 3, 1.0);
        let d2 = calendar_to_jd(1990, 3, 2.0);
        assert!((d2 - d1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn j2000_epoch_is_exact() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_calendar_jd() {
        let jd = calendar_to_jd(2020, 1, 1.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2020, 1));
        assert!((d - 1.0).abs() < 1e-6);
    }
}
