//! FFI boundary to the ephemeris oracle (Swiss Ephemeris, via
//! `libswisseph-sys`).
//!
//! Every `unsafe` call site in this crate lives here. Callers outside this
//! module only ever see safe `Position`/`Result` values — the marshaling of
//! Julian Days, body identifiers, and the oracle's sidereal/topocentric
//! flags happens entirely in this file.
//!
//! The oracle keeps mutable state in thread-local storage (the loaded
//! ephemeris file handle and the configured sidereal mode). Each
//! [`crate::Ephemeris`] therefore calls [`set_thread_options`] once before
//! its first query, and a fresh adapter per `map_reduce` worker
//! re-applies it on that worker's own thread rather than sharing state.

use std::cell::Cell;
use std::ffi::{CStr, CString};

use jyotish_zodiac::Body;

use crate::config::Ayanamsha;
use crate::error::JyotishError;

const SEFLG_SWIEPH: i32 = 2;
const SEFLG_SPEED: i32 = 256;
const SEFLG_SIDEREAL: i32 = 64 * 1024;
const SEFLG_TOPOCTR: i32 = 32 * 1024;
const SE_GREG_CAL: i32 = 1;
// The true node oscillates (briefly turning direct around its stationary
// points), unlike the mean node's constant regression rate — the node
// speed table in `jyotish_zodiac::Body` assumes that variability exists.
const SE_TRUE_NODE: i32 = 11;
const SE_ASC: usize = 0;

thread_local! {
    static CONFIGURED: Cell<bool> = const { Cell::new(false) };
}

/// Apply this adapter's ayanamsha and data path to the oracle's thread-local
/// state, once per thread. Idempotent and cheap to call before every query.
pub fn set_thread_options(ayanamsha: Ayanamsha, data_path: Option<&std::path::Path>) {
    CONFIGURED.with(|configured| {
        if configured.get() {
            return;
        }
        unsafe {
            if let Some(path) = data_path {
                if let Ok(c_path) = CString::new(path.to_string_lossy().as_bytes()) {
                    libswisseph_sys::swe_set_ephe_path(c_path.as_ptr() as *mut i8);
                }
            } else {
                libswisseph_sys::swe_set_ephe_path(std::ptr::null_mut());
            }
            libswisseph_sys::swe_set_sid_mode(ayanamsha.oracle_mode_id(), 0.0, 0.0);
        }
        configured.set(true);
    });
}

fn swe_body_id(body: Body) -> i32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
        Body::NorthNode => SE_TRUE_NODE,
        // SouthNode is derived from NorthNode by antipodal inversion at the
        // Position layer; the oracle is never asked for it directly.
        Body::SouthNode => SE_TRUE_NODE,
    }
}

/// Raw `(longitude, latitude, distance, speed_deg_per_day)` read from the
/// oracle for `body` at Julian Day `jd_ut`, sidereal and topocentric.
pub fn calc_body(
    body: Body,
    jd_ut: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_meters: f64,
) -> Result<(f64, f64, f64, f64), JyotishError> {
    unsafe {
        libswisseph_sys::swe_set_topo(longitude_deg, latitude_deg, altitude_meters);
    }

    let mut xx: [f64; 6] = [0.0; 6];
    let mut serr: [i8; 256] = [0; 256];
    let iflag = SEFLG_SWIEPH | SEFLG_SPEED | SEFLG_SIDEREAL | SEFLG_TOPOCTR;

    let ret = unsafe {
        libswisseph_sys::swe_calc_ut(
            jd_ut,
            swe_body_id(body),
            iflag,
            xx.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    };

    if ret < 0 {
        return Err(JyotishError::Oracle(read_error_buffer(&serr)));
    }
    if ret != iflag {
        log::warn!(
            "oracle returned flags {ret:#x}, requested {iflag:#x} for {}",
            body.name()
        );
    }

    Ok((xx[0], xx[1], xx[2], xx[3]))
}

/// The ascendant's sidereal longitude at Julian Day `jd_ut` for the given
/// geographic latitude/longitude, using the Placidus house system (the
/// oracle's default).
pub fn calc_ascendant(jd_ut: f64, latitude_deg: f64, longitude_deg: f64) -> Result<f64, JyotishError> {
    let mut cusps: [f64; 13] = [0.0; 13];
    let mut ascmc: [f64; 10] = [0.0; 10];
    let iflag = SEFLG_SIDEREAL;
    let hsys = b'P' as i32;

    let ret = unsafe {
        libswisseph_sys::swe_houses_ex(
            jd_ut,
            iflag,
            latitude_deg,
            longitude_deg,
            hsys,
            cusps.as_mut_ptr(),
            ascmc.as_mut_ptr(),
        )
    };

    if ret < 0 {
        return Err(JyotishError::Oracle(
            "swe_houses_ex failed to compute house cusps".to_string(),
        ));
    }

    Ok(normalize_360(ascmc[SE_ASC]))
}

/// Julian Day (UT) for a proleptic-Gregorian civil date/time, as the oracle
/// itself computes it (used to cross-check [`jyotish_time::calendar_to_jd`]
/// for instants on or after the 1582-10-15 switch).
pub fn julian_day_ut(year: i32, month: i32, day: i32, hour: f64) -> f64 {
    unsafe { libswisseph_sys::swe_julday(year, month, day, hour, SE_GREG_CAL) }
}

fn read_error_buffer(serr: &[i8; 256]) -> String {
    unsafe {
        CStr::from_ptr(serr.as_ptr())
            .to_string_lossy()
            .into_owned()
    }
}

pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
