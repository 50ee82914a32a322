use hifitime::Epoch;

use crate::constants::{Circle, Radian, B1900, DPI, HOURS_PER_DAY, MJD, SIDEREAL_RATE};

/// Build an [`Epoch`] from a Modified Julian Date read on the UTC scale.
///
/// Argument
/// --------
/// * `mjd`: Modified Julian Date (UTC)
///
/// Return
/// ------
/// * the corresponding hifitime epoch
pub fn epoch_from_mjd(mjd: MJD) -> Epoch {
    Epoch::from_mjd_utc(mjd)
}

/// Modified Julian Date (UTC) of an [`Epoch`].
pub fn mjd_from_epoch(epoch: &Epoch) -> MJD {
    epoch.to_mjd_utc_days()
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT time scale).
///
/// This function uses Newcomb's expression of the mean sidereal time at 0h UT,
/// referred to the B1900.0 epoch, plus the fractional-day correction term due to
/// Earth's rotation rate.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST is computed in two steps:
/// 1. Use a quadratic polynomial (coefficients C0–C2) to get GMST at 0h UT
///    in hours for the given date.
/// 2. Add the contribution of Earth's rotation during the fractional day
///    using [`SIDEREAL_RATE`], which converts solar hours to sidereal hours.
///
/// # References
/// * Explanatory Supplement to the Astronomical Ephemeris (1961).
pub fn gmst(tjm: MJD) -> Radian {
    // Polynomial coefficients for GMST at 0h UT (in hours)
    const C0: f64 = 6.6460656;
    const C1: f64 = 2400.051262;
    const C2: f64 = 2.581e-5;

    // Julian centuries since B1900.0 at 0h of the current day
    let itjm = tjm.floor();
    let t = (itjm - B1900) / 36525.0;

    let gmst0 = (C2 * t + C1) * t + C0;
    let hours = gmst0 + tjm.fract() * HOURS_PER_DAY * SIDEREAL_RATE;
    (hours / HOURS_PER_DAY * DPI).rem_euclid(DPI)
}

/// Local mean sidereal time in radians.
///
/// Arguments
/// ---------
/// * `mjd`: Modified Julian Date (UT)
/// * `longitude`: site longitude in **circles**, east positive
///
/// Return
/// ------
/// * local sidereal time in radians, normalized to [0, 2π)
pub fn lst(mjd: MJD, longitude: Circle) -> Radian {
    (gmst(mjd) + longitude * DPI).rem_euclid(DPI)
}
