//! IAU H-G phase law for minor planet brightness.

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Radian, DEFAULT_SLOPE_G};

/// Apparent visual magnitude from the H-G system.
///
/// Arguments
/// ---------
/// * `h`: absolute magnitude, NaN when unknown
/// * `g`: slope parameter, NaN selects [`DEFAULT_SLOPE_G`]
/// * `beta`: phase angle in radians
/// * `r`: Sun-object distance in AU
/// * `delta`: observer-object distance in AU
///
/// Return
/// ------
/// * the apparent V magnitude. A NaN `h` gives NaN; non positive distances give
///   NaN/Inf through `log10`, nothing is range checked.
pub fn apparent_magnitude(
    h: f64,
    g: f64,
    beta: Radian,
    r: AstronomicalUnit,
    delta: AstronomicalUnit,
) -> f64 {
    if h.is_nan() {
        return h;
    }
    let g = if g.is_nan() { DEFAULT_SLOPE_G } else { g };

    let tan_half_beta = (beta / 2.0).tan();
    let phi1 = (-3.33 * tan_half_beta.powf(0.63)).exp();
    let phi2 = (-1.87 * tan_half_beta.powf(1.22)).exp();
    h + 5.0 * (r * delta).log10() - 2.5 * ((1.0 - g) * phi1 + g * phi2).log10()
}

/// Photometric parameters of a minor planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HgParams {
    /// Absolute magnitude H
    pub h: f64,
    /// Slope parameter G
    pub g: f64,
}

impl HgParams {
    pub fn new(h: f64, g: f64) -> Self {
        HgParams { h, g }
    }

    /// Parameters with the default slope G = 0.15.
    pub fn with_default_slope(h: f64) -> Self {
        HgParams {
            h,
            g: DEFAULT_SLOPE_G,
        }
    }

    pub fn vmag(&self, beta: Radian, r: AstronomicalUnit, delta: AstronomicalUnit) -> f64 {
        apparent_magnitude(self.h, self.g, beta, r, delta)
    }
}
