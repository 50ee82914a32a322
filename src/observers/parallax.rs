use std::sync::Arc;

use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AstronomicalUnit, Circle, Degree, Meter, ParallaxMap, EARTH_MAJOR_AXIS, EARTH_MINOR_AXIS,
    ERAU,
};
use crate::skyobs_errors::SkyObsError;

/// Geocentric location of a fixed ground site.
///
/// Units
/// -----
/// * `longitude`: circles (fraction of 360°), east positive.
/// * `rho_cos_phi`: distance from the rotation axis, AU.
/// * `rho_sin_phi`: distance from the equatorial plane, AU.
///
/// φ here is the **geocentric** latitude and ρ the geocentric distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxConst {
    pub longitude: Circle,
    pub rho_cos_phi: AstronomicalUnit,
    pub rho_sin_phi: AstronomicalUnit,
}

impl ParallaxConst {
    /// Build parallax constants from values already in circles and AU.
    pub fn new(
        longitude: Circle,
        rho_cos_phi: AstronomicalUnit,
        rho_sin_phi: AstronomicalUnit,
    ) -> Self {
        ParallaxConst {
            longitude,
            rho_cos_phi,
            rho_sin_phi,
        }
    }

    /// Like [`ParallaxConst::new`] but refusing NaN components.
    ///
    /// Errors
    /// ------
    /// * [`SkyObsError::NanParallax`] if any argument is NaN.
    pub fn try_new(
        longitude: Circle,
        rho_cos_phi: AstronomicalUnit,
        rho_sin_phi: AstronomicalUnit,
    ) -> Result<Self, SkyObsError> {
        Ok(ParallaxConst {
            longitude: NotNan::new(longitude)?.into_inner(),
            rho_cos_phi: NotNan::new(rho_cos_phi)?.into_inner(),
            rho_sin_phi: NotNan::new(rho_sin_phi)?.into_inner(),
        })
    }

    /// Build parallax constants from the units of the MPC observatory code list.
    ///
    /// Arguments
    /// ---------
    /// * `longitude`: degrees east of Greenwich
    /// * `rho_cos_phi`, `rho_sin_phi`: in Earth equatorial radii
    pub fn from_earth_radii(longitude: Degree, rho_cos_phi: f64, rho_sin_phi: f64) -> Self {
        ParallaxConst {
            longitude: longitude / 360.0,
            rho_cos_phi: rho_cos_phi * ERAU,
            rho_sin_phi: rho_sin_phi * ERAU,
        }
    }

    /// Build parallax constants from geodetic coordinates.
    ///
    /// Arguments
    /// ---------
    /// * `longitude`: degrees east of Greenwich
    /// * `latitude`: geodetic latitude in degrees
    /// * `elevation`: height above the reference ellipsoid in meters
    ///
    /// See also
    /// --------
    /// * [`geodetic_to_parallax`] – the latitude/elevation conversion used here.
    pub fn from_geodetic(longitude: Degree, latitude: Degree, elevation: Meter) -> Self {
        let (rho_cos_phi, rho_sin_phi) = geodetic_to_parallax(latitude, elevation);
        ParallaxConst::from_earth_radii(longitude, rho_cos_phi, rho_sin_phi)
    }

    /// Longitude in degrees east of Greenwich.
    pub fn longitude_degrees(&self) -> Degree {
        self.longitude * 360.0
    }
}

/// Look up the parallax constants of a site code.
///
/// Errors
/// ------
/// * [`SkyObsError::UnknownSite`] when `code` is not in the map.
pub fn parallax_for(map: &ParallaxMap, code: &str) -> Result<Arc<ParallaxConst>, SkyObsError> {
    map.get(code)
        .cloned()
        .ok_or_else(|| SkyObsError::UnknownSite(code.to_string()))
}

/// Convert geodetic latitude and height into normalized parallax coordinates
/// on the Earth.
///
/// The resulting values are expressed in units of the Earth's equatorial
/// radius (`EARTH_MAJOR_AXIS`) and account for the Earth's oblateness.
///
/// Arguments
/// ---------
/// * `lat` - Geodetic latitude of the observer in **radians**.
/// * `height` - Observer's altitude above the reference ellipsoid in **meters**.
///
/// Returns
/// -------
/// A tuple `(rho_cos_phi, rho_sin_phi)`.
///
/// Details
/// -------
/// ```text
/// u = atan( (sin φ * (b/a)) / cos φ )
/// ρ_sinφ = (b/a) * sin u + (h/a) * sin φ
/// ρ_cosφ = cos u + (h/a) * cos φ
/// ```
///
/// where `a` and `b` are the Earth's semi-major and semi-minor axes,
/// and `h` is the height above the ellipsoid.
pub fn lat_alt_to_parallax(lat: f64, height: Meter) -> (f64, f64) {
    let axis_ratio = EARTH_MINOR_AXIS / EARTH_MAJOR_AXIS;

    // parametric latitude
    let u = (lat.sin() * axis_ratio).atan2(lat.cos());

    let rho_sin_phi = axis_ratio * u.sin() + (height / EARTH_MAJOR_AXIS) * lat.sin();
    let rho_cos_phi = u.cos() + (height / EARTH_MAJOR_AXIS) * lat.cos();

    (rho_cos_phi, rho_sin_phi)
}

/// Same as [`lat_alt_to_parallax`] with the latitude in **degrees**.
pub fn geodetic_to_parallax(lat: Degree, height: Meter) -> (f64, f64) {
    lat_alt_to_parallax(lat.to_radians(), height)
}

#[cfg(test)]
mod parallax_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::collections::HashMap;

    #[test]
    fn test_geodetic_to_parallax() {
        // latitude and height of Pan-STARRS 1, Haleakala
        let (pxy1, pz1) = geodetic_to_parallax(20.707233557, 3067.694);
        assert_relative_eq!(pxy1, 0.9362410003211518, epsilon = 1e-15);
        assert_relative_eq!(pz1, 0.35154299856304305, epsilon = 1e-15);

        let (pxy0, pz0) = geodetic_to_parallax(0.0, 0.0);
        assert_eq!(pxy0, 1.0);
        assert_eq!(pz0, 0.0);
    }

    #[test]
    fn test_from_earth_radii() {
        let f51 = ParallaxConst::from_earth_radii(203.74409, 0.936242, 0.351541);
        assert_relative_eq!(f51.longitude, 0.5659558055555556, epsilon = 1e-15);
        assert_relative_eq!(f51.longitude_degrees(), 203.74409, epsilon = 1e-12);
        assert_eq!(f51.rho_cos_phi, 0.936242 * ERAU);
        assert_eq!(f51.rho_sin_phi, 0.351541 * ERAU);
        // obscode radii are scaled by 6378.14 km / 149597870 km
        assert_abs_diff_eq!(f51.rho_sin_phi, 1.4988032341235873e-05, epsilon = 1e-20);
    }

    #[test]
    fn test_from_geodetic_matches_obscode() {
        let geodetic = ParallaxConst::from_geodetic(203.74409, 20.707233557, 3067.694);
        let obscode = ParallaxConst::from_earth_radii(203.74409, 0.936242, 0.351541);
        // obscode constants are rounded to 1e-6 Earth radii
        assert_relative_eq!(geodetic.rho_cos_phi, obscode.rho_cos_phi, epsilon = 2e-6 * ERAU);
        assert_relative_eq!(geodetic.rho_sin_phi, obscode.rho_sin_phi, epsilon = 3e-6 * ERAU);
    }

    #[test]
    fn test_try_new_rejects_nan() {
        assert!(ParallaxConst::try_new(0.1, 1e-5, 2e-5).is_ok());
        assert!(matches!(
            ParallaxConst::try_new(0.1, f64::NAN, 2e-5),
            Err(SkyObsError::NanParallax(_))
        ));
    }

    #[test]
    fn test_parallax_for() {
        let mut map: ParallaxMap = HashMap::new();
        map.insert(
            "F51".to_string(),
            Arc::new(ParallaxConst::from_earth_radii(203.74409, 0.936242, 0.351541)),
        );

        let f51 = parallax_for(&map, "F51").unwrap();
        assert_eq!(f51.rho_sin_phi, 0.351541 * ERAU);
        assert_eq!(
            parallax_for(&map, "500"),
            Err(SkyObsError::UnknownSite("500".to_string()))
        );
    }
}
