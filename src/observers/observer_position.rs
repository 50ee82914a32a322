use nalgebra::Vector3;

use super::ParallaxConst;
use crate::constants::MJD;
use crate::time::lst;

/// Compute the geocenter → observer vector of a ground site.
///
/// The site is placed on a circle of radius ρ·cosφ around the rotation axis, at the
/// azimuth given by the local sidereal time, and ρ·sinφ along the axis:
///
/// ```text
/// θ = LST(mjd, λ)
/// (x, y, z) = (ρcosφ · cos θ, ρcosφ · sin θ, ρsinφ)
/// ```
///
/// Arguments
/// ---------
/// * `mjd`: observation time, Modified Julian Date (UT)
/// * `par`: parallax constants of the site
///
/// Returns
/// --------
/// * the observer position relative to the Earth center, equatorial frame, in AU
///
/// # See also
/// * [`crate::time::lst`] – local mean sidereal time
pub fn earth_observer_vect(mjd: MJD, par: &ParallaxConst) -> Vector3<f64> {
    let (sth, cth) = lst(mjd, par.longitude).sin_cos();
    Vector3::new(par.rho_cos_phi * cth, par.rho_cos_phi * sth, par.rho_sin_phi)
}

#[cfg(test)]
mod observer_pos_tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_pan_starrs_vector() {
        // F51 203.744090.936242+0.351541 at 2014 04 09.45004 UTC
        let f51 = ParallaxConst::from_earth_radii(203.74409, 0.936242, 0.351541);
        let eo = earth_observer_vect(56756.45004, &f51);

        assert_abs_diff_eq!(eo.x, -3.6643985193887653e-05, epsilon = 1e-15);
        assert_abs_diff_eq!(eo.y, -1.5829620927425095e-05, epsilon = 1e-15);
        assert_abs_diff_eq!(eo.z, 1.4988032341235873e-05, epsilon = 1e-15);
    }

    #[test]
    fn test_equatorial_radius_is_preserved() {
        let earth_site = ParallaxConst::new(0.3172, 4.1e-5, -1.2e-5);
        let unit_site = ParallaxConst::new(0.8813, 0.999, 0.02);
        for par in [earth_site, unit_site] {
            for k in 0..500 {
                let eo = earth_observer_vect(50000.0 + 0.137 * k as f64, &par);
                assert_relative_eq!(
                    eo.x * eo.x + eo.y * eo.y,
                    par.rho_cos_phi * par.rho_cos_phi,
                    epsilon = 0.0,
                    max_relative = 1e-12
                );
                assert_eq!(eo.z, par.rho_sin_phi);
            }
        }
        let eo = earth_observer_vect(56756.45004, &unit_site);
        assert_abs_diff_eq!(
            eo.x * eo.x + eo.y * eo.y,
            0.999 * 0.999,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_polar_site() {
        let pole = ParallaxConst::new(0.71, 0.0, 1.0);
        for mjd in [40000.0, 51544.5, 56756.45004, 60000.999] {
            assert_eq!(earth_observer_vect(mjd, &pole), Vector3::new(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_pure_function() {
        let f51 = ParallaxConst::from_earth_radii(203.74409, 0.936242, 0.351541);
        let a = earth_observer_vect(57028.479297592596, &f51);
        let b = earth_observer_vect(57028.479297592596, &f51);
        assert_eq!(a.map(f64::to_bits), b.map(f64::to_bits));
    }
}
