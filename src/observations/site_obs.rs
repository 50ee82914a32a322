use std::sync::Arc;

use nalgebra::Vector3;

use super::{VMeas, VObs};
use crate::constants::ParallaxMap;
use crate::observers::{earth_observer_vect, parallax_for, ParallaxConst};
use crate::skyobs_errors::SkyObsError;

/// An observation from a fixed ground-based observatory.
///
/// The parallax constants are shared: every observation of a site points to the
/// same [`ParallaxConst`].
#[derive(Debug, Clone, PartialEq)]
pub struct SiteObs {
    meas: VMeas,
    par: Arc<ParallaxConst>,
}

impl SiteObs {
    pub fn new(meas: VMeas, par: Arc<ParallaxConst>) -> Self {
        SiteObs { meas, par }
    }

    /// Attach a measurement to the site named by its quality code.
    ///
    /// Errors
    /// ------
    /// * [`SkyObsError::UnknownSite`] if `meas.qual()` is not in `sites`.
    pub fn from_map(meas: VMeas, sites: &ParallaxMap) -> Result<Self, SkyObsError> {
        let par = parallax_for(sites, meas.qual())?;
        Ok(SiteObs { meas, par })
    }

    pub fn parallax(&self) -> &ParallaxConst {
        &self.par
    }
}

impl VObs for SiteObs {
    fn meas(&self) -> &VMeas {
        &self.meas
    }

    fn earth_observer_vect(&self) -> Vector3<f64> {
        earth_observer_vect(self.meas.mjd(), &self.par)
    }
}

#[cfg(test)]
mod site_obs_test {
    use super::*;
    use crate::angles::SphericalCoord;
    use approx::assert_abs_diff_eq;
    use std::collections::HashMap;

    fn sites() -> ParallaxMap {
        let mut map = HashMap::new();
        map.insert(
            "F51".to_string(),
            Arc::new(ParallaxConst::from_earth_radii(203.74409, 0.936242, 0.351541)),
        );
        map
    }

    #[test]
    fn test_site_obs_vector() {
        // K14G49E observed by Pan-STARRS 1
        let meas = VMeas::new(
            56756.45004,
            SphericalCoord::new(4.3135, 0.3197),
            19.3,
            "F51",
        );
        let obs = SiteObs::from_map(meas, &sites()).unwrap();

        let eo = obs.earth_observer_vect();
        assert_abs_diff_eq!(eo.x, -3.6643985193887653e-05, epsilon = 1e-15);
        assert_abs_diff_eq!(eo.y, -1.5829620927425095e-05, epsilon = 1e-15);
        assert_abs_diff_eq!(eo.z, 1.4988032341235873e-05, epsilon = 1e-15);
        assert_eq!(obs.parallax().longitude, 203.74409 / 360.0);
    }

    #[test]
    fn test_unknown_site() {
        let meas = VMeas::new(56756.45004, SphericalCoord::new(4.3, 0.3), 19.3, "G96");
        assert_eq!(
            SiteObs::from_map(meas, &sites()),
            Err(SkyObsError::UnknownSite("G96".to_string()))
        );
    }
}
