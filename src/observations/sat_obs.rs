use nalgebra::Vector3;

use super::{VMeas, VObs};

/// An observation from an observatory in Earth orbit.
///
/// The offset from the center of the Earth is stored but not yet applied by
/// [`VObs::earth_observer_vect`]: its orientation convention is unverified, so the
/// observation is treated as geocentric.
#[derive(Debug, Clone, PartialEq)]
pub struct SatObs {
    sat: String,
    meas: VMeas,
    offset: Vector3<f64>,
}

impl SatObs {
    /// Arguments
    /// ---------
    /// * `sat`: satellite identifier, typically the 3 character MPC obscode
    /// * `meas`: the measurement
    /// * `offset`: geocenter → satellite vector, AU
    pub fn new(sat: impl Into<String>, meas: VMeas, offset: Vector3<f64>) -> Self {
        SatObs {
            sat: sat.into(),
            meas,
            offset,
        }
    }

    pub fn sat(&self) -> &str {
        &self.sat
    }

    /// Geocenter → satellite offset as reported with the measurement, AU.
    pub fn offset(&self) -> &Vector3<f64> {
        &self.offset
    }
}

impl VObs for SatObs {
    fn meas(&self) -> &VMeas {
        &self.meas
    }

    // TODO: apply `offset` once the frame and orientation of reported satellite
    // positions are verified.
    fn earth_observer_vect(&self) -> Vector3<f64> {
        Vector3::zeros()
    }
}

#[cfg(test)]
mod sat_obs_test {
    use super::*;
    use crate::angles::SphericalCoord;

    #[test]
    fn test_geocentric_fallback() {
        let offset = Vector3::new(-2.1e-5, 3.3e-5, 1.0e-6);
        let obs = SatObs::new(
            "C57",
            VMeas::new(59800.25, SphericalCoord::new(1.2, -0.4), f64::NAN, "C57"),
            offset,
        );

        assert_eq!(obs.sat(), "C57");
        assert_eq!(obs.offset(), &offset);
        assert_eq!(obs.earth_observer_vect(), Vector3::zeros());
        assert_eq!(obs.meas().mjd(), 59800.25);
    }
}
