//! # Observations
//!
//! Thin containers for sky measurements of moving objects:
//!
//! - [`VMeas`](crate::observations::VMeas): one measurement (time, sky position,
//!   V-normalized magnitude, quality tag).
//! - [`VObs`](crate::observations::VObs): the common capability of every observation,
//!   giving the underlying measurement and the geocenter → observer vector.
//! - [`SiteObs`](crate::observations::SiteObs) for fixed ground observatories and
//!   [`SatObs`](crate::observations::SatObs) for observatories in Earth orbit.
//! - [`Observation`](crate::observations::Observation): the closed sum of both kinds,
//!   the element type of an [`ObservationArc`](crate::observations::ObservationArc).
//!
//! All types are immutable once built, except the arc which grows by `push`.

mod arc;
mod measurement;
mod sat_obs;
mod site_obs;

pub use arc::ObservationArc;
pub use measurement::VMeas;
pub use sat_obs::SatObs;
pub use site_obs::SiteObs;

use nalgebra::Vector3;

/// Common interface of ground-based and space-based observations.
pub trait VObs {
    /// The underlying measurement.
    fn meas(&self) -> &VMeas;

    /// Location of the observer relative to the center of the Earth at the
    /// measurement time, equatorial frame, in AU.
    fn earth_observer_vect(&self) -> Vector3<f64>;
}

/// An observation from either a ground site or a satellite.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    Site(SiteObs),
    Sat(SatObs),
}

impl VObs for Observation {
    fn meas(&self) -> &VMeas {
        match self {
            Observation::Site(obs) => obs.meas(),
            Observation::Sat(obs) => obs.meas(),
        }
    }

    fn earth_observer_vect(&self) -> Vector3<f64> {
        match self {
            Observation::Site(obs) => obs.earth_observer_vect(),
            Observation::Sat(obs) => obs.earth_observer_vect(),
        }
    }
}

impl From<SiteObs> for Observation {
    fn from(obs: SiteObs) -> Self {
        Observation::Site(obs)
    }
}

impl From<SatObs> for Observation {
    fn from(obs: SatObs) -> Self {
        Observation::Sat(obs)
    }
}
