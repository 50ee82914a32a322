//! # skyobs
//!
//! Apparent positions and brightness of solar-system bodies as seen from an observing
//! site.
//!
//! - [`astrometry`]: light-time corrected reduction of a Sun source and a target source
//!   into right ascension, declination, elongation, phase angle and distances.
//! - [`magnitude`]: IAU H-G apparent magnitude.
//! - [`observers`]: parallax constants and the geocenter → observer vector.
//! - [`observations`]: measurements, site/satellite observations and arcs.
//!
//! ```rust
//! use skyobs::astrometry::astrometric_j2000;
//! use skyobs::magnitude::HgParams;
//! use skyobs::position_source::RectPosition;
//!
//! // geocenter → Sun and Sun → asteroid, equatorial J2000, AU
//! let sun = |_t: f64| RectPosition::new(0.95, -0.28, -0.12);
//! let asteroid = |t: f64| RectPosition::new(-2.1 + 1e-3 * (t - 60000.0), 1.4, 0.6);
//!
//! let pos = astrometric_j2000(60000.0, &sun, &asteroid);
//! let vmag = pos.vmag(&HgParams::new(16.2, 0.15));
//! assert!(pos.delta > 0.0 && vmag > 16.2);
//! ```

pub mod angles;
pub mod astrometry;
pub mod constants;
pub mod magnitude;
pub mod observations;
pub mod observers;
pub mod position_source;
pub mod skyobs_errors;
pub mod time;

pub use astrometry::{astrometric_j2000, AstrometricPosition, AstrometricReducer, LightTimeMode};
pub use constants::ParallaxMap;
pub use magnitude::apparent_magnitude;
pub use observations::{Observation, ObservationArc, SatObs, SiteObs, VMeas, VObs};
pub use observers::{earth_observer_vect, ParallaxConst};
pub use skyobs_errors::SkyObsError;
