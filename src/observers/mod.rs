//! # Observer & Site Geometry
//!
//! This module gathers the **ground site** description and the geometry placing an
//! observer relative to the center of the Earth:
//!
//! - [`ParallaxConst`](crate::observers::ParallaxConst) stores a site's longitude (in
//!   **circles**) and its geocentric parallax constants ρ·cosφ, ρ·sinφ (in **AU**).
//! - [`earth_observer_vect`](crate::observers::earth_observer_vect) rotates the site with
//!   the local sidereal time to give the geocenter → observer vector in the equatorial
//!   frame.
//! - [`geodetic_to_parallax`](crate::observers::geodetic_to_parallax) converts geodetic
//!   latitude/elevation into parallax constants (Earth radii) on the oblate ellipsoid.
//!
//! ## Frames & conventions
//!
//! ```text
//! site (λ, ρcosφ, ρsinφ)  --(θ = GMST + λ)-->  equatorial (ρcosφ·cosθ, ρcosφ·sinθ, ρsinφ)
//! ```
//!
//! The rotation is purely the mean sidereal rotation: no precession, nutation or polar
//! motion is applied.
//!
//! ## Units
//!
//! - Longitudes: **circles** inside [`ParallaxConst`](crate::observers::ParallaxConst),
//!   **degrees** east positive at the constructors.
//! - Parallax constants: **AU** inside [`ParallaxConst`](crate::observers::ParallaxConst),
//!   **Earth radii** for [`ParallaxConst::from_earth_radii`](crate::observers::ParallaxConst::from_earth_radii)
//!   (the unit of the MPC observatory code list).
//! - Elevations: **meters**.
//!
//! ## Site tables
//!
//! A [`ParallaxMap`](crate::constants::ParallaxMap) maps a site code to shared parallax
//! constants. It is filled by the caller, typically from an observatory code list;
//! [`parallax_for`](crate::observers::parallax_for) is the fallible lookup.

mod observer_position;
mod parallax;

pub use observer_position::earth_observer_vect;
pub use parallax::{geodetic_to_parallax, lat_alt_to_parallax, parallax_for, ParallaxConst};
