//! # Position sources
//!
//! The reducer does not propagate orbits or read ephemerides itself: it is handed two
//! **position sources**, one for the Sun and one for the target body, each returning
//! rectangular equatorial J2000 coordinates in AU as a function of time.
//!
//! Both sources must share the same origin (the observer, or a proxy such as the
//! geocenter): the sun source gives the origin → Sun vector, the target source gives
//! the Sun → target vector, so that their sum is the origin → target vector.
//!
//! Any `Fn(MJD) -> RectPosition` closure is a [`PositionSource`], so a caller may plug
//! in a JPL reader, a two-body propagator or a fixed test geometry with no adapter.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, MJD};

/// Rectangular position in AU together with its norm.
///
/// `r` is supplied by the source and is **not** checked against `pos`; it is used as is
/// in the phase angle computation, so sources must keep both consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPosition {
    pub pos: Vector3<f64>,
    pub r: AstronomicalUnit,
}

impl RectPosition {
    /// Build a position from its components, `r` is the Euclidean norm.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let pos = Vector3::new(x, y, z);
        RectPosition { pos, r: pos.norm() }
    }

    /// Build a position with a caller-provided norm.
    pub fn with_norm(pos: Vector3<f64>, r: AstronomicalUnit) -> Self {
        RectPosition { pos, r }
    }
}

impl From<Vector3<f64>> for RectPosition {
    fn from(pos: Vector3<f64>) -> Self {
        RectPosition { pos, r: pos.norm() }
    }
}

/// A time → position function.
///
/// Implementations must be total over the times the reducer is called with.
pub trait PositionSource {
    fn position(&self, time: MJD) -> RectPosition;
}

impl<F> PositionSource for F
where
    F: Fn(MJD) -> RectPosition,
{
    fn position(&self, time: MJD) -> RectPosition {
        self(time)
    }
}

#[cfg(test)]
mod position_source_test {
    use super::*;

    #[test]
    fn test_rect_position_norm() {
        let p = RectPosition::new(3.0, 4.0, 12.0);
        assert_eq!(p.r, 13.0);
        assert_eq!(p, RectPosition::from(Vector3::new(3.0, 4.0, 12.0)));

        let q = RectPosition::with_norm(Vector3::new(1.0, 0.0, 0.0), 2.0);
        assert_eq!(q.r, 2.0);
    }

    #[test]
    fn test_closure_source() {
        let moving = |t: MJD| RectPosition::new(1.0 + 0.01 * t, 0.0, 0.0);
        assert_eq!(moving.position(0.0).pos.x, 1.0);
        assert_eq!(moving.position(100.0).pos.x, 2.0);
    }
}
