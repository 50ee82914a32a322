//! Angle types for sky positions.
//!
//! Plain angles are [`Radian`] values with no wrap invariant. Right ascension is the one
//! angle with a normalization policy: it always lives in `[0, 2π)`, which
//! [`RightAscension`] enforces at construction.

use serde::{Deserialize, Serialize};

use crate::constants::{Radian, DPI};

/// Right ascension in radians, normalized to `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct RightAscension(Radian);

impl RightAscension {
    /// Wrap `angle` into `[0, 2π)`.
    ///
    /// Non-finite input stays non-finite.
    pub fn new(angle: Radian) -> Self {
        let mut alpha = angle % DPI;
        if alpha < 0.0 {
            alpha += DPI;
        }
        // -tiny + 2π rounds to 2π
        if alpha >= DPI {
            alpha -= DPI;
        }
        RightAscension(alpha)
    }

    /// Right ascension from the Cartesian components of a direction, via `atan2(y, x)`.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::new(y.atan2(x))
    }

    pub fn radians(self) -> Radian {
        self.0
    }

    pub fn hours(self) -> f64 {
        self.0 * 24.0 / DPI
    }
}

impl From<f64> for RightAscension {
    fn from(angle: f64) -> Self {
        RightAscension::new(angle)
    }
}

impl From<RightAscension> for f64 {
    fn from(ra: RightAscension) -> Self {
        ra.0
    }
}

/// A direction on the celestial sphere (equatorial J2000).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoord {
    /// Right ascension, radians in `[0, 2π)`
    pub ra: RightAscension,
    /// Declination, radians
    pub dec: Radian,
}

impl SphericalCoord {
    pub fn new(ra: Radian, dec: Radian) -> Self {
        SphericalCoord {
            ra: RightAscension::new(ra),
            dec,
        }
    }
}
