use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::angles::{RightAscension, SphericalCoord};
use crate::constants::{Radian, MJD};
use crate::time::{epoch_from_mjd, mjd_from_epoch};

/// A visual measurement in units convenient for computations.
///
/// # Fields
///
/// * `mjd` - time of observation, MJD (UTC)
/// * `sphr` - observed direction, radians
/// * `vmag` - apparent magnitude normalized to "V", NaN if not measured.
///   The actual observed band is not represented.
/// * `qual` - quality identifier, typically the 3 character MPC obscode but any
///   string associating the measurement with a quality level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VMeas {
    mjd: MJD,
    sphr: SphericalCoord,
    vmag: f64,
    qual: String,
}

impl VMeas {
    pub fn new(mjd: MJD, sphr: SphericalCoord, vmag: f64, qual: impl Into<String>) -> Self {
        VMeas {
            mjd,
            sphr,
            vmag,
            qual: qual.into(),
        }
    }

    /// Build a measurement from a hifitime epoch.
    pub fn from_epoch(
        epoch: &Epoch,
        sphr: SphericalCoord,
        vmag: f64,
        qual: impl Into<String>,
    ) -> Self {
        VMeas::new(mjd_from_epoch(epoch), sphr, vmag, qual)
    }

    pub fn mjd(&self) -> MJD {
        self.mjd
    }

    /// Measurement time as a hifitime epoch (UTC).
    pub fn epoch(&self) -> Epoch {
        epoch_from_mjd(self.mjd)
    }

    pub fn sphr(&self) -> &SphericalCoord {
        &self.sphr
    }

    pub fn ra(&self) -> RightAscension {
        self.sphr.ra
    }

    pub fn dec(&self) -> Radian {
        self.sphr.dec
    }

    pub fn vmag(&self) -> f64 {
        self.vmag
    }

    pub fn qual(&self) -> &str {
        &self.qual
    }
}
