//! # Astrometric reduction
//!
//! Turn a Sun position source and a target position source into the apparent sky
//! position of the target, corrected for light travel time.
//!
//! ## Geometry
//!
//! With `(X, Y, Z)` the origin → Sun vector and `(x, y, z)` the Sun → target vector,
//! the origin → target vector is
//!
//! ```text
//! (ξ, η, ζ) = (X + x, Y + y, Z + z)        Δ = |(ξ, η, ζ)|
//! ```
//!
//! The target is then re-evaluated at `t − τ` with `τ = Δ / c`, keeping the Sun
//! position of time `t`, and the angles are derived from the corrected vector:
//!
//! ```text
//! α = atan2(η, ξ)                     in [0, 2π)
//! δ = asin(ζ / Δ)
//! ψ = acos((ξX + ηY + ζZ) / (R Δ))    elongation, R = |(X, Y, Z)|
//! β = acos((ξx + ηy + ζz) / (r Δ))    phase angle, r from the target source
//! ```
//!
//! ## Light-time modes
//!
//! [`LightTimeMode::SinglePass`] performs exactly one correction and is the
//! default. [`LightTimeMode::Converged`] repeats the correction until
//! τ stops moving, with a hard bound on the number of re-evaluations.
//!
//! ## Failure policy
//!
//! [`AstrometricReducer::reduce`] never fails: zero distances or out-of-domain trig
//! arguments propagate as NaN/Inf and no clamping happens.
//! [`AstrometricReducer::reduce_checked`] is the opt-in boundary check returning a
//! [`SkyObsError`] for such inputs.

use log::{debug, trace};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::angles::{RightAscension, SphericalCoord};
use crate::constants::{AstronomicalUnit, Radian, ACOS_TOLERANCE, MJD, VLIGHT_AU};
use crate::magnitude::HgParams;
use crate::position_source::{PositionSource, RectPosition};
use crate::skyobs_errors::SkyObsError;

/// How the light travel time is accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LightTimeMode {
    /// One re-evaluation of the target at `t − Δ/c`.
    #[default]
    SinglePass,
    /// Re-evaluate until the light time changes by less than `tolerance` (days),
    /// with at most `max_iterations` re-evaluations of the target.
    Converged { tolerance: f64, max_iterations: u32 },
}

impl LightTimeMode {
    /// Converged mode with a 1e-12 day (≈ 0.1 µs) tolerance and at most 5 passes.
    pub fn converged() -> Self {
        LightTimeMode::Converged {
            tolerance: 1e-12,
            max_iterations: 5,
        }
    }
}

/// Apparent position of a body as seen from the origin of the position sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AstrometricPosition {
    /// Right ascension α
    pub ra: RightAscension,
    /// Declination δ, radians
    pub dec: Radian,
    /// Solar elongation ψ, radians
    pub elongation: Radian,
    /// Phase angle β, radians
    pub phase: Radian,
    /// Sun-target distance r, as reported by the target source at the retarded time
    pub r: AstronomicalUnit,
    /// Observer-target distance Δ, light-time corrected
    pub delta: AstronomicalUnit,
}

impl AstrometricPosition {
    /// Direction of the body on the sky.
    pub fn sphr(&self) -> SphericalCoord {
        SphericalCoord {
            ra: self.ra,
            dec: self.dec,
        }
    }

    /// Apparent V magnitude of the body in this geometry.
    pub fn vmag(&self, params: &HgParams) -> f64 {
        params.vmag(self.phase, self.r, self.delta)
    }
}

/// Light-time corrected geometry, before the angles are taken.
struct ReducedGeometry {
    sun: Vector3<f64>,
    target: RectPosition,
    rel: Vector3<f64>,
    delta: AstronomicalUnit,
}

impl ReducedGeometry {
    /// Arguments of asin(δ), acos(ψ) and acos(β), in that order.
    fn trig_arguments(&self) -> [f64; 3] {
        let sun_dist = self.sun.norm();
        [
            self.rel.z / self.delta,
            self.rel.dot(&self.sun) / sun_dist / self.delta,
            self.rel.dot(&self.target.pos) / self.target.r / self.delta,
        ]
    }

    fn position(&self, [sin_dec, cos_elong, cos_phase]: [f64; 3]) -> AstrometricPosition {
        AstrometricPosition {
            ra: RightAscension::from_xy(self.rel.x, self.rel.y),
            dec: sin_dec.asin(),
            elongation: cos_elong.acos(),
            phase: cos_phase.acos(),
            r: self.target.r,
            delta: self.delta,
        }
    }
}

/// Light travel time in days over `delta` AU.
pub fn light_time(delta: AstronomicalUnit) -> f64 {
    delta / VLIGHT_AU
}

/// Astrometric reduction settings.
///
/// The default reducer uses [`LightTimeMode::SinglePass`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AstrometricReducer {
    pub light_time: LightTimeMode,
}

impl AstrometricReducer {
    pub fn new(light_time: LightTimeMode) -> Self {
        AstrometricReducer { light_time }
    }

    /// Compute (α, δ, ψ, β, r, Δ) of the target at `time`.
    ///
    /// Arguments
    /// ---------
    /// * `time`: observation time (MJD)
    /// * `sun`: origin → Sun position source
    /// * `target`: Sun → target position source
    ///
    /// Return
    /// ------
    /// * the apparent position; degenerate geometry yields NaN/Inf fields
    pub fn reduce<S, T>(&self, time: MJD, sun: &S, target: &T) -> AstrometricPosition
    where
        S: PositionSource + ?Sized,
        T: PositionSource + ?Sized,
    {
        let geometry = self.geometry(time, sun, target);
        geometry.position(geometry.trig_arguments())
    }

    /// Same as [`AstrometricReducer::reduce`], rejecting degenerate inputs.
    ///
    /// Arguments of asin/acos that overshoot `[-1, 1]` by no more than
    /// [`ACOS_TOLERANCE`] are clamped to the boundary; every other accepted input
    /// gives exactly the values of [`AstrometricReducer::reduce`].
    ///
    /// Errors
    /// ------
    /// * [`SkyObsError::NonFiniteTime`] if `time` is NaN or infinite
    /// * [`SkyObsError::DegenerateDistance`] if the Sun distance, the target distance
    ///   or Δ is zero, negative or not finite
    /// * [`SkyObsError::TrigDomain`] if an asin/acos argument is out of range
    pub fn reduce_checked<S, T>(
        &self,
        time: MJD,
        sun: &S,
        target: &T,
    ) -> Result<AstrometricPosition, SkyObsError>
    where
        S: PositionSource + ?Sized,
        T: PositionSource + ?Sized,
    {
        if !time.is_finite() {
            return Err(SkyObsError::NonFiniteTime(time));
        }

        let geometry = self.geometry(time, sun, target);
        check_distance("sun", geometry.sun.norm())?;
        check_distance("target", geometry.target.r)?;
        check_distance("observer-target", geometry.delta)?;

        let names = ["declination", "elongation", "phase angle"];
        let mut args = geometry.trig_arguments();
        for (arg, quantity) in args.iter_mut().zip(names) {
            if !(arg.abs() <= 1.0 + ACOS_TOLERANCE) {
                return Err(SkyObsError::TrigDomain {
                    quantity,
                    argument: *arg,
                });
            }
            *arg = arg.clamp(-1.0, 1.0);
        }

        Ok(geometry.position(args))
    }

    fn geometry<S, T>(&self, time: MJD, sun: &S, target: &T) -> ReducedGeometry
    where
        S: PositionSource + ?Sized,
        T: PositionSource + ?Sized,
    {
        let sun_pos = sun.position(time).pos;
        let mut target_pos = target.position(time);
        let mut rel = sun_pos + target_pos.pos;
        let mut delta = rel.norm();

        match self.light_time {
            LightTimeMode::SinglePass => {
                let tau = light_time(delta);
                target_pos = target.position(time - tau);
                rel = sun_pos + target_pos.pos;
                delta = rel.norm();
            }
            LightTimeMode::Converged {
                tolerance,
                max_iterations,
            } => {
                let mut previous_tau = 0.0;
                let mut converged = false;
                for iteration in 0..max_iterations {
                    let tau = light_time(delta);
                    target_pos = target.position(time - tau);
                    rel = sun_pos + target_pos.pos;
                    delta = rel.norm();
                    trace!("light time pass {iteration}: tau = {tau} d, delta = {delta} AU");

                    if (tau - previous_tau).abs() < tolerance {
                        converged = true;
                        break;
                    }
                    previous_tau = tau;
                }
                if !converged {
                    debug!(
                        "light time not converged to {tolerance} d after {max_iterations} passes at t = {time}"
                    );
                }
            }
        }

        ReducedGeometry {
            sun: sun_pos,
            target: target_pos,
            rel,
            delta,
        }
    }
}

fn check_distance(which: &'static str, value: f64) -> Result<(), SkyObsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SkyObsError::DegenerateDistance { which, value })
    }
}

/// Single-pass astrometric reduction.
///
/// Shorthand for `AstrometricReducer::default().reduce(time, sun, target)`.
pub fn astrometric_j2000<S, T>(time: MJD, sun: &S, target: &T) -> AstrometricPosition
where
    S: PositionSource + ?Sized,
    T: PositionSource + ?Sized,
{
    AstrometricReducer::default().reduce(time, sun, target)
}
