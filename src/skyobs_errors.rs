use thiserror::Error;

/// Errors raised by the opt-in validation layer and the fallible constructors.
///
/// The numerical routines themselves never fail: degenerate geometry propagates
/// as NaN/Inf. These variants are only produced by
/// [`AstrometricReducer::reduce_checked`](crate::astrometry::AstrometricReducer::reduce_checked),
/// [`ParallaxConst::try_new`](crate::observers::ParallaxConst::try_new) and the site lookups.
#[derive(Error, Debug)]
pub enum SkyObsError {
    #[error("Non finite observation time: {0}")]
    NonFiniteTime(f64),

    #[error("Degenerate {which} distance: {value} AU")]
    DegenerateDistance { which: &'static str, value: f64 },

    #[error("Argument of {quantity} outside [-1, 1]: {argument}")]
    TrigDomain {
        quantity: &'static str,
        argument: f64,
    },

    #[error("NaN parallax constant: {0}")]
    NanParallax(#[from] ordered_float::FloatIsNan),

    #[error("Unknown site code: {0}")]
    UnknownSite(String),
}

impl PartialEq for SkyObsError {
    fn eq(&self, other: &Self) -> bool {
        use SkyObsError::*;
        match (self, other) {
            (NonFiniteTime(a), NonFiniteTime(b)) => a.to_bits() == b.to_bits(),
            (
                DegenerateDistance { which: wa, value: va },
                DegenerateDistance { which: wb, value: vb },
            ) => wa == wb && va.to_bits() == vb.to_bits(),
            (
                TrigDomain {
                    quantity: qa,
                    argument: aa,
                },
                TrigDomain {
                    quantity: qb,
                    argument: ab,
                },
            ) => qa == qb && aa.to_bits() == ab.to_bits(),
            (NanParallax(_), NanParallax(_)) => true,
            (UnknownSite(a), UnknownSite(b)) => a == b,
            _ => false,
        }
    }
}
