use crate::{PdError, PdResult};

/// Floating point type used throughout pumpdoc
pub type Real = f64;

/// Absolute + relative tolerance pair for float comparisons.
///
/// The defaults suit the closed-form sizing figures, whose only error
/// source is unit-conversion roundoff.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Round to a fixed number of decimal places.
///
/// Display-oriented quantities (suggested motor rating) are specified to one
/// decimal, so the rounding happens in the model, not the frontend.
pub fn round_to(v: Real, decimals: u32) -> Real {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

pub fn ensure_finite(v: Real, what: &'static str) -> PdResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PdError::NonFinite { what, value: v })
    }
}
