use crate::CtError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CtError::NonFinite { what, value: v })
    }
}

/// Like [`ensure_finite`] but passes infinities through.
///
/// Saturation times are legitimately `+inf` when the CT never saturates,
/// so only NaN is rejected.
pub fn ensure_not_nan(v: Real, what: &'static str) -> Result<Real, CtError> {
    if v.is_nan() {
        Err(CtError::NonFinite { what, value: v })
    } else {
        Ok(v)
    }
}
