use crate::CoreError;

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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Round to `digits` significant digits.
///
/// Non-finite values and zero pass through unchanged.
pub fn round_sig(v: Real, digits: usize) -> Real {
    if !v.is_finite() || v == 0.0 || digits == 0 {
        return v;
    }
    format!("{:.*e}", digits - 1, v).parse().unwrap_or(v)
}

/// Straight-line interpolation of `y` at `x` between `(x0, y0)` and `(x1, y1)`.
#[inline]
pub fn lerp(x: Real, x0: Real, x1: Real, y0: Real, y1: Real) -> Real {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
