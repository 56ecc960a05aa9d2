use crate::DaError;

/// Floating point type used throughout the workspace
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, DaError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DaError::NonFinite { what, value: v })
    }
}

/// Check that a slice is strictly increasing (the requirement for every
/// interpolation axis in this workspace).
pub fn is_strictly_increasing(xs: &[Real]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn strictly_increasing() {
        assert!(is_strictly_increasing(&[0.1, 0.2, 0.55]));
        assert!(!is_strictly_increasing(&[0.1, 0.1, 0.55]));
        assert!(!is_strictly_increasing(&[0.2, 0.1]));
        assert!(is_strictly_increasing(&[]));
        assert!(is_strictly_increasing(&[1.0]));
    }
}
