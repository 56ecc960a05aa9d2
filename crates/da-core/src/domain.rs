//! Wavelength validity domains and range validation.
//!
//! Every curve model declares the wavelength interval (in canonical micron)
//! over which it is defined. Evaluation input is checked against that
//! interval up front; an out-of-domain value is a hard error, never silently
//! clamped. (Interpolators clamp at *grid* boundaries, but that is an
//! internal numerical policy inside the declared domain, not a substitute
//! for this check.)

use crate::error::{DaError, DomainError};

/// A closed wavelength interval `[low, high]` in micron.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidityDomain {
    pub low: f64,
    pub high: f64,
}

impl ValidityDomain {
    /// Create a domain; `low` must be strictly below `high` and both finite.
    pub fn new(low: f64, high: f64) -> Result<Self, DaError> {
        if !low.is_finite() {
            return Err(DaError::NonFinite {
                what: "domain low bound",
                value: low,
            });
        }
        if !high.is_finite() {
            return Err(DaError::NonFinite {
                what: "domain high bound",
                value: high,
            });
        }
        if low >= high {
            return Err(DaError::InvalidArg {
                what: "domain low bound must be below high bound",
            });
        }
        Ok(Self { low, high })
    }

    /// Check every element of `x` against this domain.
    ///
    /// Pure check, no side effects. Vectorized: all elements are subject to
    /// the check and the first violation found is reported, tagged with
    /// `label` so the failure traces back to the offending model. NaN never
    /// compares inside the interval and is rejected like any other
    /// out-of-range value.
    pub fn validate(&self, x: &[f64], label: &'static str) -> Result<(), DomainError> {
        for &v in x {
            if !(v >= self.low && v <= self.high) {
                return Err(DomainError {
                    label,
                    value: v,
                    low: self.low,
                    high: self.high,
                });
            }
        }
        Ok(())
    }

    /// Scalar convenience over [`validate`](Self::validate).
    pub fn validate_scalar(&self, x: f64, label: &'static str) -> Result<(), DomainError> {
        self.validate(&[x], label)
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.low && x <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_inverted_bounds() {
        assert!(ValidityDomain::new(2.2, 0.12).is_err());
        assert!(ValidityDomain::new(1.0, 1.0).is_err());
        assert!(ValidityDomain::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn validate_inside_and_on_bounds() {
        let d = ValidityDomain::new(0.1, 3.0001).unwrap();
        assert!(d.validate(&[0.1, 0.55, 3.0001], "test").is_ok());
    }

    #[test]
    fn validate_rejects_just_outside() {
        let d = ValidityDomain::new(0.1, 3.0001).unwrap();
        assert!(d.validate_scalar(0.1 - 1e-6, "test").is_err());
        assert!(d.validate_scalar(3.0001 + 1e-6, "test").is_err());
        assert!(d.validate_scalar(0.1 + 1e-6, "test").is_ok());
    }

    #[test]
    fn error_carries_label_and_bounds() {
        let d = ValidityDomain::new(0.12, 2.2).unwrap();
        let err = d.validate(&[0.55, 5.0], "C00").unwrap_err();
        assert_eq!(err.label, "C00");
        assert_eq!(err.value, 5.0);
        let msg = err.to_string();
        assert!(msg.contains("C00"));
        assert!(msg.contains("0.12"));
        assert!(msg.contains("2.2"));
    }

    #[test]
    fn nan_is_rejected() {
        let d = ValidityDomain::new(0.1, 3.0).unwrap();
        assert!(d.validate(&[f64::NAN], "test").is_err());
    }

    #[test]
    fn empty_input_is_vacuously_valid() {
        let d = ValidityDomain::new(0.1, 3.0).unwrap();
        assert!(d.validate(&[], "test").is_ok());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn validate_agrees_with_contains(x in -10.0_f64..10.0) {
                let d = ValidityDomain::new(0.1, 3.0).unwrap();
                prop_assert_eq!(d.validate_scalar(x, "test").is_ok(), d.contains(x));
            }

            #[test]
            fn all_elements_checked(inside in 0.1_f64..3.0, outside in 5.0_f64..10.0) {
                let d = ValidityDomain::new(0.1, 3.0).unwrap();
                // The violation is found regardless of position.
                prop_assert!(d.validate(&[inside, outside], "test").is_err());
                prop_assert!(d.validate(&[outside, inside], "test").is_err());
            }
        }
    }
}
