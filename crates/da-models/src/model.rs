//! The shared curve-model contract.
//!
//! Every attenuation/extinction curve in this workspace, closed-form or
//! tabulated, evaluates through the same path: normalize input to micron,
//! validate against the model's declared domain, dispatch to the
//! variant-specific formula or interpolation, return one output per input.

use da_core::{to_microns, Spectral, ValidityDomain};
use tracing::warn;

use crate::error::ModelResult;

/// Magnitudes per unit optical depth: 2.5 / ln(10), rounded as in the
/// attenuation literature.
pub const MAG_PER_TAU: f64 = 1.0857;

/// A wavelength-dependent attenuation/extinction curve.
///
/// Implementations are pure functions of their construction-time state:
/// evaluation never mutates, so a model can be shared across threads freely.
pub trait CurveModel {
    /// Short curve name used in error messages and diagnostics.
    fn label(&self) -> &'static str;

    /// The wavelength interval (micron) over which this curve is defined.
    fn domain(&self) -> ValidityDomain;

    /// Evaluate the curve in magnitudes at wavelengths `x_um` (micron).
    ///
    /// The output vector matches the input shape. Inputs outside
    /// [`domain`](Self::domain) fail with a domain error.
    fn evaluate(&self, x_um: &[f64]) -> ModelResult<Vec<f64>>;

    /// Fractional flux transmission `10^(-0.4 * evaluate(x))`, through the
    /// same validation path as [`evaluate`](Self::evaluate).
    fn attenuate(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
        let ax = self.evaluate(x_um)?;
        Ok(ax.iter().map(|a| 10.0_f64.powf(-0.4 * a)).collect())
    }

    /// [`evaluate`](Self::evaluate) over unit-tagged input, normalized to
    /// micron first.
    fn evaluate_spectral(&self, x: &[Spectral]) -> ModelResult<Vec<f64>> {
        let x_um = to_microns(x)?;
        self.evaluate(&x_um)
    }

    /// [`attenuate`](Self::attenuate) over unit-tagged input.
    fn attenuate_spectral(&self, x: &[Spectral]) -> ModelResult<Vec<f64>> {
        let x_um = to_microns(x)?;
        self.attenuate(&x_um)
    }
}

/// Clip slightly negative magnitude-space values to zero.
///
/// Interpolation noise can push a tabulated or composed curve a hair below
/// zero, which has no transmission-compatible meaning in magnitude space.
/// That is a recoverable numerical artifact, not a domain violation: clip and
/// emit a warning rather than fail.
pub(crate) fn clip_negative(values: &mut [f64], label: &'static str) {
    let mut clipped = 0usize;
    for v in values.iter_mut() {
        if *v < 0.0 {
            *v = 0.0;
            clipped += 1;
        }
    }
    if clipped > 0 {
        warn!(
            curve = label,
            count = clipped,
            "negative curve values clipped to zero"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use da_core::DomainError;

    /// Minimal flat curve for exercising the trait's default methods.
    struct Flat {
        level: f64,
        domain: ValidityDomain,
    }

    impl CurveModel for Flat {
        fn label(&self) -> &'static str {
            "flat"
        }

        fn domain(&self) -> ValidityDomain {
            self.domain
        }

        fn evaluate(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
            self.domain.validate(x_um, self.label())?;
            Ok(vec![self.level; x_um.len()])
        }
    }

    fn flat(level: f64) -> Flat {
        Flat {
            level,
            domain: ValidityDomain::new(0.1, 3.0).unwrap(),
        }
    }

    #[test]
    fn attenuate_is_exact_power_of_evaluate() {
        let m = flat(2.5);
        let frac = m.attenuate(&[0.5, 1.0]).unwrap();
        for f in frac {
            assert_eq!(f, 10.0_f64.powf(-0.4 * 2.5));
        }
    }

    #[test]
    fn zero_magnitudes_transmit_fully() {
        let m = flat(0.0);
        assert_eq!(m.attenuate(&[1.0]).unwrap(), vec![1.0]);
    }

    #[test]
    fn attenuate_validates_domain_like_evaluate() {
        let m = flat(1.0);
        let err = m.attenuate(&[5.0]).unwrap_err();
        assert!(matches!(
            err,
            crate::ModelError::Domain(DomainError { label: "flat", .. })
        ));
    }

    #[test]
    fn spectral_input_normalizes_then_validates() {
        let m = flat(1.0);
        // 1/0.55 inverse micron is the V band, inside the domain.
        let v = m
            .evaluate_spectral(&[da_core::inv_um(1.0 / 0.55)])
            .unwrap();
        assert_eq!(v, vec![1.0]);
        // 0.01 um is outside [0.1, 3.0].
        assert!(m.evaluate_spectral(&[da_core::um(0.01)]).is_err());
    }

    #[test]
    fn clip_negative_only_touches_negatives() {
        let mut v = vec![-1e-9, 0.3, -0.2, 0.0];
        clip_negative(&mut v, "test");
        assert_eq!(v, vec![0.0, 0.3, 0.0, 0.0]);
    }

    #[test]
    fn mag_per_tau_matches_definition() {
        // 2.5 / ln 10 = 1.0857362...; the tabulated engine uses the
        // conventional 4-decimal rounding.
        assert!((MAG_PER_TAU - 2.5 / 10.0_f64.ln()).abs() < 1e-4);
    }
}
