//! Closed-form starburst attenuation curve (Calzetti et al. 2000).
//!
//! Kept as the minimal closed-form implementor of [`CurveModel`] so the
//! shared validation and attenuation contract is exercised by both variant
//! kinds; the broader closed-form curve families are out of scope here.

use da_core::ValidityDomain;

use crate::error::ModelResult;
use crate::model::{clip_negative, CurveModel};
use crate::params::VBandAttenuation;

const RV: f64 = 4.05;

/// Valid wavelength range, micron.
const X_RANGE: (f64, f64) = (0.12, 2.2);

/// The Calzetti et al. (2000) attenuation curve, parameterized by the V-band
/// attenuation Av. `evaluate` scales linearly with Av and is normalized so
/// the V-band (0.55 micron) value is Av itself.
#[derive(Debug, Clone, Copy)]
pub struct Calzetti00 {
    av: VBandAttenuation,
}

impl Calzetti00 {
    pub fn new(av: f64) -> ModelResult<Self> {
        Ok(Self {
            av: VBandAttenuation::new(av)?,
        })
    }

    pub fn av(&self) -> f64 {
        self.av.value()
    }

    /// The reddening curve k(λ) = A(λ)/E(B-V), piecewise in 1/λ.
    fn k_lambda(x_um: f64) -> f64 {
        let inv = 1.0 / x_um;
        if x_um < 0.63 {
            2.659 * (-2.156 + 1.509 * inv - 0.198 * inv * inv + 0.011 * inv * inv * inv) + RV
        } else {
            2.659 * (-1.857 + 1.040 * inv) + RV
        }
    }
}

impl Default for Calzetti00 {
    fn default() -> Self {
        Self {
            av: VBandAttenuation::default(),
        }
    }
}

impl CurveModel for Calzetti00 {
    fn label(&self) -> &'static str {
        "C00"
    }

    fn domain(&self) -> ValidityDomain {
        ValidityDomain {
            low: X_RANGE.0,
            high: X_RANGE.1,
        }
    }

    fn evaluate(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
        self.domain().validate(x_um, self.label())?;
        let av = self.av.value();
        let mut ax: Vec<f64> = x_um
            .iter()
            .map(|&x| Self::k_lambda(x) / RV * av)
            .collect();
        clip_negative(&mut ax, self.label());
        Ok(ax)
    }
}
