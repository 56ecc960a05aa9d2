//! Validated model parameters.
//!
//! Each named parameter is a small value type whose constructor and setter
//! enforce its range invariant. A model holding one of these types can never
//! observe an out-of-range value: validation happens fail-fast at assignment,
//! before any grid or table is touched, and there is no silent clamping.

use crate::error::{ModelError, ModelResult};

fn checked(name: &'static str, value: f64, min: f64, max: f64) -> ModelResult<f64> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            min,
            max,
        })
    }
}

/// V-band attenuation Av in magnitudes. Non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VBandAttenuation(f64);

impl VBandAttenuation {
    pub const MIN: f64 = 0.0;

    pub fn new(value: f64) -> ModelResult<Self> {
        checked("Av", value, Self::MIN, f64::INFINITY).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn set(&mut self, value: f64) -> ModelResult<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

impl Default for VBandAttenuation {
    fn default() -> Self {
        Self(1.0)
    }
}

/// V-band optical depth tau_V for the radiative-transfer grids. The valid
/// range is the span of the simulation's optical-depth axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpticalDepth(f64);

impl OpticalDepth {
    pub const MIN: f64 = 0.25;
    pub const MAX: f64 = 50.0;

    pub fn new(value: f64) -> ModelResult<Self> {
        checked("tau_V", value, Self::MIN, Self::MAX).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn set(&mut self, value: f64) -> ModelResult<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

impl Default for OpticalDepth {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Central wavelength of the UV bump, in micron. Non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumpCentroid(f64);

impl BumpCentroid {
    pub fn new(value: f64) -> ModelResult<Self> {
        checked("x0", value, 0.0, f64::INFINITY).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn set(&mut self, value: f64) -> ModelResult<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

impl Default for BumpCentroid {
    fn default() -> Self {
        Self(0.2175)
    }
}

/// Width (FWHM) of the UV bump, in micron. Non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumpWidth(f64);

impl BumpWidth {
    pub fn new(value: f64) -> ModelResult<Self> {
        checked("gamma", value, 0.0, f64::INFINITY).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn set(&mut self, value: f64) -> ModelResult<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

impl Default for BumpWidth {
    fn default() -> Self {
        Self(0.035)
    }
}

/// Amplitude of the UV bump. Non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BumpAmplitude(f64);

impl BumpAmplitude {
    pub fn new(value: f64) -> ModelResult<Self> {
        checked("ampl", value, 0.0, f64::INFINITY).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn set(&mut self, value: f64) -> ModelResult<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

/// Power-law slope modifying a reddening curve. The common range is
/// [-3, 3]; one curve family constrains it to [-2, 2], available through
/// [`new_narrow`](Self::new_narrow).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PowerLawSlope(f64);

impl PowerLawSlope {
    pub const MIN: f64 = -3.0;
    pub const MAX: f64 = 3.0;
    pub const NARROW_MIN: f64 = -2.0;
    pub const NARROW_MAX: f64 = 2.0;

    pub fn new(value: f64) -> ModelResult<Self> {
        checked("slope", value, Self::MIN, Self::MAX).map(Self)
    }

    /// The narrower variant used by the curve family that bounds the slope
    /// to [-2, 2].
    pub fn new_narrow(value: f64) -> ModelResult<Self> {
        checked("slope", value, Self::NARROW_MIN, Self::NARROW_MAX).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn set(&mut self, value: f64) -> ModelResult<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn av_rejects_negative() {
        assert!(VBandAttenuation::new(0.0).is_ok());
        assert!(VBandAttenuation::new(2.5).is_ok());
        let err = VBandAttenuation::new(-0.1).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidParameter { name: "Av", .. }
        ));
    }

    #[test]
    fn tau_v_bounds() {
        assert!(OpticalDepth::new(0.25).is_ok());
        assert!(OpticalDepth::new(50.0).is_ok());
        assert!(OpticalDepth::new(0.1).is_err());
        assert!(OpticalDepth::new(50.0001).is_err());
        assert!(OpticalDepth::new(f64::NAN).is_err());
    }

    #[test]
    fn setter_validates_like_constructor() {
        let mut tau = OpticalDepth::default();
        assert!(tau.set(25.0).is_ok());
        assert_eq!(tau.value(), 25.0);
        // Failed assignment leaves the old value in place.
        assert!(tau.set(0.0).is_err());
        assert_eq!(tau.value(), 25.0);
    }

    #[test]
    fn slope_ranges() {
        assert!(PowerLawSlope::new(-3.0).is_ok());
        assert!(PowerLawSlope::new(3.0).is_ok());
        assert!(PowerLawSlope::new(3.1).is_err());
        assert!(PowerLawSlope::new_narrow(2.0).is_ok());
        assert!(PowerLawSlope::new_narrow(2.5).is_err());
    }

    #[test]
    fn bump_defaults_match_the_literature() {
        assert_eq!(BumpCentroid::default().value(), 0.2175);
        assert_eq!(BumpWidth::default().value(), 0.035);
        assert_eq!(BumpAmplitude::default().value(), 0.0);
    }

    #[test]
    fn error_message_names_parameter_and_bounds() {
        let msg = OpticalDepth::new(0.1).unwrap_err().to_string();
        assert!(msg.contains("tau_V"));
        assert!(msg.contains("0.25"));
        assert!(msg.contains("50"));
    }
}
