//! Unit-tagged spectral input.
//!
//! Attenuation curves are evaluated against a wavelength-like coordinate that
//! callers may hold as a wavelength, a wavenumber, or a frequency. The models
//! themselves work exclusively in micron wavelength; this module is the
//! conversion boundary. Untagged `f64` input elsewhere in the workspace is by
//! contract already in micron.
//!
//! Wavelengths and frequencies are carried as uom quantities so the caller
//! can construct them in whatever unit is handy. Wavenumber is carried as a
//! plain inverse-micron `f64` (spectroscopy convention; uom has no idiomatic
//! reciprocal-length quantity for it).

use uom::si::f64::{Frequency as UomFrequency, Length as UomLength};

use crate::error::{DaError, DaResult};
use crate::numeric::ensure_finite;

/// Public canonical spectral quantity types (SI, f64)
pub type Wavelength = UomLength;
pub type Frequency = UomFrequency;

/// Speed of light [m/s], used for frequency -> wavelength conversion.
pub const C_M_PER_S: f64 = 299_792_458.0;

/// A spectral coordinate tagged with its physical interpretation.
#[derive(Debug, Clone, Copy)]
pub enum Spectral {
    /// A wavelength (any length unit via uom)
    Wavelength(Wavelength),
    /// A wavenumber in inverse micron
    Wavenumber(f64),
    /// A frequency (any frequency unit via uom)
    Frequency(Frequency),
}

#[inline]
pub fn um(v: f64) -> Spectral {
    use uom::si::length::micrometer;
    Spectral::Wavelength(Wavelength::new::<micrometer>(v))
}

#[inline]
pub fn nm(v: f64) -> Spectral {
    use uom::si::length::nanometer;
    Spectral::Wavelength(Wavelength::new::<nanometer>(v))
}

#[inline]
pub fn angstrom(v: f64) -> Spectral {
    use uom::si::length::angstrom;
    Spectral::Wavelength(Wavelength::new::<angstrom>(v))
}

#[inline]
pub fn inv_um(v: f64) -> Spectral {
    Spectral::Wavenumber(v)
}

#[inline]
pub fn thz(v: f64) -> Spectral {
    use uom::si::frequency::terahertz;
    Spectral::Frequency(Frequency::new::<terahertz>(v))
}

impl Spectral {
    /// Convert to the canonical micron wavelength.
    ///
    /// Fails on non-finite input and on zero/negative wavenumbers or
    /// frequencies, where the reciprocal is meaningless.
    pub fn to_micron(&self) -> DaResult<f64> {
        match *self {
            Spectral::Wavelength(w) => {
                use uom::si::length::micrometer;
                ensure_finite(w.get::<micrometer>(), "wavelength")
            }
            Spectral::Wavenumber(k) => {
                let k = ensure_finite(k, "wavenumber")?;
                if k <= 0.0 {
                    return Err(DaError::InvalidArg {
                        what: "wavenumber must be positive",
                    });
                }
                Ok(1.0 / k)
            }
            Spectral::Frequency(f) => {
                use uom::si::frequency::hertz;
                let hz = ensure_finite(f.get::<hertz>(), "frequency")?;
                if hz <= 0.0 {
                    return Err(DaError::InvalidArg {
                        what: "frequency must be positive",
                    });
                }
                Ok(C_M_PER_S / hz * 1e6)
            }
        }
    }
}

/// Normalize a slice of tagged coordinates into micron wavelengths.
pub fn to_microns(xs: &[Spectral]) -> DaResult<Vec<f64>> {
    xs.iter().map(Spectral::to_micron).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{nearly_equal, Tolerances};

    #[test]
    fn wavelength_constructors_agree() {
        let tol = Tolerances::default();
        assert!(nearly_equal(um(0.55).to_micron().unwrap(), 0.55, tol));
        assert!(nearly_equal(nm(550.0).to_micron().unwrap(), 0.55, tol));
        assert!(nearly_equal(angstrom(5500.0).to_micron().unwrap(), 0.55, tol));
    }

    #[test]
    fn wavenumber_is_reciprocal() {
        let x = inv_um(1.0 / 0.55).to_micron().unwrap();
        assert!((x - 0.55).abs() < 1e-12);
    }

    #[test]
    fn frequency_converts_through_c() {
        // 0.55 um corresponds to c / 0.55e-6 m ~ 545.077 THz
        let f = thz(C_M_PER_S / 0.55e-6 / 1e12);
        let x = f.to_micron().unwrap();
        assert!((x - 0.55).abs() < 1e-9);
    }

    #[test]
    fn reject_nonpositive_reciprocals() {
        assert!(inv_um(0.0).to_micron().is_err());
        assert!(inv_um(-2.0).to_micron().is_err());
        assert!(thz(0.0).to_micron().is_err());
    }

    #[test]
    fn reject_non_finite() {
        assert!(inv_um(f64::NAN).to_micron().is_err());
        let err = um(f64::INFINITY).to_micron().unwrap_err();
        assert!(matches!(err, DaError::NonFinite { what: "wavelength", .. }));
        let err = thz(f64::NAN).to_micron().unwrap_err();
        assert!(matches!(err, DaError::NonFinite { what: "frequency", .. }));
    }

    #[test]
    fn batch_normalization_preserves_order() {
        let xs = [um(0.2), inv_um(2.0), nm(1000.0)];
        let v = to_microns(&xs).unwrap();
        assert_eq!(v.len(), 3);
        assert!((v[0] - 0.2).abs() < 1e-12);
        assert!((v[1] - 0.5).abs() < 1e-12);
        assert!((v[2] - 1.0).abs() < 1e-12);
    }
}
