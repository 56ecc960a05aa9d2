//! da-models: public attenuation/extinction curve models.
//!
//! Provides:
//! - Validated parameter value types (Av, tau_V, UV-bump and slope set)
//! - The `CurveModel` contract shared by every curve variant
//!   (`evaluate` in magnitudes, `attenuate` as a transmission fraction)
//! - The closed-form Calzetti (2000) starburst curve
//! - The tabulated Witt & Gordon (2000) radiative-transfer model with its
//!   derived-quantity API (extinction, flux fractions, grain properties)
//!
//! # Example
//!
//! ```no_run
//! use da_models::{CurveModel, Wg00Model};
//! use da_tables::{DirTableSource, Distribution, DustType, Geometry, Selection};
//!
//! let source = DirTableSource::new("data/wg00");
//! let selection = Selection::new(DustType::Mw, Geometry::Cloudy, Distribution::Clumpy);
//! let model = Wg00Model::new(1.0, selection, &source).unwrap();
//!
//! let ax = model.evaluate(&[0.55]).unwrap();
//! println!("A(V) = {} mag", ax[0]);
//! ```

pub mod calzetti;
pub mod error;
pub mod model;
pub mod params;
pub mod wg00;

// Re-exports for ergonomics
pub use calzetti::Calzetti00;
pub use error::{ModelError, ModelResult};
pub use model::{CurveModel, MAG_PER_TAU};
pub use params::{
    BumpAmplitude, BumpCentroid, BumpWidth, OpticalDepth, PowerLawSlope, VBandAttenuation,
};
pub use wg00::Wg00Model;
