//! da-core: stable foundation for the dust attenuation workspace.
//!
//! Contains:
//! - units (uom-tagged spectral input + conversion to canonical micron)
//! - numeric (Real + tolerances + float helpers)
//! - domain (wavelength validity domains + range validation)
//! - error (shared error types)

pub mod domain;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use domain::ValidityDomain;
pub use error::{DaError, DaResult, DomainError};
pub use numeric::*;
pub use units::*;
