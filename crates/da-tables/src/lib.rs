//! da-tables: tabulated radiative-transfer data layer.
//!
//! Provides:
//! - Selection enums (dust type, geometry, clump distribution)
//! - Column-table representation, columnar text parser, and the
//!   `TableSource` collaborator contract
//! - Grid reconstruction from the flat WG00 row layout (the interleaved
//!   MW/SMC block stride) into `[wavelength][tau_V]` grids
//! - Bilinear (2-D) and linear (1-D) interpolation with boundary clamping
//! - Embedded dust-grain constants (albedo, scattering asymmetry) and the
//!   fixed optical-depth axis
//!
//! # Architecture
//!
//! The `TableSource` trait isolates the model layer from where the table
//! bytes come from. The shipped `DirTableSource` reads the columnar text
//! files from a directory; tests substitute in-memory sources. Everything
//! downstream of `build_grid` works in canonical micron wavelength.

pub mod constants;
pub mod error;
pub mod grid;
pub mod interp;
pub mod selection;
pub mod source;

// Re-exports for ergonomics
pub use constants::{albedo_table, asymmetry_table, TAU_V_GRID, WAVELENGTH_SAMPLES};
pub use error::{TableError, TableResult};
pub use grid::{build_grid, RtGrid};
pub use interp::{BilinearGrid, LinearTable};
pub use selection::{Distribution, DustType, Geometry, Selection};
pub use source::{ColumnTable, DirTableSource, TableSource};
