//! Table layer errors.

use thiserror::Error;

use crate::selection::Geometry;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while loading or reshaping tabulated data.
///
/// All of these are fatal configuration errors at model construction time;
/// nothing in this layer is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Table file missing or unreadable.
    #[error("Failed to read table {path}: {message}")]
    Io { path: String, message: String },

    /// Malformed row in a columnar text table.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The requested column does not exist in the loaded geometry table.
    /// Carries the geometry so the failing table is identifiable when
    /// several geometry files are configured.
    #[error("No column '{column}' in {geometry} table; requested combination has no backing data")]
    MissingColumn { column: String, geometry: Geometry },

    /// Reconstructed grid dimensions disagree with the declared layout.
    #[error("Shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The wavelength axis differs between optical-depth blocks.
    #[error("Axis mismatch: {what}")]
    AxisMismatch { what: &'static str },

    /// An interpolation axis is not strictly increasing.
    #[error("Axis not strictly increasing: {what}")]
    AxisNotIncreasing { what: &'static str },
}
