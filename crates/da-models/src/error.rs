//! Model layer errors.

use da_core::{DaError, DomainError};
use da_tables::TableError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors surfaced by curve models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A constructed or assigned parameter violates its declared bound.
    /// Surfaced at the point of assignment, never recovered automatically.
    #[error("parameter {name} = {value} out of range [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Evaluation input outside the model's declared wavelength domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The requested selection has no backing data, or the data source is
    /// missing/corrupt. Fatal at construction.
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Core(#[from] DaError),
}
