use thiserror::Error;

pub type DaResult<T> = Result<T, DaError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DaError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

/// An evaluation input fell outside a model's declared valid wavelength
/// domain. Carries everything needed to trace the failure back to the
/// offending model: the value, both bounds, and the model label.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "Input x = {value} outside of range defined for {label} \
     [{low} <= x <= {high}, x has units micron]"
)]
pub struct DomainError {
    pub label: &'static str,
    pub value: f64,
    pub low: f64,
    pub high: f64,
}
