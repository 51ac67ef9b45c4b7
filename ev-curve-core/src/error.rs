//! Configuration errors raised while turning user input into a [RunParams](crate::curve::RunParams).
//!
//! All of these are detected before any physics is evaluated.

use crate::utils::ValRange;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// A numeric input lies outside its declared domain
    #[error("--{field} = {value} is out of range, value must be {range}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        range: ValRange,
    },
    /// A numeric input could not be parsed
    #[error("--{field} = {text:?} is not a number")]
    NotANumber { field: &'static str, text: String },
    /// Neither variant of a required input was given
    #[error("{0}")]
    Missing(&'static str),
    /// More than one mutually exclusive input was given
    #[error("{0}")]
    Conflicting(&'static str),
    /// Only one half of an input pair was given
    #[error("{0}")]
    PartialPair(&'static str),
}
