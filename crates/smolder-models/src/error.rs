//! Error types for rule construction.

use std::fmt;

/// Errors arising from rule configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RuleError {
    /// A probability constant is outside `[0, 1]` or not finite.
    InvalidProbability {
        /// Which constant was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} must be a probability in [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// Validate a probability constant.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<f64, RuleError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(RuleError::InvalidProbability { name, value });
    }
    Ok(value)
}
