// src/error.rs
use std::fmt;

/// Custom error types for the bs-greeks library
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Option type outside the supported {Call, Put} set
    InvalidPayoff { payoff: String },

    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid sweep configuration
    InvalidConfiguration { field: String, reason: String },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidPayoff { payoff } => {
                write!(
                    f,
                    "Invalid payoff type '{}': expected 'Call' or 'Put'",
                    payoff
                )
            }
            PricingError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PricingError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for bs-greeks operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        if value <= 0.0 {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate sweep point count
    pub fn validate_points(points: usize) -> PricingResult<()> {
        if points < 2 {
            Err(PricingError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "must be at least 2".to_string(),
            })
        } else if points > 10_000_000 {
            Err(PricingError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "exceeds maximum allowed (10 million)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
