//! Error types for the Compensation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating compensation.

use thiserror::Error;

/// The main error type for the Compensation Engine.
///
/// Every calculator stage returns this error type, so failures propagate
/// with `?` up to the orchestrator which converts them into a
/// caller-facing [`CalculationError`](crate::calculation::CalculationError).
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::UnknownRoleLevel {
///     value: "Manager".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid role level: Manager");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The role level does not match any configured role.
    #[error("Invalid role level: {value}")]
    UnknownRoleLevel {
        /// The literal role string that was rejected.
        value: String,
    },

    /// A numeric input was negative or could not be read as a number.
    #[error("Invalid numeric input '{field}': {message}")]
    InvalidNumericInput {
        /// The name of the offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A decimal operation exceeded the representable range.
    #[error("Arithmetic overflow during {operation}")]
    ArithmeticOverflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates a rule table constraint.
    #[error("Invalid rule configuration: {message}")]
    InvalidConfig {
        /// A description of the violated constraint.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for a negative numeric input.
    pub fn negative(field: &str) -> Self {
        EngineError::InvalidNumericInput {
            field: field.to_string(),
            message: "must be non-negative".to_string(),
        }
    }

    /// Shorthand for an overflowing decimal operation.
    pub fn overflow(operation: &str) -> Self {
        EngineError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
