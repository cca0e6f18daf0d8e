//! Error types for the R&D credit engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! estimating a credit.

use thiserror::Error;

/// The main error type for the R&D credit engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use rd_credit_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     errors: vec![
///         "Technical employees cannot exceed total employees".to_string(),
///         "R&D allocation percentage must be between 0 and 100".to_string(),
///     ],
/// };
/// assert_eq!(
///     error.to_string(),
///     "Technical employees cannot exceed total employees; R&D allocation percentage must be between 0 and 100"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input failed one or more hard validation rules.
    ///
    /// Displays as the individual violations joined with `"; "`.
    #[error("{}", .errors.join("; "))]
    Validation {
        /// Every violated rule, in the order checked.
        errors: Vec<String>,
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

    /// Configuration parsed but its values are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what is wrong with the configuration.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
