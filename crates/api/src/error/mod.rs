//! Error handling for curve-group operations

pub mod validate;

use thiserror::Error;

/// Primary error type for curve-group operations.
///
/// Every variant is a programmer or configuration error, not a transient
/// fault: all are surfaced immediately to the caller with no retry and no
/// partial result. Callers validate curve names and operation
/// applicability up front, or propagate the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The group's point representation cannot perform the operation
    #[error("curve {curve}: operation {operation} is not supported")]
    UnsupportedOperation {
        /// Curve the operation was invoked on
        curve: String,
        /// Name of the unsupported operation
        operation: &'static str,
    },

    /// No registered backend supports the requested curve
    #[error("curve {name} is not supported by any registered backend")]
    UnsupportedCurve {
        /// Requested curve name
        name: String,
    },

    /// A point encoding other than the supported one, or a malformed buffer
    #[error("{context}: invalid format: {details}")]
    InvalidFormat {
        /// Operation where the format error occurred
        context: &'static str,
        /// What was wrong with the requested format or buffer
        details: String,
    },

    /// Point division by a scalar with no inverse modulo the group order
    #[error("curve {curve}: cannot divide a point by a zero scalar")]
    DivideByZero {
        /// Curve the division was invoked on
        curve: String,
    },

    /// A backend library name was registered twice
    #[error("backend library {name} is already registered")]
    DuplicateLibrary {
        /// Offending library name
        name: String,
    },
}

/// Result type for curve-group operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `UnsupportedOperation` error
    pub fn unsupported(curve: impl Into<String>, operation: &'static str) -> Self {
        Error::UnsupportedOperation {
            curve: curve.into(),
            operation,
        }
    }

    /// Shorthand to create an `InvalidFormat` error
    pub fn format(context: &'static str, details: impl Into<String>) -> Self {
        Error::InvalidFormat {
            context,
            details: details.into(),
        }
    }
}
