//! Error types for flowkey
//!
//! Key construction has exactly one failure mode: a required identifier was
//! absent. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use thiserror::Error;

/// Result type alias for flowkey operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for key construction
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A constructor argument was rejected
    #[error("Invalid argument '{param}': {reason}")]
    InvalidArgument {
        /// Name of the rejected parameter
        param: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

impl Error {
    /// Build the error raised when a required identifier is absent
    pub fn null_not_permitted(param: &'static str) -> Self {
        Error::InvalidArgument {
            param,
            reason: "null not permitted".to_string(),
        }
    }

    /// Name of the parameter this error refers to
    pub fn param(&self) -> &'static str {
        match self {
            Error::InvalidArgument { param, .. } => *param,
        }
    }

    /// Get the reason code for callers that map errors to stable codes
    pub fn reason_code(&self) -> &'static str {
        match self {
            Error::InvalidArgument { .. } => "invalid_argument",
        }
    }
}
