//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping controller errors and
/// adding configuration and input validation failures.
#[derive(Debug)]
pub enum LuxorError {
    /// An error from the underlying controller client.
    Api(luxor_api::Error),
    /// A configuration value could not be used.
    Config(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl LuxorError {
    /// Whether the failure was a canceled call rather than a real fault.
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_canceled())
    }
}

impl fmt::Display for LuxorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "Controller error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for LuxorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<luxor_api::Error> for LuxorError {
    fn from(e: luxor_api::Error) -> Self {
        Self::Api(e)
    }
}
