//! Domain error types
//!
//! These errors are framework-agnostic and describe how a call to an upstream
//! movie-data provider failed.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider could not be reached (connect error, timeout, broken body)
    Transport(String),
    /// The provider answered with a non-200 status code
    Status(u16),
    /// The provider answered 200 but the body was not the expected JSON
    Decode(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ProviderError::Status(code) => write!(f, "Upstream returned status {}", code),
            ProviderError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}
