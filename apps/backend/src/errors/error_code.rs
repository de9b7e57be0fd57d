//! Error codes for the solver API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the solver API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that
/// appears in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed request body or an unparseable card/seat/strain token
    BadRequest,
    /// The double-dummy engine reported a fault code
    EngineFailure,
    /// An engine result did not match the expected binary layout
    DecodeFailure,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::EngineFailure => "ENGINE_FAILURE",
            Self::DecodeFailure => "DECODE_FAILURE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_strings() {
        assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
        assert_eq!(ErrorCode::EngineFailure.as_str(), "ENGINE_FAILURE");
        assert_eq!(ErrorCode::DecodeFailure.as_str(), "DECODE_FAILURE");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::EngineFailure.to_string(), "ENGINE_FAILURE");
    }
}
