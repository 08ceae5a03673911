//! API error taxonomy

use thiserror::Error;

/// Failure of a remote analysis or price call.
///
/// The service documents no structured error body, so a non-2xx status is
/// opaque beyond its code. Malformed bodies are handled like transport
/// failures by callers: both are retryable and never fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("server returned HTTP {status}")]
    Http { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http() {
        let error = ApiError::Http { status: 500 };
        assert_eq!(format!("{}", error), "server returned HTTP 500");
    }

    #[test]
    fn test_error_display_network() {
        let error = ApiError::Network("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("network error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_display_decode() {
        let error = ApiError::Decode("expected object".to_string());
        assert_eq!(format!("{}", error), "malformed response: expected object");
    }
}
