//! Shared error type across latmon crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Request body exceeds the configured limit.
    PayloadTooLarge,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Telemetry source missing or unparseable.
    DataSource,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::DataSource => "DATA_SOURCE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LatmonError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum LatmonError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("telemetry source unavailable: {0}")]
    DataSource(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl LatmonError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LatmonError::BadRequest(_) => ClientCode::BadRequest,
            LatmonError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            LatmonError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            LatmonError::DataSource(_) => ClientCode::DataSource,
            LatmonError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(LatmonError::BadRequest("x".into()).client_code().as_str(), "BAD_REQUEST");
        assert_eq!(LatmonError::PayloadTooLarge.client_code().as_str(), "PAYLOAD_TOO_LARGE");
        assert_eq!(LatmonError::DataSource("gone".into()).client_code().as_str(), "DATA_SOURCE");
    }
}
