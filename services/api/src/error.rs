//! services/api/src/error.rs
//!
//! Startup and serving failures of the astrology service. Request-level
//! failures never reach this type; handlers answer them with a status code.

use crate::config::ConfigError;
use astrology_core::ports::PortError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An environment variable could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Restoring the saved session failed for a reason other than bad data,
    /// e.g. the session directory is unreadable.
    #[error("Session store error: {0}")]
    SessionStore(#[from] PortError),

    /// Binding the listener or serving connections failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured value parsed but could not be used, such as a CORS origin
    /// that is not a valid header value.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_failures_keep_their_cause() {
        let err: ApiError = PortError::Unexpected("disk gone".to_string()).into();
        assert!(matches!(err, ApiError::SessionStore(_)));
        assert!(err.to_string().contains("disk gone"));
    }
}
