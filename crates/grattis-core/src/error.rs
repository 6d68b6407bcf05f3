//! Unified error types for grattis.

use thiserror::Error;

/// Result type alias using GrattisError.
pub type Result<T> = std::result::Result<T, GrattisError>;

#[derive(Error, Debug)]
pub enum GrattisError {
    // Startup errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Contact store errors
    #[error("Contact store error: {0}")]
    Store(String),

    // Generation service errors
    #[error("Provider error: {0}")]
    Provider(String),

    // Delivery channel errors
    #[error("Channel error: {0}")]
    Channel(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl GrattisError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Fatal errors abort the whole run; everything else is logged at
    /// the point of occurrence and the contact loop continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GrattisError::Store("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_constructors() {
        let e1 = GrattisError::config("test");
        assert!(matches!(e1, GrattisError::Config(_)));

        let e2 = GrattisError::store("test");
        assert!(matches!(e2, GrattisError::Store(_)));

        let e3 = GrattisError::provider("test");
        assert!(matches!(e3, GrattisError::Provider(_)));

        let e4 = GrattisError::channel("test");
        assert!(matches!(e4, GrattisError::Channel(_)));
    }

    #[test]
    fn test_fatal_split() {
        assert!(GrattisError::config("x").is_fatal());
        assert!(GrattisError::store("x").is_fatal());
        assert!(!GrattisError::provider("x").is_fatal());
        assert!(!GrattisError::channel("x").is_fatal());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GrattisError = io_err.into();
        assert!(matches!(err, GrattisError::Io(_)));
    }
}
