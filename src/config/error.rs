//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value the service refuses to start with
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Port 0 is not allowed in production")]
    EphemeralPortInProduction,

    #[error("Timeout out of range: {0}")]
    InvalidTimeout(&'static str),

    #[error("CORS origin must be an absolute http(s) origin, got {0:?}")]
    InvalidCorsOrigin(String),

    #[error("Database URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("Pool bounds invalid: min_size {min}, max_size {max}")]
    PoolBounds { min: u32, max: u32 },

    #[error("API key must be at least 16 characters in production")]
    ApiKeyTooShort,
}
