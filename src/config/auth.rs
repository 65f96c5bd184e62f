//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum API key length accepted in production.
const MIN_PRODUCTION_KEY_LEN: usize = 16;

/// Shared-secret authentication configuration
///
/// Every request must present `api_key` in the `X-API-Key` header.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Expected value of the `X-API-Key` header
    pub api_key: SecretString,
}

impl AuthConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
        }
    }

    /// Validate authentication configuration
    ///
    /// The key must be non-empty. Production additionally requires a key of
    /// at least 16 characters.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let key = self.api_key.expose_secret();
        if key.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__API_KEY"));
        }
        if *environment == Environment::Production && key.chars().count() < MIN_PRODUCTION_KEY_LEN {
            return Err(ValidationError::ApiKeyTooShort);
        }
        Ok(())
    }
}
