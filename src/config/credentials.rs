//! Credential resolution from configuration.

use crate::config::loader::ConfigError;
use crate::config::types::ProviderConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building API requests.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the provider.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ProviderConfig {
    /// Resolve the provider API key.
    ///
    /// A non-empty inline `api_key` wins; otherwise the environment variable
    /// named by `api_key_env` is consulted. Resolution happens at client
    /// construction, so a missing key fails fast instead of at search time.
    pub fn resolve_api_key(&self) -> Result<SecureString, ConfigError> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                return Ok(SecureString::new(key.clone()));
            }
        }

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(SecureString::new(key)),
            _ => Err(ConfigError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            }),
        }
    }
}
