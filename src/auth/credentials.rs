//! Credential management for Coinbase API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// An API key / secret key pair for one Coinbase account session.
///
/// The key is a public identifier and is sent with every signed request.
/// The secret is the raw HMAC key; it is never transmitted, logged, or
/// serialized, and is held behind [`SecretString`] for the lifetime of
/// the session.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret key.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// The raw secret key bytes used to key the request signature.
    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.secret_key.expose_secret().as_bytes()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize where credentials come from,
/// for example a secrets manager or a config file.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn credentials(&self) -> &Credentials;
}

/// Credentials provider that holds a fixed key pair directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, secret_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `COINBASE_API_KEY` and `COINBASE_API_SECRET`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    ///
    /// Reads `COINBASE_API_KEY` and `COINBASE_API_SECRET`.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env() -> Self {
        Self::from_env_vars("COINBASE_API_KEY", "COINBASE_API_SECRET")
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Self {
        let api_key = std::env::var(key_var)
            .unwrap_or_else(|_| panic!("Environment variable {key_var} not set"));
        let secret_key = std::env::var(secret_var)
            .unwrap_or_else(|_| panic!("Environment variable {secret_var} not set"));

        Self {
            credentials: Credentials::new(api_key, secret_key),
        }
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if either variable is not set.
    pub fn try_from_env() -> Option<Self> {
        let api_key = std::env::var("COINBASE_API_KEY").ok()?;
        let secret_key = std::env::var("COINBASE_API_SECRET").ok()?;

        Some(Self {
            credentials: Credentials::new(api_key, secret_key),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_secret() {
        let creds = Credentials::new("my_key", "s3cr3t");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("s3cr3t"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret");
        let creds = provider.credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.secret_bytes(), b"secret");
    }
}
