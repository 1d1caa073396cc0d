//! Component configuration.
//!
//! Every component takes its configuration as an explicit struct at
//! construction. The `from_env` constructors are the only place environment
//! variables are read.

use crate::errors::{ConfigError, Result};
use std::time::Duration;
use zeroize::Zeroizing;

/// Default identity-service request timeout.
///
/// A hung identity service must not hang the login path.
pub const DEFAULT_EXCHANGE_TIMEOUT: Duration = Duration::from_secs(8);

/// Session validity window: 30 days from issuance.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Connection settings for the identity service.
#[derive(Debug, Clone)]
pub struct IdentityServiceConfig {
    /// Base URL of the identity service, without trailing slash
    pub base_url: String,

    /// Bound on every exchange request
    pub timeout: Duration,
}

impl IdentityServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            timeout: DEFAULT_EXCHANGE_TIMEOUT,
        }
    }

    /// Load from `API_URL` and optional `API_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("API_URL").map_err(|_| ConfigError::MissingVar("API_URL"))?;

        let timeout = match std::env::var("API_TIMEOUT_SECONDS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidVar {
                    var: "API_TIMEOUT_SECONDS",
                    reason: format!("not an integer: {raw}"),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_EXCHANGE_TIMEOUT,
        };

        Ok(Self {
            base_url: trim_trailing_slash(base_url),
            timeout,
        })
    }
}

/// Google OAuth client credentials.
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
}

impl GoogleOAuthConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Load from `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("GOOGLE_CLIENT_ID")
            .map_err(|_| ConfigError::MissingVar("GOOGLE_CLIENT_ID"))?;
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET")
            .map_err(|_| ConfigError::MissingVar("GOOGLE_CLIENT_SECRET"))?;

        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

/// Signing and lifetime settings for the session token.
///
/// Not `Debug`: the signing secret stays out of formatted output.
#[derive(Clone)]
pub struct SessionConfig {
    /// Token signing secret, zeroed on drop
    pub signing_secret: Zeroizing<Vec<u8>>,

    /// Issuer claim stamped into every token
    pub issuer: String,

    /// Seconds a session remains valid after issuance
    pub session_ttl: u64,
}

impl SessionConfig {
    pub fn new(signing_secret: impl Into<Vec<u8>>, issuer: impl Into<String>) -> Self {
        Self {
            signing_secret: Zeroizing::new(signing_secret.into()),
            issuer: issuer.into(),
            session_ttl: DEFAULT_SESSION_TTL_SECS,
        }
    }

    /// Load from `SESSION_SIGNING_SECRET` (hex-encoded, at least 32 bytes),
    /// `SESSION_ISSUER` and optional `SESSION_TTL_SECONDS`.
    pub fn from_env() -> Result<Self> {
        let hex_secret = std::env::var("SESSION_SIGNING_SECRET")
            .map_err(|_| ConfigError::MissingVar("SESSION_SIGNING_SECRET"))?;
        let secret = hex::decode(&hex_secret).map_err(|e| ConfigError::InvalidVar {
            var: "SESSION_SIGNING_SECRET",
            reason: format!("not valid hex: {e}"),
        })?;
        if secret.len() < 32 {
            return Err(ConfigError::InvalidVar {
                var: "SESSION_SIGNING_SECRET",
                reason: format!("expected at least 32 bytes, got {}", secret.len()),
            });
        }

        let issuer = std::env::var("SESSION_ISSUER")
            .unwrap_or_else(|_| "https://podboard.app".to_string());

        let session_ttl = match std::env::var("SESSION_TTL_SECONDS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "SESSION_TTL_SECONDS",
                reason: format!("not an integer: {raw}"),
            })?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            signing_secret: Zeroizing::new(secret),
            issuer,
            session_ttl,
        })
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let config = IdentityServiceConfig::new("https://api.podboard.app/");
        assert_eq!(config.base_url, "https://api.podboard.app");
    }

    #[test]
    fn session_config_defaults_to_thirty_days() {
        let config = SessionConfig::new(vec![0u8; 32], "https://podboard.app");
        assert_eq!(config.session_ttl, 30 * 24 * 60 * 60);
    }
}
