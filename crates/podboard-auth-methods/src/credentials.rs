//! Email/password authentication against the identity service.

use crate::client::IdentityClient;
use crate::email_hash_for_log;
use crate::errors::*;
use podboard_auth_core::{AuthzGrant, IdentityRecord, IdentityServiceConfig, LoginProvider};
use tracing::{info, warn};

/// Exchanges an email/password pair for a verified identity.
#[derive(Debug, Clone)]
pub struct CredentialAuthenticator {
    client: IdentityClient,
}

impl CredentialAuthenticator {
    pub fn new(config: &IdentityServiceConfig) -> Result<Self> {
        Ok(Self {
            client: IdentityClient::new(config)?,
        })
    }

    pub fn with_client(client: IdentityClient) -> Self {
        Self { client }
    }

    /// Authenticate with email and password.
    ///
    /// Returns `None` for every failure mode: empty input, a service
    /// rejection, a malformed body, an unreachable service. The caller must
    /// not be able to tell which occurred; the distinction lives only in the
    /// logs. Empty input short-circuits before any network call.
    pub async fn authenticate(&self, email: &str, password: &str) -> Option<IdentityRecord> {
        match self.try_authenticate(email, password).await {
            Ok(record) => {
                info!(
                    email_hash = %email_hash_for_log(&record.email),
                    "Credential authentication successful"
                );
                Some(record)
            }
            Err(e) => {
                warn!(
                    email_hash = %email_hash_for_log(email),
                    error = %e,
                    "Credential authentication failed"
                );
                None
            }
        }
    }

    async fn try_authenticate(&self, email: &str, password: &str) -> Result<IdentityRecord> {
        if email.trim().is_empty() {
            return Err(AuthMethodsError::InvalidInput("empty email"));
        }
        if password.is_empty() {
            return Err(AuthMethodsError::InvalidInput("empty password"));
        }

        let response = self.client.login(email, password).await?;

        Ok(IdentityRecord {
            provider: LoginProvider::Credentials,
            id: response.user.id,
            email: response.user.email,
            name: response.user.name,
            avatar_url: response.user.avatar,
            grant: Some(AuthzGrant {
                role: response.user.role,
                access_token: response.access_token,
            }),
        })
    }
}
