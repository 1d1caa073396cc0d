//! Provider-agnostic login surface.
//!
//! The claim enricher depends only on this capability: a login attempt in,
//! an optional identity record out. Adding a provider adds a variant and an
//! adapter; nothing downstream changes.

use crate::credentials::CredentialAuthenticator;
use crate::oauth::OAuthBridge;
use async_trait::async_trait;
use podboard_auth_core::{IdentityRecord, OAuthProfile, ProviderAccountLink};

/// A single login attempt, whichever path it arrived on.
#[derive(Debug, Clone)]
pub enum LoginAttempt {
    /// Direct email/password submission
    Credentials { email: String, password: String },
    /// Completed third-party handshake awaiting the identity-service exchange
    OAuth {
        link: ProviderAccountLink,
        profile: OAuthProfile,
    },
}

/// Capability shared by every login path.
///
/// `None` means "no identity": the caller cannot distinguish bad credentials
/// from a service outage, by design.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, attempt: &LoginAttempt) -> Option<IdentityRecord>;
}

/// Routes a login attempt to the matching provider.
pub struct AuthGateway {
    credentials: CredentialAuthenticator,
    oauth: OAuthBridge,
}

impl AuthGateway {
    pub fn new(credentials: CredentialAuthenticator, oauth: OAuthBridge) -> Self {
        Self { credentials, oauth }
    }
}

#[async_trait]
impl AuthProvider for AuthGateway {
    async fn authenticate(&self, attempt: &LoginAttempt) -> Option<IdentityRecord> {
        match attempt {
            LoginAttempt::Credentials { email, password } => {
                self.credentials.authenticate(email, password).await
            }
            LoginAttempt::OAuth { link, profile } => {
                Some(self.oauth.authenticate(link, profile).await)
            }
        }
    }
}
