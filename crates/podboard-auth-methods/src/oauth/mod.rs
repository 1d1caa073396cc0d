//! Third-party OAuth login path.
//!
//! The external provider has already completed its handshake and vouched for
//! the user's identity; this module performs the second exchange with the
//! identity service, swapping the provider-issued token for a service-issued
//! grant. Adding a provider means adding an [`IdentityExchange`] adapter.

mod google;

pub use google::GoogleExchange;

use crate::email_hash_for_log;
use crate::errors::Result;
use async_trait::async_trait;
use podboard_auth_core::{AuthzGrant, IdentityRecord, OAuthProfile, ProviderAccountLink};
use std::sync::Arc;
use tracing::{info, warn};

/// Provider-specific exchange with the identity service's OAuth-linking
/// endpoint. One adapter per provider, all sharing this contract.
#[async_trait]
pub trait IdentityExchange: Send + Sync {
    /// Provider this adapter handles.
    fn provider(&self) -> podboard_auth_core::OAuthProviderKind;

    /// Exchange the provider-vouched account for a service-issued grant.
    async fn exchange(
        &self,
        link: &ProviderAccountLink,
        profile: &OAuthProfile,
    ) -> Result<AuthzGrant>;
}

/// Reconciles a completed third-party handshake into an [`IdentityRecord`].
pub struct OAuthBridge {
    exchanges: Vec<Arc<dyn IdentityExchange>>,
}

impl OAuthBridge {
    pub fn new(exchanges: Vec<Arc<dyn IdentityExchange>>) -> Self {
        Self { exchanges }
    }

    /// Produce an identity record for a provider-vouched login.
    ///
    /// The provider already authenticated the user, so this always yields a
    /// record. When the identity-service exchange fails (or no adapter is
    /// registered for the provider), the record carries no grant: a known
    /// degraded state that downstream authorization treats as deny-all. The
    /// provider's raw token is discarded either way.
    pub async fn authenticate(
        &self,
        link: &ProviderAccountLink,
        profile: &OAuthProfile,
    ) -> IdentityRecord {
        let grant = match self.exchange_for(link, profile).await {
            Ok(grant) => {
                info!(
                    provider = link.provider.as_str(),
                    email_hash = %email_hash_for_log(&profile.email),
                    "OAuth exchange successful"
                );
                Some(grant)
            }
            Err(e) => {
                warn!(
                    provider = link.provider.as_str(),
                    email_hash = %email_hash_for_log(&profile.email),
                    error = %e,
                    "OAuth exchange failed, issuing grant-less session"
                );
                None
            }
        };

        IdentityRecord {
            provider: link.provider.into(),
            id: link.provider_account_id.clone(),
            email: profile.email.clone(),
            name: profile.name.clone(),
            avatar_url: profile.avatar_url.clone(),
            grant,
        }
    }

    async fn exchange_for(
        &self,
        link: &ProviderAccountLink,
        profile: &OAuthProfile,
    ) -> Result<AuthzGrant> {
        let adapter = self
            .exchanges
            .iter()
            .find(|e| e.provider() == link.provider)
            .ok_or(crate::errors::AuthMethodsError::InvalidInput(
                "no exchange adapter registered for provider",
            ))?;

        adapter.exchange(link, profile).await
    }
}
