//! Google exchange adapter.

use super::IdentityExchange;
use crate::client::IdentityClient;
use crate::errors::*;
use crate::types::GoogleExchangeRequest;
use async_trait::async_trait;
use podboard_auth_core::{
    AuthzGrant, IdentityServiceConfig, OAuthProfile, OAuthProviderKind, ProviderAccountLink,
};

/// Exchanges a Google-vouched account for a service-issued grant.
pub struct GoogleExchange {
    client: IdentityClient,
}

impl GoogleExchange {
    pub fn new(config: &IdentityServiceConfig) -> Result<Self> {
        Ok(Self {
            client: IdentityClient::new(config)?,
        })
    }

    pub fn with_client(client: IdentityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityExchange for GoogleExchange {
    fn provider(&self) -> OAuthProviderKind {
        OAuthProviderKind::Google
    }

    async fn exchange(
        &self,
        link: &ProviderAccountLink,
        profile: &OAuthProfile,
    ) -> Result<AuthzGrant> {
        let request = GoogleExchangeRequest {
            google_id: &link.provider_account_id,
            email: &profile.email,
            name: &profile.name,
            avatar: profile.avatar_url.as_deref(),
            access_token: &link.raw_access_token,
        };

        let response = self.client.exchange_google(&request).await?;

        Ok(AuthzGrant {
            role: response.user.role,
            access_token: response.access_token,
        })
    }
}
