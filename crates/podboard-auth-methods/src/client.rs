//! HTTP client for the identity service.

use crate::errors::*;
use crate::types::{GoogleExchangeRequest, LoginRequest, LoginResponse, OAuthExchangeResponse};
use podboard_auth_core::IdentityServiceConfig;
use reqwest::Client;

/// Thin client over the identity service's auth endpoints.
///
/// Every request carries the configured timeout; a hung identity service
/// surfaces as [`AuthMethodsError::ServiceUnreachable`] rather than hanging
/// the login path. No retries: a failed exchange is surfaced immediately and
/// the end user resubmits.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http_client: Client,
    base_url: String,
}

impl IdentityClient {
    /// Build a client from injected configuration.
    pub fn new(config: &IdentityServiceConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AuthMethodsError::ServiceUnreachable(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    /// Exchange email/password credentials for a verified identity.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .http_client
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| AuthMethodsError::ServiceUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthMethodsError::ServiceRejected {
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AuthMethodsError::MalformedResponse(e.to_string()))
    }

    /// Exchange a Google-vouched account for a service-issued grant.
    pub async fn exchange_google(
        &self,
        request: &GoogleExchangeRequest<'_>,
    ) -> Result<OAuthExchangeResponse> {
        let response = self
            .http_client
            .post(format!("{}/auth/oauth/google", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| AuthMethodsError::ServiceUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthMethodsError::ServiceRejected {
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AuthMethodsError::MalformedResponse(e.to_string()))
    }
}
