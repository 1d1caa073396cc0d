//! Wire types for the identity-service exchanges.

use podboard_auth_core::Role;
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful body of `POST /auth/login`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: LoginUser,
    pub access_token: String,
}

/// User object inside a login response.
#[derive(Debug, Deserialize)]
pub struct LoginUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
}

/// Body of `POST /auth/oauth/google`, carrying the Google-issued token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleExchangeRequest<'a> {
    pub google_id: &'a str,
    pub email: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<&'a str>,
    pub access_token: &'a str,
}

/// Successful body of an OAuth-linking exchange.
///
/// The service-issued `access_token` and authoritative `role` replace the
/// third-party provider's token and claims for all subsequent authorization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthExchangeResponse {
    pub user: OAuthExchangeUser,
    pub access_token: String,
}

/// User object inside an OAuth-linking exchange response; only the role is
/// authoritative here.
#[derive(Debug, Deserialize)]
pub struct OAuthExchangeUser {
    pub role: Role,
}
