use podboard_auth_core::{AuthzGrant, Role};
use serde::{Deserialize, Serialize};

/// Payload of the signed session token.
///
/// Owned exclusively by the authentication layer: written by the claim
/// enricher at login time, read-only thereafter. `role` and `access_token`
/// are populated together or not at all; [`SessionClaims::grant`] is the
/// only way to read them and refuses a mixed partial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Issuer
    pub iss: String,
    /// Subject: the identity-service user id
    pub sub: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expiry (unix seconds)
    pub exp: u64,
}

impl SessionClaims {
    /// Authorization grant carried by these claims, if whole.
    ///
    /// A claim set carrying a role without an access token (or the reverse)
    /// never yields a grant; it reads as the degraded grant-less state.
    pub fn grant(&self) -> Option<AuthzGrant> {
        match (self.role, self.access_token.as_ref()) {
            (Some(role), Some(access_token)) => Some(AuthzGrant {
                role,
                access_token: access_token.clone(),
            }),
            _ => None,
        }
    }
}

/// User half of the client-visible session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Client-visible projection of the signed token.
///
/// Recomputed from the token on every read, never persisted independently.
/// A missing role means the OAuth exchange failed at login; authorization
/// keyed on it must deny, which [`SessionView::authorizes`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub user: SessionUser,
    pub access_token: Option<String>,
    pub expires_at: u64,
}

impl SessionView {
    /// Deny-by-default authorization check: true only when the session
    /// carries a role at or above `min_role`.
    pub fn authorizes(&self, min_role: Role) -> bool {
        self.user.role.is_some_and(|role| role >= min_role)
    }
}
