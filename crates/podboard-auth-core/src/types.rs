use serde::{Deserialize, Serialize};

/// Dashboard role, ranked for authorization checks (admin outranks pod_lead,
/// and so on down to observer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Observer,
    Member,
    PodLead,
    Admin,
}

/// Authorization claims issued by the identity service.
///
/// Role and access token always travel together: a login exchange either
/// yields both or yields nothing. A partial grant is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthzGrant {
    pub role: Role,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Which login path produced an identity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginProvider {
    Credentials,
    Google,
}

impl From<OAuthProviderKind> for LoginProvider {
    fn from(kind: OAuthProviderKind) -> Self {
        match kind {
            OAuthProviderKind::Google => LoginProvider::Google,
        }
    }
}

/// Normalized result of a successful login exchange, provider-agnostic.
///
/// Produced per login attempt by the credential authenticator or the OAuth
/// bridge, consumed once by the claim enricher, never persisted. `grant` is
/// `None` only on the OAuth degraded path, where the third-party provider
/// vouched for the identity but the identity-service exchange failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub provider: LoginProvider,
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub grant: Option<AuthzGrant>,
}

/// Supported third-party OAuth providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProviderKind {
    Google,
}

impl OAuthProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProviderKind::Google => "google",
        }
    }
}

/// Transient link between a third-party account and a login attempt.
///
/// Used only to construct the identity-service exchange request; discarded
/// once an [`IdentityRecord`] is obtained.
#[derive(Debug, Clone)]
pub struct ProviderAccountLink {
    pub provider: OAuthProviderKind,
    pub provider_account_id: String,
    pub raw_access_token: String,
}

/// Profile claims carried over from a completed third-party handshake.
#[derive(Debug, Clone)]
pub struct OAuthProfile {
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Current unix timestamp in seconds.
pub fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ranking() {
        assert!(Role::Admin > Role::PodLead);
        assert!(Role::PodLead > Role::Member);
        assert!(Role::Member > Role::Observer);
    }

    #[test]
    fn role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::PodLead).unwrap(), "\"pod_lead\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"admin\"").unwrap(),
            Role::Admin
        );
    }

    #[test]
    fn grant_wire_format_is_camel_case() {
        let grant = AuthzGrant {
            role: Role::Member,
            access_token: "tok".to_string(),
        };
        let json = serde_json::to_string(&grant).unwrap();
        assert!(json.contains("\"accessToken\""));
        assert!(json.contains("\"member\""));
    }
}
