//! Shared constructors for session tests.

use crate::SessionService;
use podboard_auth_core::{AuthzGrant, IdentityRecord, LoginProvider, Role, SessionConfig};

pub const TEST_ISSUER: &str = "https://podboard.test";

pub fn test_service() -> SessionService {
    SessionService::new(&SessionConfig::new(
        b"0123456789abcdef0123456789abcdef".to_vec(),
        TEST_ISSUER,
    ))
}

/// Service with a different secret, for cross-signing tests.
pub fn foreign_service() -> SessionService {
    SessionService::new(&SessionConfig::new(
        b"fedcba9876543210fedcba9876543210".to_vec(),
        TEST_ISSUER,
    ))
}

/// Record as the credential authenticator produces it: grant always present.
pub fn credential_record() -> IdentityRecord {
    IdentityRecord {
        provider: LoginProvider::Credentials,
        id: "u-42".to_string(),
        email: "lead@example.com".to_string(),
        name: "Ada".to_string(),
        avatar_url: Some("https://cdn.example.com/a.png".to_string()),
        grant: Some(AuthzGrant {
            role: Role::PodLead,
            access_token: "svc-token".to_string(),
        }),
    }
}

/// Record as the OAuth bridge produces it after a failed exchange.
pub fn degraded_oauth_record() -> IdentityRecord {
    IdentityRecord {
        provider: LoginProvider::Google,
        id: "google-123".to_string(),
        email: "member@example.com".to_string(),
        name: "Mem Ber".to_string(),
        avatar_url: None,
        grant: None,
    }
}
