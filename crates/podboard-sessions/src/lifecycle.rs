//! Session lifecycle policy.
//!
//! One fixed validity window from issuance, no sliding renewal: a refresh is
//! a new `Authenticating` transition, not a distinct state. Expiry is a pure
//! timestamp comparison; there is nothing to cancel server-side.

pub use podboard_auth_core::config::DEFAULT_SESSION_TTL_SECS as SESSION_TTL_SECS;

/// Authentication state of a client, as the session-reading infrastructure
/// observes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    /// A login attempt is in flight. Fails closed.
    Authenticating,
    Authenticated {
        expires_at: u64,
    },
    Expired,
}

impl AuthState {
    /// Start a login attempt. Re-login from any state is allowed: a refresh
    /// is modeled as a new `Authenticating` transition.
    pub fn begin_login(self) -> Self {
        AuthState::Authenticating
    }

    /// Resolve an in-flight login attempt. `expires_at` is `Some` only when
    /// a token was issued; anything else falls back to `Unauthenticated`,
    /// including calls from a state that was not `Authenticating`.
    pub fn complete_login(self, expires_at: Option<u64>) -> Self {
        match (self, expires_at) {
            (AuthState::Authenticating, Some(expires_at)) => {
                AuthState::Authenticated { expires_at }
            }
            _ => AuthState::Unauthenticated,
        }
    }

    /// Apply the expiry timestamp check at read time.
    pub fn observe(self, now: u64) -> Self {
        match self {
            AuthState::Authenticated { expires_at } if expires_at <= now => AuthState::Expired,
            other => other,
        }
    }

    /// Explicit logout.
    pub fn logout(self) -> Self {
        AuthState::Unauthenticated
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }
}
