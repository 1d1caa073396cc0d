//! Session hydration: projecting the signed token into the client-visible
//! session view.

use crate::types::*;
use tracing::debug;

use super::SessionService;

impl SessionService {
    /// Pure projection of verified claims into a [`SessionView`].
    ///
    /// Runs on every session read, potentially many times per request: no
    /// side effects, no network, same output for the same claims.
    pub fn project(&self, claims: &SessionClaims) -> SessionView {
        let grant = claims.grant();

        SessionView {
            user: SessionUser {
                id: claims.sub.clone(),
                email: claims.email.clone(),
                name: claims.name.clone(),
                role: grant.as_ref().map(|g| g.role),
                avatar_url: claims.avatar_url.clone(),
            },
            access_token: grant.map(|g| g.access_token),
            expires_at: claims.exp,
        }
    }

    /// Verify a token and hydrate it, collapsing every failure to `None`.
    ///
    /// An expired, tampered, foreign-signed or malformed token is simply an
    /// absent session; callers never learn which. This is the boundary the
    /// session-reading infrastructure calls on each request.
    pub fn read_session(&self, token: &str) -> Option<SessionView> {
        match self.verify(token) {
            Ok(claims) => Some(self.project(&claims)),
            Err(e) => {
                debug!(error = %e, "Session token rejected");
                None
            }
        }
    }
}
