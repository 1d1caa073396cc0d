//! Claim enrichment: the one-time-per-login step that folds a provider's
//! identity record into signed session claims.

use crate::{errors::*, types::*};
use podboard_auth_core::{current_timestamp, IdentityRecord};
use tracing::{info, warn};

use super::SessionService;

impl SessionService {
    /// Enrich session claims at a token touchpoint.
    ///
    /// `login` is `Some` only when this invocation carries a freshly
    /// completed provider handshake — that is the login-event boundary, and
    /// the record's claims (grant included, verbatim) replace whatever came
    /// before. On every routine token read `login` is `None` and the
    /// previous claims pass through untouched: no restamping, no network.
    pub fn enrich(
        &self,
        previous: Option<SessionClaims>,
        login: Option<&IdentityRecord>,
    ) -> Option<SessionClaims> {
        match login {
            Some(record) => Some(self.claims_for(record)),
            None => previous,
        }
    }

    /// Enrich and sign in one step: the full login-event path.
    pub fn establish_session(&self, record: &IdentityRecord) -> Result<String> {
        let claims = self.claims_for(record);
        self.issue(&claims)
    }

    fn claims_for(&self, record: &IdentityRecord) -> SessionClaims {
        match &record.grant {
            Some(_) => info!(
                subject = %record.id,
                provider = ?record.provider,
                "Issuing session claims"
            ),
            // Known degraded state: the OAuth exchange failed after the
            // provider vouched for the identity. The session carries no role
            // and no access token, and authorization denies throughout.
            None => warn!(
                subject = %record.id,
                provider = ?record.provider,
                "Issuing grant-less session claims"
            ),
        }

        let now = current_timestamp();
        SessionClaims {
            iss: self.issuer.clone(),
            sub: record.id.clone(),
            email: record.email.clone(),
            name: record.name.clone(),
            avatar_url: record.avatar_url.clone(),
            role: record.grant.as_ref().map(|g| g.role),
            access_token: record.grant.as_ref().map(|g| g.access_token.clone()),
            iat: now,
            exp: now + self.session_ttl,
        }
    }
}
