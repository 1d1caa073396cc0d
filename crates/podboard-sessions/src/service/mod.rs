//! Session service implementation.

mod enrich;
mod hydrate;
mod tokens;

use podboard_auth_core::SessionConfig;
use zeroize::Zeroizing;

/// Issues, verifies and projects signed session tokens.
///
/// Holds only configuration: tokens are self-contained, so concurrent reads
/// share nothing mutable and every login attempt is independent.
pub struct SessionService {
    pub(super) signing_secret: Zeroizing<Vec<u8>>,
    pub(super) issuer: String,
    pub(super) session_ttl: u64,
}

impl SessionService {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            signing_secret: config.signing_secret.clone(),
            issuer: config.issuer.clone(),
            session_ttl: config.session_ttl,
        }
    }
}
