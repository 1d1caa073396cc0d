//! Login paths for the podboard auth bridge.
//!
//! Two providers produce a normalized [`IdentityRecord`](podboard_auth_core::IdentityRecord):
//! the [`CredentialAuthenticator`] (email/password against the identity
//! service) and the [`OAuthBridge`] (third-party handshake re-exchanged with
//! the identity service). Both collapse every internal failure to "no
//! identity" at the public boundary; the distinction between a rejection, a
//! malformed body and an unreachable service exists only in the logs.

pub mod client;
pub mod credentials;
pub mod errors;
pub mod oauth;
pub mod traits;
pub mod types;

pub use client::IdentityClient;
pub use credentials::CredentialAuthenticator;
pub use errors::*;
pub use oauth::{GoogleExchange, IdentityExchange, OAuthBridge};
pub use traits::{AuthGateway, AuthProvider, LoginAttempt};

pub(crate) fn email_hash_for_log(email: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(email.as_bytes());
    hex::encode(&digest[..8])
}
