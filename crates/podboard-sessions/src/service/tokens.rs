//! Signed token issuance and verification.

use crate::{errors::*, types::*};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use podboard_auth_core::current_timestamp;

use super::SessionService;

impl SessionService {
    /// Sign claims into a session token.
    ///
    /// The issuer claim is stamped here, at signing time; whatever the
    /// caller put in `iss` is overwritten, so a token carrying a foreign
    /// issuer under this service's signature cannot exist.
    pub fn issue(&self, claims: &SessionClaims) -> Result<String> {
        let mut claims = claims.clone();
        claims.iss = self.issuer.clone();

        let header = Header::new(Algorithm::HS256);
        let key = EncodingKey::from_secret(&self.signing_secret);
        Ok(encode(&header, &claims, &key)?)
    }

    /// Verify a session token and return its claims.
    ///
    /// The header is parsed first and the algorithm checked strictly before
    /// any signature work; issuer and expiry are validated with no leeway.
    pub fn verify(&self, token: &str) -> Result<SessionClaims> {
        let header = jsonwebtoken::decode_header(token)?;

        if header.alg != Algorithm::HS256 {
            return Err(SessionError::InvalidAlgorithm {
                found: format!("{:?}", header.alg),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = 0;

        let decoding_key = DecodingKey::from_secret(&self.signing_secret);
        let token_data =
            decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => SessionError::TokenExpired,
                    _ => SessionError::InvalidToken(e),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Reissue a still-valid token with a fresh validity window.
    ///
    /// Renewal is a new issuance, not a mutation: every claim except the
    /// timestamps is carried over untouched. An already-expired token cannot
    /// be reissued; that path requires a full re-login.
    pub fn reissue(&self, token: &str) -> Result<String> {
        let mut claims = self.verify(token)?;

        let now = current_timestamp();
        claims.iat = now;
        claims.exp = now + self.session_ttl;

        self.issue(&claims)
    }
}
