//! Auth methods error types.
//!
//! These never cross the authenticator boundary: callers see only
//! `Option<IdentityRecord>`. The variants exist so the logs can tell a
//! rejection from an outage without the client being able to.

use thiserror::Error;

/// Internal failure taxonomy for a login exchange.
#[derive(Debug, Error)]
pub enum AuthMethodsError {
    /// Missing or empty credentials; fails closed before any network call
    #[error("Invalid login input: {0}")]
    InvalidInput(&'static str),

    /// Network-level failure or timeout reaching the identity service
    #[error("Identity service unreachable: {0}")]
    ServiceUnreachable(String),

    /// Identity service answered with a non-2xx status
    #[error("Identity service rejected the exchange: status {status}")]
    ServiceRejected {
        /// HTTP status returned by the service
        status: u16,
    },

    /// Identity service answered 2xx with an unexpected body shape
    #[error("Malformed identity service response: {0}")]
    MalformedResponse(String),
}

/// Result type for auth method operations.
pub type Result<T> = std::result::Result<T, AuthMethodsError>;
