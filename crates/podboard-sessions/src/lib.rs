//! Signed session token layer for the podboard auth bridge.
//!
//! A login attempt produces an identity record; the claim enricher folds it
//! into signed session claims exactly once per login event; the hydrator
//! projects those claims into a client-visible session view on every read.
//! Validity is entirely a function of the signature and expiry timestamp —
//! there is no server-side session store.

pub mod errors;
pub mod lifecycle;
mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use errors::*;
pub use lifecycle::AuthState;
pub use service::SessionService;
pub use types::*;
