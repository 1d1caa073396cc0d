pub mod config;
pub mod errors;
pub mod redirect;
pub mod types;

pub use config::{GoogleOAuthConfig, IdentityServiceConfig, SessionConfig};
pub use errors::*;
pub use redirect::resolve_post_auth_target;
pub use types::*;
