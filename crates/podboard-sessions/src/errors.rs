use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid algorithm: found {found}, expected HS256")]
    InvalidAlgorithm { found: String },

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
