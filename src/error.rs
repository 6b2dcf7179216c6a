//! Unified error types for session token issuance and verification.
//! Used by: token, config, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsonwebtoken::errors::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error while signing the token: {0}")]
    Signing(String),

    #[error("token rejected: {0}")]
    Parse(#[from] jsonwebtoken::errors::Error),

    #[error("error while extracting values from the token")]
    Extraction,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("missing bearer credentials")]
    MissingCredentials,
}

impl Error {
    /// True when the parser rejected the token only because `exp` has passed.
    pub fn is_expired(&self) -> bool {
        matches!(self, Error::Parse(e) if matches!(e.kind(), ErrorKind::ExpiredSignature))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Parse(_) | Error::Extraction | Error::MissingCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Signing(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
