//! Bearer-token extractor for protected routes.
//! Used by: handlers::me.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::Error;
use crate::state::AppState;
use crate::token::extract::bearer_token;
use crate::token::verify::verify;

/// Subject of a verified `Authorization: Bearer` session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSubject(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedSubject {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(Error::MissingCredentials)?;

        match verify(token, &state.config) {
            Ok(sub) => {
                state.metrics.record_verify();
                Ok(Self(sub))
            }
            Err(e) => {
                tracing::warn!(error = %e, "bearer token rejected");
                state.metrics.record_reject();
                Err(e)
            }
        }
    }
}
