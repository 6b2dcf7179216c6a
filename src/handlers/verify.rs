//! Token verification endpoint.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;
use crate::token::verify::verify as verify_token;

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub sub: String,
}

pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<SubjectResponse>> {
    match verify_token(&req.token, &state.config) {
        Ok(sub) => {
            tracing::info!(sub = %sub, "token verified");
            state.metrics.record_verify();
            Ok(Json(SubjectResponse { sub }))
        }
        Err(e) => {
            tracing::warn!(error = %e, expired = e.is_expired(), "token rejected");
            state.metrics.record_reject();
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::state::build_test_state;
    use crate::token::sign::issue;

    #[tokio::test]
    async fn valid_token_returns_subject() -> Result<()> {
        let state = build_test_state();
        let token = issue("user-42", &state.config)?;
        let Json(resp) = verify(State(state.clone()), Json(VerifyRequest { token })).await?;
        assert_eq!(resp.sub, "user-42");
        assert_eq!(state.metrics.snapshot().tokens_verified, 1);
        Ok(())
    }

    #[tokio::test]
    async fn garbage_token_rejected_and_counted() {
        let state = build_test_state();
        let req = VerifyRequest { token: "garbage".into() };
        let result = verify(State(state.clone()), Json(req)).await;
        assert!(matches!(result, Err(Error::Parse(_))));
        assert_eq!(state.metrics.snapshot().tokens_rejected, 1);
    }
}
