//! Token issuance endpoint with input validation.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::token::sign::issue_with_claims;

#[derive(Deserialize)]
pub struct IssueRequest {
    pub sub: String,
}

#[derive(Debug, Serialize)]
pub struct IssueResponse {
    pub token: String,
    pub exp: String,
}

fn validate_request(req: &IssueRequest) -> Result<()> {
    if req.sub.is_empty() || req.sub.len() > 256 {
        return Err(Error::Validation("sub must be 1-256 characters".into()));
    }
    if req.sub.chars().any(|c| c.is_control()) {
        return Err(Error::Validation("sub contains control characters".into()));
    }
    Ok(())
}

pub async fn issue(
    State(state): State<AppState>,
    Json(req): Json<IssueRequest>,
) -> Result<Json<IssueResponse>> {
    validate_request(&req)?;
    let (token, claims) = issue_with_claims(&req.sub, &state.config).inspect_err(|e| {
        tracing::error!(error = %e, "token signing failed");
        state.metrics.record_signing_failure();
    })?;
    let exp = DateTime::from_timestamp(claims.exp, 0)
        .map(|t| t.to_rfc3339())
        .ok_or_else(|| {
            state.metrics.record_signing_failure();
            Error::Signing(format!("expiry {} is out of range", claims.exp))
        })?;
    tracing::info!(sub = %claims.sub, exp = %exp, "token issued");
    state.metrics.record_issue();
    Ok(Json(IssueResponse { token, exp }))
}
