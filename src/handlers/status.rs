//! Liveness and counter endpoints.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;
use crate::telemetry::MetricsSnapshot;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub issuer: String,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        issuer: state.config.issuer.clone(),
    })
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
