//! Shared application state.

use std::sync::Arc;

use crate::config::TokenConfig;
use crate::error::Result;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub config: TokenConfig,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state(config: TokenConfig) -> AppState {
    Arc::new(AppStateInner {
        config,
        metrics: Metrics::new(),
    })
}

pub fn build_state_from_env() -> Result<AppState> {
    Ok(build_state(TokenConfig::from_env()?))
}

pub fn build_test_state() -> AppState {
    build_state(TokenConfig::new(3600, "s3cr3t", "app"))
}
