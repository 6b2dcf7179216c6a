//! sessiontoken: HTTP front for session token issuance and verification.
//! Used by: binary entrypoint.

use sessiontoken::{server, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let state = state::build_state_from_env()?;
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    tracing::info!("starting sessiontoken on {}", addr);

    server::run(state, &addr).await?;
    Ok(())
}
