//! Token configuration, injected into issue and verify.
//! Used by: token, state.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

const DEFAULT_EXPIRY_SECS: i64 = 3600;
const DEFAULT_ISSUER: &str = "sessiontoken";

/// Ten years; keeps `exp` well inside the range chrono can render.
pub const MAX_EXPIRY_SECS: i64 = 10 * 365 * 24 * 60 * 60;
/// One day; jsonwebtoken subtracts leeway from the current time unchecked.
pub const MAX_LEEWAY_SECS: u64 = 24 * 60 * 60;

#[derive(Debug)]
pub struct TokenConfig {
    /// Offset added to the issue instant to get `exp`.
    pub expiry_secs: i64,
    pub secret: SecretString,
    pub issuer: String,
    /// Clock skew tolerated when checking `exp`.
    pub leeway_secs: u64,
}

impl TokenConfig {
    pub fn new(expiry_secs: i64, secret: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            expiry_secs,
            secret: SecretString::from(secret.into()),
            issuer: issuer.into(),
            leeway_secs: 0,
        }
    }

    /// Sets the tolerated clock skew, clamped to [`MAX_LEEWAY_SECS`].
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs.min(MAX_LEEWAY_SECS);
        self
    }

    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }

    /// Reads `JWT_EXPIRE`, `JWT_SECRET`, `JWT_ISSUER` and `JWT_LEEWAY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Config("JWT_SECRET must be set".into()))?;

        let expiry_secs = match lookup("JWT_EXPIRE") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| (0..=MAX_EXPIRY_SECS).contains(secs))
                .ok_or_else(|| {
                    Error::Config(format!(
                        "JWT_EXPIRE must be an integer in 0..={MAX_EXPIRY_SECS}, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_EXPIRY_SECS,
        };

        let leeway_secs = match lookup("JWT_LEEWAY") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs <= MAX_LEEWAY_SECS)
                .ok_or_else(|| {
                    Error::Config(format!(
                        "JWT_LEEWAY must be an integer in 0..={MAX_LEEWAY_SECS}, got {raw:?}"
                    ))
                })?,
            None => 0,
        };

        let issuer = lookup("JWT_ISSUER")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        tracing::info!(issuer = %issuer, expiry_secs, leeway_secs, "token config loaded");
        Ok(Self::new(expiry_secs, secret, issuer).with_leeway(leeway_secs))
    }
}
