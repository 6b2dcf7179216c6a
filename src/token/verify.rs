//! HS256 session token verification.
//! Used by: handlers::verify, handlers::me.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::config::{TokenConfig, MAX_LEEWAY_SECS};
use crate::error::{Error, Result};
use crate::token::claims::Claims;

/// Returns the subject of a token issued with the same configuration.
pub fn verify(token: &str, config: &TokenConfig) -> Result<String> {
    verify_claims(token, config).map(|claims| claims.sub)
}

/// Checks signature, structure, `exp` and `iss`, then re-checks the claim shape.
///
/// Parser rejections, expiry included, surface as [`Error::Parse`] untouched;
/// a payload that parses but carries no usable subject is [`Error::Extraction`].
pub fn verify_claims(token: &str, config: &TokenConfig) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = config.leeway_secs.min(MAX_LEEWAY_SECS);
    validation.set_issuer(&[config.issuer.as_str()]);
    validation.set_required_spec_claims(&["exp", "sub", "iss"]);

    let key = DecodingKey::from_secret(config.secret_bytes());
    let data = decode::<Claims>(token, &key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "token rejected by parser");
        Error::Parse(e)
    })?;

    let claims = data.claims;
    if claims.sub.is_empty() {
        tracing::debug!("token parsed but claims unusable");
        return Err(Error::Extraction);
    }

    Ok(claims)
}
