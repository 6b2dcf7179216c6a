//! HS256 session token signing.
//! Used by: handlers::issue.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::config::TokenConfig;
use crate::error::{Error, Result};
use crate::token::claims::Claims;

/// Mints a token for `subject` that expires `config.expiry_secs` from now.
///
/// The subject is not checked for emptiness here; callers own that rule.
pub fn issue(subject: &str, config: &TokenConfig) -> Result<String> {
    issue_with_claims(subject, config).map(|(token, _)| token)
}

/// Like [`issue`], also handing back the claims that were signed.
pub fn issue_with_claims(subject: &str, config: &TokenConfig) -> Result<(String, Claims)> {
    let claims = Claims::new(subject, config.issuer.as_str(), config.expiry_secs);
    let token = sign_claims(&claims, config.secret_bytes())?;
    Ok((token, claims))
}

pub fn sign_claims(claims: &Claims, secret: &[u8]) -> Result<String> {
    let header = Header::new(Algorithm::HS256);
    encode(&header, claims, &EncodingKey::from_secret(secret))
        .map_err(|e| Error::Signing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_three_segments() -> Result<()> {
        let config = TokenConfig::new(3600, "s3cr3t", "app");
        let token = issue("user-42", &config)?;
        assert_eq!(token.split('.').count(), 3);
        assert!(token.split('.').all(|segment| !segment.is_empty()));
        Ok(())
    }

    #[test]
    fn header_declares_hs256() -> Result<()> {
        let config = TokenConfig::new(3600, "s3cr3t", "app");
        let token = issue("user-42", &config)?;
        let header = jsonwebtoken::decode_header(&token)?;
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
        Ok(())
    }

    #[test]
    fn same_claims_sign_identically() -> Result<()> {
        let claims = Claims::new("user-42", "app", 60);
        let a = sign_claims(&claims, b"s3cr3t")?;
        let b = sign_claims(&claims, b"s3cr3t")?;
        assert_eq!(a, b);
        let other = sign_claims(&claims, b"different")?;
        assert_ne!(a, other);
        Ok(())
    }
}
