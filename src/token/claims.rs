//! Claims carried in the payload of a session token.
//! Used by: token::sign, token::verify, handlers::issue.

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

impl Claims {
    pub fn new(sub: impl Into<String>, iss: impl Into<String>, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: sub.into(),
            exp: now.saturating_add(ttl_seconds),
            iat: now,
            iss: iss.into(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_with_leeway(0)
    }

    pub fn is_expired_with_leeway(&self, leeway_secs: u64) -> bool {
        let leeway = i64::try_from(leeway_secs).unwrap_or(i64::MAX);
        Utc::now().timestamp() > self.exp.saturating_add(leeway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_claims_have_valid_fields() {
        let claims = Claims::new("user-42", "app", 3600);
        assert_eq!(claims.sub, "user-42");
        assert_eq!(claims.iss, "app");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn claims_in_the_past_are_expired() {
        let claims = Claims::new("user-42", "app", -1);
        assert!(claims.is_expired());
    }

    #[test]
    fn leeway_extends_validity() {
        let claims = Claims::new("user-42", "app", -10);
        assert!(claims.is_expired_with_leeway(5));
        assert!(!claims.is_expired_with_leeway(60));
    }

    #[test]
    fn payload_uses_registered_claim_names() {
        let claims = Claims::new("user-42", "app", 60);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], "user-42");
        assert_eq!(json["iss"], "app");
        assert!(json["exp"].is_i64());
        assert!(json["iat"].is_i64());
    }
}
