use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by one signed token.
///
/// Wire names follow the registered JWT claim names (`sub`, `iat`, `exp`)
/// plus the `roles` list this service grants. Timestamps are unix seconds.
///
/// Values of this type come from exactly two places: built by the issuer at
/// signing time, or returned by the codec after the signature and expiry
/// checks passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: stable identifier of the authenticated user. Non-empty.
    pub sub: String,
    /// Role names granted to the subject, kept in grant order.
    pub roles: Vec<String>,
    /// Issued-at instant.
    pub iat: i64,
    /// Expiry instant. Always strictly greater than `iat` for issued tokens.
    pub exp: i64,
}

impl TokenClaims {
    /// Whether the token is no longer usable at `now`.
    ///
    /// The boundary is inclusive: a token evaluated exactly at its `exp`
    /// instant is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(iat: i64, exp: i64) -> TokenClaims {
        TokenClaims {
            sub: "u123".to_string(),
            roles: vec!["USER".to_string()],
            iat,
            exp,
        }
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let now = Utc::now();
        let ts = now.timestamp();

        assert!(claims(ts - 60, ts).is_expired_at(now));
        assert!(claims(ts - 60, ts - 1).is_expired_at(now));
        assert!(!claims(ts, ts + 1).is_expired_at(now));
    }

    #[test]
    fn serializes_with_registered_claim_names() {
        let value = serde_json::to_value(claims(1_700_000_000, 1_700_001_800)).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(value["sub"], "u123");
        assert_eq!(value["roles"], serde_json::json!(["USER"]));
        assert_eq!(value["iat"], 1_700_000_000);
        assert_eq!(value["exp"], 1_700_001_800);
    }

    #[test]
    fn deserializes_from_wire_json() {
        let decoded: TokenClaims = serde_json::from_value(serde_json::json!({
            "sub": "u123",
            "roles": ["USER", "ADMIN"],
            "iat": 1_700_000_000,
            "exp": 1_700_001_800,
        }))
        .unwrap();

        assert_eq!(decoded.sub, "u123");
        assert_eq!(decoded.roles, vec!["USER", "ADMIN"]);
        assert_eq!(decoded.exp - decoded.iat, 1_800);
    }
}
