use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::services::auth::claims::TokenClaims;
use crate::services::auth::jwt::JwtCodec;

/// One issued access/refresh pair, as returned to the credential-exchange
/// handler. Service-level type so handlers stay thin.
#[derive(Clone, Debug)]
pub struct IssuedTokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Always "Bearer".
    pub token_type: &'static str,
    /// Seconds until the access token expires.
    pub expires_in: u64,
}

/// Issues signed tokens for subjects whose credentials the caller already
/// verified.
///
/// Access and refresh tokens share the wire format and differ only in TTL.
/// Roles are embedded as given; this type never decides authorization.
#[derive(Clone, Debug)]
pub struct TokenIssuer {
    codec: JwtCodec,
    access_ttl_seconds: u64,
    refresh_ttl_seconds: u64,
}

impl TokenIssuer {
    pub fn new(codec: JwtCodec, access_ttl_seconds: u64, refresh_ttl_seconds: u64) -> Self {
        Self {
            codec,
            access_ttl_seconds,
            refresh_ttl_seconds,
        }
    }

    /// Issue a short-lived access token for `subject` carrying `roles`.
    pub fn issue_access_token(&self, subject: &str, roles: &[String]) -> Result<String, AppError> {
        self.issue(subject, roles, self.access_ttl_seconds)
    }

    /// Issue a long-lived refresh token for `subject` carrying `roles`.
    pub fn issue_refresh_token(&self, subject: &str, roles: &[String]) -> Result<String, AppError> {
        self.issue(subject, roles, self.refresh_ttl_seconds)
    }

    fn issue(&self, subject: &str, roles: &[String], ttl_seconds: u64) -> Result<String, AppError> {
        if subject.trim().is_empty() {
            return Err(AppError::bad_request(
                "INVALID_SUBJECT",
                "subject must be non-empty",
            ));
        }

        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            roles: roles.to_vec(),
            iat: now,
            exp: now + ttl_seconds as i64,
        };

        self.codec.encode(&claims)
    }

    /// Issue the access/refresh pair for one successful credential exchange.
    pub fn issue_token_pair(&self, subject: &str, roles: &[String]) -> Result<IssuedTokenPair, AppError> {
        let access_token = self.issue_access_token(subject, roles)?;
        let refresh_token = self.issue_refresh_token(subject, roles)?;

        Ok(IssuedTokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer",
            expires_in: self.access_ttl_seconds,
        })
    }

    /// Exchange a still-valid refresh token for a fresh access token.
    ///
    /// The presented token goes through full verification first; the
    /// [`AuthError`](super::AuthError) kind is preserved in the returned
    /// error so an expired refresh token is distinguishable from a forged
    /// one.
    ///
    /// NOTE: no rotation. The pair returns the same refresh token until it
    /// expires, at which point the client exchanges credentials again.
    pub fn refresh(&self, refresh_token: &str) -> Result<IssuedTokenPair, AppError> {
        self.refresh_at(refresh_token, Utc::now())
    }

    /// [`refresh`](Self::refresh) against an explicit evaluation instant.
    pub fn refresh_at(&self, refresh_token: &str, now: DateTime<Utc>) -> Result<IssuedTokenPair, AppError> {
        let claims = self.codec.decode_at(refresh_token, now)?;

        let access_token = self.issue_access_token(&claims.sub, &claims.roles)?;

        Ok(IssuedTokenPair {
            access_token,
            refresh_token: refresh_token.to_string(),
            token_type: "Bearer",
            expires_in: self.access_ttl_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::error::AuthError;
    use crate::services::auth::secret::SigningSecret;

    const ACCESS_TTL: u64 = 1_800; // 30 min
    const REFRESH_TTL: u64 = 2_592_000; // 30 days

    fn codec() -> JwtCodec {
        JwtCodec::new(&SigningSecret::new("issuer-test-secret").unwrap())
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(codec(), ACCESS_TTL, REFRESH_TTL)
    }

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn access_token_carries_subject_roles_and_ttl() {
        let token = issuer().issue_access_token("u123", &roles(&["USER"])).unwrap();
        let claims = codec().decode(&token).unwrap();

        assert_eq!(claims.sub, "u123");
        assert_eq!(claims.roles, vec!["USER"]);
        assert_eq!(claims.exp - claims.iat, ACCESS_TTL as i64);
    }

    #[test]
    fn refresh_token_gets_the_long_ttl() {
        let token = issuer().issue_refresh_token("u123", &roles(&["USER"])).unwrap();
        let claims = codec().decode(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, REFRESH_TTL as i64);
    }

    #[test]
    fn refresh_token_survives_until_its_expiry_instant() {
        let token = issuer().issue_refresh_token("u123", &roles(&["USER"])).unwrap();
        let claims = codec().decode(&token).unwrap();

        let just_before = chrono::DateTime::from_timestamp(claims.exp - 1, 0).unwrap();
        assert!(codec().decode_at(&token, just_before).is_ok());

        let at_expiry = chrono::DateTime::from_timestamp(claims.exp, 0).unwrap();
        assert!(matches!(
            codec().decode_at(&token, at_expiry),
            Err(AuthError::ExpiredToken { .. })
        ));
    }

    #[test]
    fn empty_roles_are_preserved() {
        let token = issuer().issue_access_token("u123", &[]).unwrap();
        let claims = codec().decode(&token).unwrap();

        assert!(claims.roles.is_empty());
    }

    #[test]
    fn blank_subject_is_rejected() {
        for subject in ["", "   "] {
            let err = issuer().issue_access_token(subject, &[]).unwrap_err();
            assert!(matches!(
                err,
                AppError::BadRequest { code: "INVALID_SUBJECT", .. }
            ));
        }
    }

    #[test]
    fn pair_reports_the_access_token_lifetime() {
        let pair = issuer().issue_token_pair("u123", &roles(&["USER", "ADMIN"])).unwrap();

        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, ACCESS_TTL);

        let access = codec().decode(&pair.access_token).unwrap();
        let refresh = codec().decode(&pair.refresh_token).unwrap();
        assert_eq!(access.sub, refresh.sub);
        assert_eq!(access.roles, vec!["USER", "ADMIN"]);
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn refresh_reissues_access_for_the_same_subject() {
        let issuer = issuer();
        let pair = issuer.issue_token_pair("u123", &roles(&["USER"])).unwrap();

        let refreshed = issuer.refresh(&pair.refresh_token).unwrap();

        assert_eq!(refreshed.refresh_token, pair.refresh_token);
        let claims = codec().decode(&refreshed.access_token).unwrap();
        assert_eq!(claims.sub, "u123");
        assert_eq!(claims.roles, vec!["USER"]);
        assert_eq!(claims.exp - claims.iat, ACCESS_TTL as i64);
    }

    #[test]
    fn refresh_with_expired_token_reports_expiry() {
        let issuer = issuer();
        let token = issuer.issue_refresh_token("u123", &roles(&["USER"])).unwrap();
        let exp = codec().decode(&token).unwrap().exp;

        // 31 days after issuance is past the 30-day lifetime.
        let much_later = chrono::DateTime::from_timestamp(exp + 86_400, 0).unwrap();
        let err = issuer.refresh_at(&token, much_later).unwrap_err();

        assert!(matches!(
            err,
            AppError::Unauthorized { code: "TOKEN_EXPIRED", .. }
        ));
    }

    #[test]
    fn refresh_with_tampered_token_reports_invalid_signature() {
        let issuer = issuer();
        let token = issuer.issue_refresh_token("u123", &roles(&["USER"])).unwrap();

        let mut tampered = token.clone();
        let idx = token.find('.').unwrap() + 2;
        let replacement = if tampered.as_bytes()[idx] == b'A' { "B" } else { "A" };
        tampered.replace_range(idx..idx + 1, replacement);

        let err = issuer.refresh(&tampered).unwrap_err();
        assert!(matches!(
            err,
            AppError::Unauthorized { code: "INVALID_SIGNATURE", .. }
        ));
    }
}
