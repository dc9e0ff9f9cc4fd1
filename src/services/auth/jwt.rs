use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::error;

use crate::error::AppError;
use crate::services::auth::claims::TokenClaims;
use crate::services::auth::error::AuthError;
use crate::services::auth::secret::SigningSecret;

/// HMAC-SHA256 token codec. The only place that reads or writes the signed
/// wire format.
///
/// Both keys are derived from the process-wide [`SigningSecret`] at
/// construction; every token this service ever verifies must have been
/// signed with the same secret.
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtCodec {
    pub fn new(secret: &SigningSecret) -> Self {
        // The library only checks structure and signature here. Expiry and
        // claim-shape checks run in `decode_at`, each with its own error
        // kind.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Serialize and sign `claims` into the compact `header.claims.signature`
    /// form.
    pub fn encode(&self, claims: &TokenClaims) -> Result<String, AppError> {
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());

        jsonwebtoken::encode(&header, claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign token");
            AppError::Internal
        })
    }

    /// Verify `token` as of the instant `now`.
    ///
    /// Checks run in a fixed order and the first failure decides the error:
    /// 1. structure (three segments, decodable header and claims)
    /// 2. signature under our key
    /// 3. claim shape (`sub` present and non-empty)
    /// 4. expiry (`exp <= now` is expired)
    ///
    /// A tampered token therefore reports [`AuthError::InvalidSignature`]
    /// even when its claims would also be expired.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthError> {
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                // A token signed with a different key or a different
                // algorithm is the same outcome: not signed by us.
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                _ => AuthError::MalformedToken(e.to_string()),
            })?;

        let claims = data.claims;
        if claims.sub.trim().is_empty() {
            return Err(AuthError::MalformedToken("empty 'sub' claim".to_string()));
        }
        if claims.is_expired_at(now) {
            return Err(AuthError::ExpiredToken {
                expired_at: claims.exp,
                now: now.timestamp(),
            });
        }

        Ok(claims)
    }

    /// Verify `token` against the current wall clock.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        self.decode_at(token, Utc::now())
    }
}
