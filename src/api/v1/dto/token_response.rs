use serde::Serialize;

use crate::services::auth::IssuedTokenPair;

/// Response body for `POST /token`, for both grants.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "Bearer".
    pub token_type: String,
    /// Seconds until `access_token` expires.
    pub expires_in: u64,
    pub refresh_token: String,
}

impl From<IssuedTokenPair> for TokenResponse {
    fn from(pair: IssuedTokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            token_type: pair.token_type.to_string(),
            expires_in: pair.expires_in,
            refresh_token: pair.refresh_token,
        }
    }
}
