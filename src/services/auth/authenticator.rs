use axum::http::HeaderMap;
use chrono::{DateTime, Utc};

use crate::services::auth::claims::TokenClaims;
use crate::services::auth::error::AuthError;
use crate::services::auth::jwt::JwtCodec;

/// Request header carrying the signed token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Resolves inbound request headers into verified token claims.
///
/// A missing header is an ordinary anonymous request and surfaces as
/// [`AuthError::NoCredentials`]; a present token is handed to the codec and
/// its error kinds pass through unchanged.
#[derive(Clone, Debug)]
pub struct RequestAuthenticator {
    codec: JwtCodec,
}

impl RequestAuthenticator {
    pub fn new(codec: JwtCodec) -> Self {
        Self { codec }
    }

    /// Read the raw token from `X-AUTH-TOKEN`.
    ///
    /// `None` when the header is absent or its value is not valid UTF-8
    /// (treated the same as absent).
    pub fn extract_token<'h>(&self, headers: &'h HeaderMap) -> Option<&'h str> {
        headers.get(AUTH_TOKEN_HEADER).and_then(|v| v.to_str().ok())
    }

    /// Authenticate a request from its headers.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<TokenClaims, AuthError> {
        self.authenticate_at(headers, Utc::now())
    }

    /// [`authenticate`](Self::authenticate) against an explicit evaluation
    /// instant.
    pub fn authenticate_at(
        &self,
        headers: &HeaderMap,
        now: DateTime<Utc>,
    ) -> Result<TokenClaims, AuthError> {
        let token = self.extract_token(headers).ok_or(AuthError::NoCredentials)?;
        self.codec.decode_at(token, now)
    }
}
