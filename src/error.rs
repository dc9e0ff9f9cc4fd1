use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;

/// Application-level error. Every handler returns this and every failure
/// leaves the process as a uniform `{ "error": { code, message } }` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },

    #[error("{code}: {message}")]
    Unauthorized { code: &'static str, message: String },

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        AppError::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Unauthorized {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::Unauthorized { code, message } => (StatusCode::UNAUTHORIZED, code, message),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                "internal server error".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for AppError {
    /// Authentication failures all map to 401; the kind survives as the
    /// machine-readable code so clients can branch on `TOKEN_EXPIRED` for
    /// the refresh flow.
    fn from(e: AuthError) -> Self {
        let code = match &e {
            AuthError::MalformedToken(_) => "MALFORMED_TOKEN",
            AuthError::InvalidSignature => "INVALID_SIGNATURE",
            AuthError::ExpiredToken { .. } => "TOKEN_EXPIRED",
            AuthError::NoCredentials => "NO_CREDENTIALS",
        };
        AppError::unauthorized(code, e.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(_: ConfigError) -> Self {
        // Configuration detail stays in the startup logs, not in responses.
        AppError::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_kinds_keep_distinct_codes() {
        let cases = [
            (AuthError::NoCredentials, "NO_CREDENTIALS"),
            (AuthError::InvalidSignature, "INVALID_SIGNATURE"),
            (
                AuthError::ExpiredToken { expired_at: 10, now: 20 },
                "TOKEN_EXPIRED",
            ),
            (
                AuthError::MalformedToken("broken".to_string()),
                "MALFORMED_TOKEN",
            ),
        ];

        for (auth_error, expected_code) in cases {
            match AppError::from(auth_error) {
                AppError::Unauthorized { code, .. } => assert_eq!(code, expected_code),
                other => panic!("expected Unauthorized, got {other:?}"),
            }
        }
    }

    #[test]
    fn responses_carry_the_matching_status() {
        let unauthorized = AppError::from(AuthError::NoCredentials).into_response();
        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

        let bad_request = AppError::bad_request("MISSING_SUBJECT", "subject is required")
            .into_response();
        assert_eq!(bad_request.status(), StatusCode::BAD_REQUEST);

        let internal = AppError::Internal.into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
