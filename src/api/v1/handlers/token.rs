use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::v1::dto::token_request::TokenRequest;
use crate::api::v1::dto::token_response::TokenResponse;
use crate::error::AppError;
use crate::state::AppState;

/// POST /token
///
/// Issue grant: mint an access/refresh pair for a subject the caller has
/// already authenticated. Refresh grant: exchange a still-valid refresh
/// token for a fresh access token.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let pair = match req.grant_type.as_deref() {
        Some("refresh_token") => {
            let refresh_token = req.refresh_token.ok_or_else(|| {
                AppError::bad_request(
                    "MISSING_REFRESH_TOKEN",
                    "refresh_token is required for the refresh_token grant",
                )
            })?;

            state.issuer.refresh(&refresh_token)?
        }
        Some(other) => {
            tracing::debug!(grant_type = other, "unsupported grant type");
            return Err(AppError::bad_request(
                "UNSUPPORTED_GRANT_TYPE",
                format!("unsupported grant_type: {other}"),
            ));
        }
        None => {
            let subject = req.subject.ok_or_else(|| {
                AppError::bad_request("MISSING_SUBJECT", "subject is required when issuing tokens")
            })?;

            state.issuer.issue_token_pair(&subject, &req.roles)?
        }
    };

    Ok((StatusCode::OK, Json(TokenResponse::from(pair))))
}
