//! Access middleware: verify `X-AUTH-TOKEN` and hand the result to handlers.
//!
//! Routes wrapped by [`apply`] only reach their handler once the token has
//! verified; the handler then receives the context through the
//! `AuthCtxExtractor`.

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use tracing::{debug, warn};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Wrap `router` so every route in it requires a valid token.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // from_fn cannot take a State extractor on its own in axum 0.8; the
    // state is threaded through from_fn_with_state instead
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let claims = match state.authenticator.authenticate(req.headers()) {
        Ok(claims) => claims,
        Err(err) => {
            match &err {
                // Ordinary outcomes: anonymous request, or a token due for
                // the refresh flow.
                AuthError::NoCredentials | AuthError::ExpiredToken { .. } => {
                    debug!(error = %err, "request not authenticated");
                }
                // Tampering-class failures.
                AuthError::MalformedToken(_) | AuthError::InvalidSignature => {
                    warn!(error = %err, "rejected presented token");
                }
            }
            return Err(AppError::from(err));
        }
    };

    // middleware -> extractor handoff
    req.extensions_mut().insert(AuthCtx::from(claims));

    Ok(next.run(req).await)
}
