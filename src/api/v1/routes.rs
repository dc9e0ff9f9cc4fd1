/*
 * Responsibility
 * - Define the v1 URL structure
 * - /health and /token stay open: issuing a token must not require one
 * - Everything else runs behind the access middleware
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::v1::handlers::{health::health, me::me, token::issue_token};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let open = Router::new()
        .route("/health", get(health))
        .route("/token", post(issue_token));

    let authenticated =
        middleware::auth::access::apply(Router::new().route("/me", get(me)), state.clone());

    open.merge(authenticated).with_state(state)
}
