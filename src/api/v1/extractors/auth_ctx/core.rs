use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;

use crate::state::AppState;

use super::AuthCtx;

/// Extractor handing [`AuthCtx`] to handlers.
///
/// The access middleware must already have verified the token and inserted
/// the context into request extensions; a request that reached a handler
/// without that step is rejected outright.
pub struct AuthCtxExtractor(pub AuthCtx);

impl FromRequestParts<AppState> for AuthCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::services::auth::{JwtCodec, RequestAuthenticator, SigningSecret, TokenIssuer};

    fn test_state() -> AppState {
        let codec = JwtCodec::new(&SigningSecret::new("extractor-test-secret").unwrap());
        AppState::new(
            Arc::new(TokenIssuer::new(codec.clone(), 60, 3_600)),
            Arc::new(RequestAuthenticator::new(codec)),
        )
    }

    #[tokio::test]
    async fn request_without_context_is_rejected() {
        let state = test_state();
        let (mut parts, _) = axum::http::Request::new(()).into_parts();

        let result = AuthCtxExtractor::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn context_from_extensions_is_returned() {
        let state = test_state();
        let mut request = axum::http::Request::new(());
        request.extensions_mut().insert(AuthCtx {
            subject: "u123".to_string(),
            authorities: vec!["USER".to_string()],
        });
        let (mut parts, _) = request.into_parts();

        let AuthCtxExtractor(ctx) = AuthCtxExtractor::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(ctx.subject, "u123");
        assert!(ctx.has_authority("USER"));
    }
}
