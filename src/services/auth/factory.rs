/// Factory: build the token services from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::authenticator::RequestAuthenticator;
use crate::services::auth::jwt::JwtCodec;
use crate::services::auth::token_issuer::TokenIssuer;

/// Derive the codec from the configured secret once and share it between
/// issuance and verification.
pub fn build_auth_services(config: &Config) -> (Arc<TokenIssuer>, Arc<RequestAuthenticator>) {
    let codec = JwtCodec::new(&config.token_secret);

    let issuer = TokenIssuer::new(
        codec.clone(),
        config.access_token_ttl_seconds,
        config.refresh_token_ttl_seconds,
    );
    let authenticator = RequestAuthenticator::new(codec);

    (Arc::new(issuer), Arc::new(authenticator))
}
