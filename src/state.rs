use std::sync::Arc;

use crate::services::auth::{RequestAuthenticator, TokenIssuer};

/// Shared application state handed to every handler and middleware.
#[derive(Clone, Debug)]
pub struct AppState {
    pub issuer: Arc<TokenIssuer>,
    pub authenticator: Arc<RequestAuthenticator>,
}

impl AppState {
    pub fn new(issuer: Arc<TokenIssuer>, authenticator: Arc<RequestAuthenticator>) -> Self {
        Self {
            issuer,
            authenticator,
        }
    }
}
