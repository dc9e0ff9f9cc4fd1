use serde::Serialize;

use crate::api::v1::extractors::AuthCtx;

/// Response body for `GET /me`: the authorization context the presented
/// token resolved to.
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub subject: String,
    pub authorities: Vec<String>,
}

impl From<AuthCtx> for MeResponse {
    fn from(ctx: AuthCtx) -> Self {
        Self {
            subject: ctx.subject,
            authorities: ctx.authorities,
        }
    }
}
