use axum::Json;

use crate::api::v1::dto::me_response::MeResponse;
use crate::api::v1::extractors::AuthCtxExtractor;

/// GET /me
///
/// Echo the authorization context resolved from the presented token. Lets a
/// client check what a stored token still entitles it to.
pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse::from(ctx))
}
