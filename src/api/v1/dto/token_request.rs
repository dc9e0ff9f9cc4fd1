use serde::Deserialize;

/// Request body for `POST /token`. One endpoint, branched by `grant_type`.
///
/// - Issue (the default): provide `subject` and optionally `roles`. The
///   caller is the credential-exchange layer and has already verified the
///   subject.
/// - Refresh: set `grant_type` to `"refresh_token"` and provide
///   `refresh_token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    /// OAuth2-style grant selector. Absent means issue.
    pub grant_type: Option<String>,

    /// Subject (user id) to issue for. Required for the issue grant.
    pub subject: Option<String>,

    /// Role names embedded into the issued tokens, as decided upstream.
    #[serde(default)]
    pub roles: Vec<String>,

    /// Previously issued refresh token. Required for the refresh grant.
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_default_to_empty() {
        let req: TokenRequest =
            serde_json::from_value(serde_json::json!({ "subject": "u123" })).unwrap();

        assert_eq!(req.subject.as_deref(), Some("u123"));
        assert!(req.roles.is_empty());
        assert!(req.grant_type.is_none());
    }

    #[test]
    fn refresh_grant_shape() {
        let req: TokenRequest = serde_json::from_value(serde_json::json!({
            "grant_type": "refresh_token",
            "refresh_token": "aaa.bbb.ccc",
        }))
        .unwrap();

        assert_eq!(req.grant_type.as_deref(), Some("refresh_token"));
        assert_eq!(req.refresh_token.as_deref(), Some("aaa.bbb.ccc"));
    }
}
