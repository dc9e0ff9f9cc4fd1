use crate::services::auth::TokenClaims;

/// Authorization context of one authenticated request.
///
/// - `subject` is the principal: the user identifier from the verified token
/// - `authorities` are the role names the token carries
///
/// Built from [`TokenClaims`] only after verification; the access middleware
/// inserts it into request extensions and the extractor reads it back.
#[derive(Clone, Debug)]
pub struct AuthCtx {
    pub subject: String,
    pub authorities: Vec<String>,
}

impl AuthCtx {
    /// Membership check for coarse-grained route guards.
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

impl From<TokenClaims> for AuthCtx {
    fn from(claims: TokenClaims) -> Self {
        Self {
            subject: claims.sub,
            authorities: claims.roles,
        }
    }
}
