use thiserror::Error;

/// Failure kinds surfaced by token verification and request authentication.
///
/// Callers branch on the kind: `ExpiredToken` can go through the refresh
/// flow, `NoCredentials` is an ordinary anonymous request, the other two
/// mean the presented token was never ours.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token could not be parsed into header, claims and signature, or
    /// a required claim is missing or has the wrong type.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// Structurally valid token whose signature does not verify under this
    /// service's key.
    #[error("invalid token signature")]
    InvalidSignature,

    /// Correctly signed token evaluated at or after its expiry instant.
    #[error("token expired at {expired_at} (checked at {now})")]
    ExpiredToken { expired_at: i64, now: i64 },

    /// No token was presented on the request.
    #[error("no credentials presented")]
    NoCredentials,
}
