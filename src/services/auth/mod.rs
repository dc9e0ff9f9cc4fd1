pub mod authenticator;
pub mod claims;
pub mod error;
pub mod factory;
pub mod jwt;
pub mod secret;
pub mod token_issuer;

pub use authenticator::{AUTH_TOKEN_HEADER, RequestAuthenticator};
pub use claims::TokenClaims;
pub use error::AuthError;
pub use factory::build_auth_services;
pub use jwt::JwtCodec;
pub use secret::SigningSecret;
pub use token_issuer::{IssuedTokenPair, TokenIssuer};
