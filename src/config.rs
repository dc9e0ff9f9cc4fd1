use std::env;
use std::net::SocketAddr;

use thiserror::Error;

use crate::services::auth::SigningSecret;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn is_production(&self) -> bool {
        matches!(self, AppEnv::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(&'static str),
    #[error("invalid value for env: {0}")]
    Invalid(&'static str),
}

/// Process configuration, read once at startup. Nothing re-reads the
/// environment after `from_env` returns.
#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    /// Origins allowed by CORS in production, e.g. "https://app.example.com".
    pub cors_allowed_origins: Vec<String>,
    pub token_secret: SigningSecret,
    pub access_token_ttl_seconds: u64,
    pub refresh_token_ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // .env is optional; real deployments set the environment directly
        let _ = dotenvy::dotenv();

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);
        let addr: SocketAddr = ([0, 0, 0, 0], port).into();

        let app_env = match env::var("APP_ENV").as_deref() {
            Ok("production") => AppEnv::Production,
            _ => AppEnv::Development,
        };

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let raw_secret =
            env::var("AUTH_TOKEN_SECRET").map_err(|_| ConfigError::Missing("AUTH_TOKEN_SECRET"))?;
        let token_secret =
            SigningSecret::new(&raw_secret).ok_or(ConfigError::Invalid("AUTH_TOKEN_SECRET"))?;

        let access_token_ttl_seconds = env::var("ACCESS_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(1_800); // 30 min
        let refresh_token_ttl_seconds = env::var("REFRESH_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(2_592_000); // 30 days

        // A zero TTL would mint tokens that are expired the instant they
        // are issued.
        if access_token_ttl_seconds == 0 {
            return Err(ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS"));
        }
        if refresh_token_ttl_seconds == 0 {
            return Err(ConfigError::Invalid("REFRESH_TOKEN_TTL_SECONDS"));
        }

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            token_secret,
            access_token_ttl_seconds,
            refresh_token_ttl_seconds,
        })
    }
}
