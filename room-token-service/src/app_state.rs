use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::IssuedTokenLog;
use crate::services::TokenIssuer;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type TokenIssuerType = Arc<TokenIssuer>;
pub type ConfigType = Arc<Config>;
pub type IssuedTokenLogType = Arc<RwLock<IssuedTokenLog>>;

#[derive(Clone)]
pub struct AppState {
    pub token_issuer: TokenIssuerType,
    pub config: ConfigType,
    pub issued_tokens: IssuedTokenLogType,
}

impl AppState {
    pub fn new(
        token_issuer: TokenIssuerType,
        config: ConfigType,
        issued_tokens: IssuedTokenLogType,
    ) -> Self {
        Self {
            token_issuer,
            config,
            issued_tokens,
        }
    }

    /// Build the full state from configuration. Fails on a weak or missing secret.
    pub fn from_config(config: Config) -> Result<Self, crate::utils::config::ConfigError> {
        let token_issuer = Arc::new(TokenIssuer::from_config(&config)?);
        Ok(Self::new(
            token_issuer,
            Arc::new(config),
            Arc::new(RwLock::new(IssuedTokenLog::new())),
        ))
    }
}
