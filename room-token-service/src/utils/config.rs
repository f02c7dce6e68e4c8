use std::env;
use std::fmt;

use dotenvy::dotenv;
use thiserror::Error;

/// Shortest signing secret accepted for HS256.
pub const MIN_SECRET_LEN: usize = 32;
/// Shortest admin bearer key accepted.
pub const MIN_ADMIN_KEY_LEN: usize = 16;

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 10 * 60 * 60;
pub const DEFAULT_MAX_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;
pub const DEFAULT_TEST_ROOM_NAME: &str = "test-room";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub mod env_vars {
    pub const API_KEY: &str = "LIVEKIT_API_KEY";
    pub const API_SECRET: &str = "LIVEKIT_API_SECRET";
    pub const ADMIN_API_KEY: &str = "ADMIN_API_KEY";
    pub const TOKEN_TTL_SECONDS: &str = "TOKEN_TTL_SECONDS";
    pub const MAX_TOKEN_TTL_SECONDS: &str = "MAX_TOKEN_TTL_SECONDS";
    pub const TEST_ROOM_NAME: &str = "TEST_ROOM_NAME";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
}

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    api_secret: Vec<u8>,
    admin_api_key: String,
    token_ttl_seconds: i64,
    max_token_ttl_seconds: i64,
    test_room_name: String,
    bind_address: String,
}

impl Config {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
    pub fn api_secret(&self) -> &[u8] {
        &self.api_secret
    }
    pub fn admin_api_key(&self) -> &str {
        &self.admin_api_key
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
    pub fn max_token_ttl_seconds(&self) -> i64 {
        self.max_token_ttl_seconds
    }
    pub fn test_room_name(&self) -> &str {
        &self.test_room_name
    }
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    /// Load from the environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` is this over `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = req_var(&lookup, env_vars::API_KEY)?;
        let api_secret = req_var(&lookup, env_vars::API_SECRET)?.into_bytes();
        if api_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret {
                var: env_vars::API_SECRET,
                min: MIN_SECRET_LEN,
                got: api_secret.len(),
            });
        }

        let admin_api_key = req_var(&lookup, env_vars::ADMIN_API_KEY)?;
        if admin_api_key.len() < MIN_ADMIN_KEY_LEN {
            return Err(ConfigError::WeakSecret {
                var: env_vars::ADMIN_API_KEY,
                min: MIN_ADMIN_KEY_LEN,
                got: admin_api_key.len(),
            });
        }

        let max_token_ttl_seconds = parse_i64(&lookup, env_vars::MAX_TOKEN_TTL_SECONDS)?
            .unwrap_or(DEFAULT_MAX_TOKEN_TTL_SECONDS);
        if max_token_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid(env_vars::MAX_TOKEN_TTL_SECONDS));
        }

        let token_ttl_seconds = parse_i64(&lookup, env_vars::TOKEN_TTL_SECONDS)?
            .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);
        if token_ttl_seconds <= 0 || token_ttl_seconds > max_token_ttl_seconds {
            return Err(ConfigError::Invalid(env_vars::TOKEN_TTL_SECONDS));
        }

        let test_room_name = lookup(env_vars::TEST_ROOM_NAME)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TEST_ROOM_NAME.into());
        let bind_address = lookup(env_vars::BIND_ADDRESS)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());

        Ok(Self {
            api_key,
            api_secret,
            admin_api_key,
            token_ttl_seconds,
            max_token_ttl_seconds,
            test_room_name,
            bind_address,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("admin_api_key", &"[REDACTED]")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .field("max_token_ttl_seconds", &self.max_token_ttl_seconds)
            .field("test_room_name", &self.test_room_name)
            .field("bind_address", &self.bind_address)
            .finish()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("{var} must be at least {min} bytes, got {got}")]
    WeakSecret {
        var: &'static str,
        min: usize,
        got: usize,
    },
}

fn req_var<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn parse_i64<F>(lookup: &F, key: &'static str) -> Result<Option<i64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(key)),
    }
}
