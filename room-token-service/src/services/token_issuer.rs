/// Room join credential issuance.
///
/// A `TokenIssuer` turns a validated `IssueParams` into an HS256-signed JWT
/// that the media service accepts as a room join grant. It holds only the
/// API key, the signing key and the TTL policy; nothing about a credential
/// is remembered after it is returned.
///
/// Wire layout:
/// - header `{"typ":"JWT","alg":"HS256"}`
/// - claims `AccessClaims` (`iss`, `sub`, `name?`, `iat`, `nbf`, `exp`, `video`)
/// - signature HMAC-SHA256 over `header.claims` with the shared secret
///
/// Each segment is base64url without padding and joined with `.`.
///
/// Timestamps are whole unix seconds. `iat` is the issuance instant truncated
/// to the second, `nbf == iat` and `exp == iat + ttl` exactly.
use std::fmt;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Deserialize;

use crate::domain::{
    AccessClaims, ClaimSummary, DecodeError, IssueError, IssueParams, PermissionSet, VideoGrant,
};
use crate::utils::config::{
    env_vars, Config, ConfigError, DEFAULT_MAX_TOKEN_TTL_SECONDS, DEFAULT_TOKEN_TTL_SECONDS,
    MIN_SECRET_LEN,
};

#[derive(Clone)]
pub struct TokenIssuer {
    api_key: String,
    encoding_key: EncodingKey,
    default_ttl: Duration,
    max_ttl: Duration,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("api_key", &self.api_key)
            .field("default_ttl", &self.default_ttl.num_seconds())
            .field("max_ttl", &self.max_ttl.num_seconds())
            .finish_non_exhaustive()
    }
}

/// A freshly signed credential together with the claims it carries.
#[derive(Debug, Clone)]
pub struct SignedCredential {
    token: String,
    claims: AccessClaims,
}

impl SignedCredential {
    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn into_string(self) -> String {
        self.token
    }

    pub fn claims(&self) -> &AccessClaims {
        &self.claims
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        from_unix(self.claims.iat)
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        from_unix(self.claims.exp)
    }
}

impl fmt::Display for SignedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}

impl TokenIssuer {
    /// Build an issuer with the default TTL policy.
    ///
    /// Errors:
    /// - `ConfigError::Missing` if the API key or the secret is empty
    /// - `ConfigError::WeakSecret` if the secret is shorter than `MIN_SECRET_LEN`
    pub fn new(api_key: &str, secret: &[u8]) -> Result<Self, ConfigError> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::Missing(env_vars::API_KEY));
        }
        if secret.is_empty() {
            return Err(ConfigError::Missing(env_vars::API_SECRET));
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret {
                var: env_vars::API_SECRET,
                min: MIN_SECRET_LEN,
                got: secret.len(),
            });
        }

        Ok(Self {
            api_key: api_key.to_owned(),
            encoding_key: EncodingKey::from_secret(secret),
            default_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS),
            max_ttl: Duration::seconds(DEFAULT_MAX_TOKEN_TTL_SECONDS),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config.api_key(), config.api_secret())?.with_ttl_policy(
            Duration::seconds(config.token_ttl_seconds()),
            Duration::seconds(config.max_token_ttl_seconds()),
        )
    }

    /// Replace the TTL policy. `default_ttl` must lie in `1s..=max_ttl`.
    pub fn with_ttl_policy(
        mut self,
        default_ttl: Duration,
        max_ttl: Duration,
    ) -> Result<Self, ConfigError> {
        if max_ttl.num_seconds() <= 0 {
            return Err(ConfigError::Invalid(env_vars::MAX_TOKEN_TTL_SECONDS));
        }
        if default_ttl.num_seconds() <= 0 || default_ttl > max_ttl {
            return Err(ConfigError::Invalid(env_vars::TOKEN_TTL_SECONDS));
        }
        self.default_ttl = default_ttl;
        self.max_ttl = max_ttl;
        Ok(self)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub fn max_ttl(&self) -> Duration {
        self.max_ttl
    }

    /// Issue a credential valid from now.
    pub fn issue(&self, params: IssueParams) -> Result<SignedCredential, IssueError> {
        self.issue_at(params, Utc::now())
    }

    /// Issue a credential as if the current instant were `now`.
    ///
    /// Errors:
    /// - `IssueError::TtlOutOfRange` if the TTL is not a positive whole number
    ///   of seconds no larger than the configured maximum
    /// - `IssueError::Signing` if encoding fails
    pub fn issue_at(
        &self,
        params: IssueParams,
        now: DateTime<Utc>,
    ) -> Result<SignedCredential, IssueError> {
        let ttl = params.ttl.unwrap_or(self.default_ttl);
        let ttl_seconds = ttl.num_seconds();
        let out_of_range = IssueError::TtlOutOfRange {
            requested: ttl_seconds,
            max: self.max_ttl.num_seconds(),
        };
        if ttl_seconds <= 0 || ttl > self.max_ttl || ttl != Duration::seconds(ttl_seconds) {
            return Err(out_of_range);
        }

        let iat = now.timestamp();
        let exp = iat.checked_add(ttl_seconds).ok_or(out_of_range)?;

        let claims = AccessClaims {
            iss: self.api_key.clone(),
            sub: params.identity.as_ref().to_owned(),
            name: params.display_name,
            iat,
            nbf: iat,
            exp,
            video: VideoGrant::join(params.room.as_ref(), params.grants),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(SignedCredential { token, claims })
    }

    /// Read the claims of a credential WITHOUT checking its signature.
    ///
    /// For display only (expiry countdowns, list filtering). A successful
    /// decode says nothing about authenticity.
    pub fn decode_for_display(token: &str) -> Result<ClaimSummary, DecodeError> {
        let mut parts = token.trim().split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DecodeError::Malformed("expected three segments".into()));
        };

        let payload = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;
        let claims: DisplayClaims =
            serde_json::from_slice(&payload).map_err(|e| DecodeError::Malformed(e.to_string()))?;

        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| DecodeError::Malformed("exp out of range".into()))?;

        let grants = claims.video.permissions();
        Ok(ClaimSummary {
            subject_identity: claims.sub,
            room_name: claims.video.room,
            grants,
            issued_at: claims.iat.and_then(|t| DateTime::from_timestamp(t, 0)),
            not_before: claims.nbf.and_then(|t| DateTime::from_timestamp(t, 0)),
            expires_at,
        })
    }
}

// Lenient view of the claims: tokens minted elsewhere may omit iat/nbf or
// some grant flags.
#[derive(Deserialize)]
struct DisplayClaims {
    sub: String,
    iat: Option<i64>,
    nbf: Option<i64>,
    exp: i64,
    video: DisplayGrant,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisplayGrant {
    room: String,
    #[serde(default = "granted")]
    can_publish: bool,
    #[serde(default = "granted")]
    can_subscribe: bool,
    #[serde(default = "granted")]
    can_publish_data: bool,
}

impl DisplayGrant {
    fn permissions(&self) -> PermissionSet {
        PermissionSet {
            can_publish: self.can_publish,
            can_subscribe: self.can_subscribe,
            can_publish_data: self.can_publish_data,
        }
    }
}

fn granted() -> bool {
    true
}

fn from_unix(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}
