use std::collections::HashSet;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::domain::{AccessClaims, CredentialState, VerifyError};
use crate::utils::config::{env_vars, Config, ConfigError, MIN_SECRET_LEN};

/// Checks credentials the way the media service does: signature first, then
/// the `nbf`/`exp` window evaluated at the supplied instant.
///
/// The service itself never gates anything on this; it exists so the issuing
/// side can prove its output is accepted (and tampered output rejected).
#[derive(Clone)]
pub struct TokenVerifier {
    api_key: String,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(api_key: &str, secret: &[u8]) -> Result<Self, ConfigError> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::Missing(env_vars::API_KEY));
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret {
                var: env_vars::API_SECRET,
                min: MIN_SECRET_LEN,
                got: secret.len(),
            });
        }

        // Time bounds are checked against the caller's clock, not the
        // library's, so only signature, algorithm and issuer are left here.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims = ["exp", "nbf", "iss", "sub"]
            .into_iter()
            .map(String::from)
            .collect::<HashSet<_>>();
        validation.set_issuer(&[api_key]);

        Ok(Self {
            api_key: api_key.to_owned(),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config.api_key(), config.api_secret())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn verify(&self, token: &str) -> Result<AccessClaims, VerifyError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify `token` as of `now`.
    ///
    /// Errors:
    /// - `VerifyError::Malformed`: not a three-segment HS256 token with the expected claims
    /// - `VerifyError::InvalidSignature`: signature does not match the shared secret
    /// - `VerifyError::UnknownIssuer`: `iss` is not our API key
    /// - `VerifyError::NotYetValid`: `now < nbf`
    /// - `VerifyError::Expired`: `now > exp`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, VerifyError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::InvalidSignature => VerifyError::InvalidSignature,
                ErrorKind::InvalidIssuer => VerifyError::UnknownIssuer,
                _ => VerifyError::Malformed,
            },
        )?;

        match CredentialState::at(&data.claims, now) {
            CredentialState::Valid => Ok(data.claims),
            CredentialState::Pending => Err(VerifyError::NotYetValid),
            CredentialState::Expired => Err(VerifyError::Expired),
        }
    }
}
