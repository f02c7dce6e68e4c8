use chrono::{DateTime, Utc};

use super::AccessClaims;

/// Where a credential sits on its timeline at a given instant.
///
/// Recomputed from the claims on every check; nothing stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    /// `now < nbf`
    Pending,
    /// `nbf <= now <= exp`
    Valid,
    /// `now > exp`
    Expired,
}

impl CredentialState {
    pub fn at(claims: &AccessClaims, now: DateTime<Utc>) -> Self {
        let now = now.timestamp();
        if now < claims.nbf {
            CredentialState::Pending
        } else if now > claims.exp {
            CredentialState::Expired
        } else {
            CredentialState::Valid
        }
    }
}
