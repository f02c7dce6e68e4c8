use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PermissionSet;

/// What a credential says about itself, read without checking its signature.
///
/// Only for display (expiry countdowns, filtering a list of issued tokens).
/// Never feed this into an authorization decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSummary {
    pub subject_identity: String,
    pub room_name: String,
    pub grants: PermissionSet,
    pub issued_at: Option<DateTime<Utc>>,
    pub not_before: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
}

impl ClaimSummary {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
