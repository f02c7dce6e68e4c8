use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PermissionSet;

/// One entry of the "recently issued" list shown to administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub id: Uuid,
    pub token: String,
    pub room_name: String,
    pub participant_name: String,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_data: bool,
    pub generated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    pub fn new(
        token: String,
        room_name: String,
        participant_name: String,
        grants: PermissionSet,
        generated_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            token,
            room_name,
            participant_name,
            can_publish: grants.can_publish,
            can_subscribe: grants.can_subscribe,
            can_publish_data: grants.can_publish_data,
            generated_at,
            expires_at,
        }
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Append-only record of issued credentials.
///
/// Owned by whoever wants the bookkeeping (the HTTP layer here); the issuer
/// itself never sees it. Expired entries are only dropped by `prune`, and
/// `remove` exists for an operator discarding an entry by hand.
#[derive(Debug, Default)]
pub struct IssuedTokenLog {
    entries: Vec<IssuedToken>,
}

impl IssuedTokenLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: IssuedToken) {
        self.entries.push(entry);
    }

    /// Entries still valid at `now`, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<IssuedToken> {
        self.entries
            .iter()
            .filter(|t| t.is_active_at(now))
            .cloned()
            .collect()
    }

    /// Drop expired entries, returning how many were removed.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|t| t.is_active_at(now));
        before - self.entries.len()
    }

    pub fn remove(&mut self, id: Uuid) -> Option<IssuedToken> {
        let pos = self.entries.iter().position(|t| t.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
