use serde::{Deserialize, Serialize};

/// Capabilities granted to a participant inside a room.
///
/// Publish, subscribe and publish-data default to `true`. Joining is implied
/// by issuing a credential at all, so it is not configurable here; the claim
/// builder always sets `roomJoin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionSet {
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_data: bool,
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self {
            can_publish: true,
            can_subscribe: true,
            can_publish_data: true,
        }
    }
}

impl PermissionSet {
    /// Build a set from optional flags, each missing flag falling back to `true`.
    pub fn from_flags(
        can_publish: Option<bool>,
        can_subscribe: Option<bool>,
        can_publish_data: Option<bool>,
    ) -> Self {
        Self {
            can_publish: can_publish.unwrap_or(true),
            can_subscribe: can_subscribe.unwrap_or(true),
            can_publish_data: can_publish_data.unwrap_or(true),
        }
    }

    pub fn with_publish(mut self, allowed: bool) -> Self {
        self.can_publish = allowed;
        self
    }

    pub fn with_subscribe(mut self, allowed: bool) -> Self {
        self.can_subscribe = allowed;
        self
    }

    pub fn with_publish_data(mut self, allowed: bool) -> Self {
        self.can_publish_data = allowed;
        self
    }
}
