use serde::{Deserialize, Serialize};

use super::PermissionSet;

/// Room grant block carried under the `video` claim.
///
/// Field order is part of the wire contract with the media service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room: String,
    pub room_join: bool,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_data: bool,
}

impl VideoGrant {
    pub fn join(room: &str, grants: PermissionSet) -> Self {
        Self {
            room: room.to_owned(),
            room_join: true,
            can_publish: grants.can_publish,
            can_subscribe: grants.can_subscribe,
            can_publish_data: grants.can_publish_data,
        }
    }

    pub fn permissions(&self) -> PermissionSet {
        PermissionSet {
            can_publish: self.can_publish,
            can_subscribe: self.can_subscribe,
            can_publish_data: self.can_publish_data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub iss: String, // API key naming the signing secret
    pub sub: String, // Participant identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>, // Display name
    pub iat: i64, // Issued at, unix seconds
    pub nbf: i64, // Not before, unix seconds
    pub exp: i64, // Expiration time, unix seconds
    pub video: VideoGrant,
}
