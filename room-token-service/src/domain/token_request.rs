use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{IssueError, ParticipantIdentity, PermissionSet, RoomName};

/// JSON body of `POST /api/token/generate`.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequestBody {
    #[serde(default)]
    pub room_name: String,
    #[serde(default)]
    pub participant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish_data: Option<bool>,
}

impl TokenRequestBody {
    pub fn to_params(&self) -> Result<IssueParams, IssueError> {
        Ok(IssueParams::parse(&self.room_name, &self.participant_name)?.with_grants(self.grants()))
    }

    pub fn grants(&self) -> PermissionSet {
        PermissionSet::from_flags(self.can_publish, self.can_subscribe, self.can_publish_data)
    }
}

/// Validated input to the issuer.
#[derive(Debug, Clone)]
pub struct IssueParams {
    pub room: RoomName,
    pub identity: ParticipantIdentity,
    pub grants: PermissionSet,
    pub display_name: Option<String>,
    /// `None` falls back to the issuer's configured default.
    pub ttl: Option<Duration>,
}

impl IssueParams {
    pub fn new(room: RoomName, identity: ParticipantIdentity) -> Self {
        Self {
            room,
            identity,
            grants: PermissionSet::default(),
            display_name: None,
            ttl: None,
        }
    }

    /// Validate raw room and identity strings.
    pub fn parse(room: &str, identity: &str) -> Result<Self, IssueError> {
        let room = RoomName::parse(room).map_err(IssueError::InvalidArgument)?;
        let identity = ParticipantIdentity::parse(identity).map_err(IssueError::InvalidArgument)?;
        Ok(Self::new(room, identity))
    }

    pub fn with_grants(mut self, grants: PermissionSet) -> Self {
        self.grants = grants;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct DecodeRequestBody {
    pub token: String,
}
