use crate::validation::is_valid_name;

/// Participant identity, unique within a room. Trimmed and non-empty.
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct ParticipantIdentity(String);

impl ParticipantIdentity {
    pub fn parse(identity: impl AsRef<str>) -> Result<ParticipantIdentity, String> {
        let identity = identity.as_ref();
        match is_valid_name(identity) {
            true => Ok(ParticipantIdentity(identity.trim().to_owned())),
            false => Err(format!("participant identity {:?} is not valid", identity)),
        }
    }
}

impl AsRef<str> for ParticipantIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
