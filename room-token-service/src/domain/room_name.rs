use crate::validation::is_valid_name;

/// Target room identifier, trimmed and non-empty.
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct RoomName(String);

impl RoomName {
    pub fn parse(name: impl AsRef<str>) -> Result<RoomName, String> {
        let name = name.as_ref();
        match is_valid_name(name) {
            true => Ok(RoomName(name.trim().to_owned())),
            false => Err(format!("room name {:?} is not valid", name)),
        }
    }
}

impl AsRef<str> for RoomName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
