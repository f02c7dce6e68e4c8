use serde::{Deserialize, Serialize};

use super::IssuedToken;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub participant_name: String,
    pub room_name: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct TestTokenResponse {
    pub token: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct IssuedTokensResponse {
    pub tokens: Vec<IssuedToken>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
