use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::app_state::AppState;
use crate::domain::{IssueParams, PermissionSet, TestTokenResponse};
use crate::errors::TokenError;

/// Quick throwaway credential for the configured test room.
pub async fn test_token(State(state): State<AppState>) -> Result<impl IntoResponse, TokenError> {
    let identity = format!("user-{}", Utc::now().timestamp_millis());
    let params = IssueParams::parse(state.config.test_room_name(), &identity)?
        .with_grants(PermissionSet::default());

    let credential = state.token_issuer.issue(params)?;
    log::info!(
        "issued test token for {:?} in room {:?}",
        identity,
        state.config.test_room_name()
    );

    Ok((
        StatusCode::OK,
        Json(TestTokenResponse {
            token: credential.into_string(),
        }),
    ))
}
