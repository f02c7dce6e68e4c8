use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::IssuedTokensResponse;
use crate::errors::TokenError;

pub async fn list_issued_tokens(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();
    let tokens = {
        let mut issued = state.issued_tokens.write().await;
        let pruned = issued.prune(now);
        if pruned > 0 {
            log::debug!("pruned {pruned} expired tokens from the issued list");
        }
        issued.active(now)
    };

    (StatusCode::OK, Json(IssuedTokensResponse { tokens }))
}

pub async fn delete_issued_token(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, TokenError> {
    state
        .issued_tokens
        .write()
        .await
        .remove(id)
        .ok_or(TokenError::NotFound(id))?;

    Ok(StatusCode::NO_CONTENT)
}
