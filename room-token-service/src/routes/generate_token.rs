use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::app_state::AppState;
use crate::domain::{IssuedToken, TokenRequestBody, TokenResponse};
use crate::errors::TokenError;

pub async fn generate_token(
    State(state): State<AppState>,
    payload: Result<Json<TokenRequestBody>, JsonRejection>,
) -> Result<impl IntoResponse, TokenError> {
    let Json(request) = payload?;
    let grants = request.grants();

    let params = request.to_params().map_err(|e| {
        log::warn!("rejected token request: {e}");
        e
    })?;
    let credential = state.token_issuer.issue(params)?;

    let claims = credential.claims();
    log::info!(
        "issued room token for {:?} in room {:?}, expires {}",
        claims.sub,
        claims.video.room,
        credential.expires_at()
    );

    let response = TokenResponse {
        token: credential.as_str().to_owned(),
        participant_name: claims.sub.clone(),
        room_name: claims.video.room.clone(),
    };

    {
        let mut issued = state.issued_tokens.write().await;
        let pruned = issued.prune(Utc::now());
        if pruned > 0 {
            log::debug!("pruned {pruned} expired tokens from the issued list");
        }
        issued.record(IssuedToken::new(
            response.token.clone(),
            response.room_name.clone(),
            response.participant_name.clone(),
            grants,
            credential.issued_at(),
            credential.expires_at(),
        ));
    }

    Ok((StatusCode::OK, Json(response)))
}
