use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::DecodeRequestBody;
use crate::errors::TokenError;
use crate::services::TokenIssuer;

// Display-only: the signature is NOT checked.
pub async fn decode_token(
    payload: Result<Json<DecodeRequestBody>, JsonRejection>,
) -> Result<impl IntoResponse, TokenError> {
    let Json(request) = payload?;
    let summary = TokenIssuer::decode_for_display(&request.token)?;
    Ok((StatusCode::OK, Json(summary)))
}
