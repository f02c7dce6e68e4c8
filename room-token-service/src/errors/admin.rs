use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::ErrorResponse;

#[derive(Error, Debug)]
pub enum AdminAuthError {
    #[error("admin credentials required")]
    MissingCredentials,

    #[error("invalid admin credentials")]
    InvalidCredentials,
}

impl IntoResponse for AdminAuthError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AdminAuthError::MissingCredentials => StatusCode::UNAUTHORIZED,
            AdminAuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
