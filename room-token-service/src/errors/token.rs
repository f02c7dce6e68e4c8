use axum::extract::rejection::JsonRejection;
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::{DecodeError, ErrorResponse, IssueError};

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("malformed json: {0}")]
    Json(#[from] JsonRejection),

    #[error("Room name and participant name are required")]
    MissingNames(String),

    #[error("{0}")]
    TtlOutOfRange(String),

    #[error("token could not be decoded: {0}")]
    Undecodable(#[from] DecodeError),

    #[error("issued token {0} not found")]
    NotFound(uuid::Uuid),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<IssueError> for TokenError {
    fn from(err: IssueError) -> Self {
        match err {
            IssueError::InvalidArgument(reason) => TokenError::MissingNames(reason),
            e @ IssueError::TtlOutOfRange { .. } => TokenError::TtlOutOfRange(e.to_string()),
            IssueError::Signing(e) => {
                log::error!("failed to sign credential: {e}");
                TokenError::InternalServerError
            }
        }
    }
}

impl IntoResponse for TokenError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            TokenError::Json(_) => StatusCode::BAD_REQUEST,
            TokenError::MissingNames(_) => StatusCode::BAD_REQUEST,
            TokenError::TtlOutOfRange(_) => StatusCode::BAD_REQUEST,
            TokenError::Undecodable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TokenError::NotFound(_) => StatusCode::NOT_FOUND,
            TokenError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
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
