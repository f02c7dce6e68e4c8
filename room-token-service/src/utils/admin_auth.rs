use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use crate::app_state::AppState;
use crate::errors::AdminAuthError;

/// Gate for the admin-only routes.
///
/// The admin session lives outside this service; callers prove they are past
/// it by presenting the shared admin key as a bearer token.
pub async fn require_admin(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    request: Request,
    next: Next,
) -> Result<Response, AdminAuthError> {
    let Some(TypedHeader(Authorization(bearer))) = bearer else {
        log::warn!("rejected {} {}: no admin credentials", request.method(), request.uri().path());
        return Err(AdminAuthError::MissingCredentials);
    };

    if !constant_time_eq(bearer.token().as_bytes(), state.config.admin_api_key().as_bytes()) {
        log::warn!("rejected {} {}: bad admin credentials", request.method(), request.uri().path());
        return Err(AdminAuthError::InvalidCredentials);
    }

    Ok(next.run(request).await)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}
