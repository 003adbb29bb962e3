//! Bearer token verification middleware.
//!
//! The gateway never parses or validates tokens itself: a presented token is
//! forwarded to the authorization backend, which owns the verdict. Requests
//! without an `Authorization` header pass through — the header is optional
//! on every resource route, matching the published API contract.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Verifies a Bearer token against the authorization backend when present.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` when a token was presented and the backend
/// rejected it (or could not be asked).
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let bearer = AuthBearer::from_request_parts(&mut parts, &()).await.ok();

    let req = Request::from_parts(parts, body);

    if let Some(AuthBearer(token)) = bearer {
        state
            .auth
            .verify(&token)
            .await
            .map_err(|e| AppError::unauthorized(e.to_string()))?;
    }

    Ok(next.run(req).await)
}
