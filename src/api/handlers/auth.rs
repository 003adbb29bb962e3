//! Login handler — the authorization resource's single verb.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    Json,
};

use crate::api::dto::auth::LoginRequest;
use crate::api::dto::envelope::JsonResponse;
use crate::domain::entities::AccessToken;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges credentials for a token minted by the authorization backend.
///
/// # Endpoint
///
/// `POST /v1/login`
///
/// # Responses
///
/// - **201 Created** with the token envelope on success
/// - **400 Bad Request** on a malformed body or rejected credentials
///   (no RPC is made for a malformed body)
pub async fn login_handler(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JsonResponse<AccessToken>>), AppError> {
    metrics::counter!(
        "gateway_requests_total",
        "resource" => "Auth",
        "operation" => "login",
    )
    .increment(1);

    let Json(body) = body.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let token = state
        .auth
        .login(body.into())
        .await
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(JsonResponse::new("OK", token))))
}
