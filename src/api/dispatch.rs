//! Generic per-verb handlers over the [`Resource`] capability set.
//!
//! Article and author dispatch is structurally identical: parse the input,
//! make exactly one RPC (article creation adds a follow-up read), wrap the
//! result in the envelope. The differences that remain — failure-status
//! mapping and the read-after-create step — live in each resource's
//! [`UpstreamPolicy`] table, so one set of handlers serves every resource.
//!
//! No handler retries anything: an RPC failure is terminal for the inbound
//! request and reported exactly once.

use async_trait::async_trait;
use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::dto::envelope::JsonResponse;
use crate::api::dto::pagination::ListParams;
use crate::api::policy::UpstreamPolicy;
use crate::domain::clients::{ClientError, ListQuery};
use crate::error::AppError;
use crate::state::AppState;

/// One REST resource backed by one RPC service.
///
/// Implementations bind the five dispatch operations to the matching client
/// calls and declare their failure-mapping policy. Methods return the raw
/// [`ClientError`]; status selection is the dispatcher's job.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Name used in envelope messages ("Article | Created").
    const NAME: &'static str;
    const POLICY: UpstreamPolicy;

    type CreateBody: DeserializeOwned + Send + 'static;
    type UpdateBody: DeserializeOwned + Send + 'static;
    type Entity: Serialize + Send + Sync;

    /// Identifier of a just-created entity, for the follow-up read.
    fn entity_id(entity: &Self::Entity) -> &str;

    async fn create(state: &AppState, body: Self::CreateBody)
        -> Result<Self::Entity, ClientError>;
    async fn fetch(state: &AppState, id: &str) -> Result<Self::Entity, ClientError>;
    async fn list(state: &AppState, query: ListQuery) -> Result<Vec<Self::Entity>, ClientError>;
    async fn update(state: &AppState, body: Self::UpdateBody)
        -> Result<Self::Entity, ClientError>;
    async fn delete(state: &AppState, id: &str) -> Result<Self::Entity, ClientError>;
}

/// `POST /v1/{resource}` — create, optionally re-reading the new record.
///
/// A body that fails to parse is rejected with the parser's error text
/// before any RPC is made.
pub async fn create_handler<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<R::CreateBody>, JsonRejection>,
) -> Result<(StatusCode, Json<JsonResponse<R::Entity>>), AppError> {
    count_request(R::NAME, "create");

    let Json(body) = body.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let created = R::create(&state, body)
        .await
        .map_err(|e| R::POLICY.create.reject(e))?;

    let entity = if R::POLICY.refetch_after_create {
        R::fetch(&state, R::entity_id(&created))
            .await
            .map_err(|e| R::POLICY.hydrate.reject(e))?
    } else {
        created
    };

    Ok((
        StatusCode::CREATED,
        Json(JsonResponse::new(format!("{} | Created", R::NAME), entity)),
    ))
}

/// `GET /v1/{resource}/{id}` — read one record by its opaque identifier.
pub async fn get_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JsonResponse<R::Entity>>, AppError> {
    count_request(R::NAME, "get");

    let entity = R::fetch(&state, &id)
        .await
        .map_err(|e| R::POLICY.fetch.reject(e))?;

    Ok(Json(JsonResponse::new("OK", entity)))
}

/// `GET /v1/{resource}` — list a window resolved against configured defaults.
pub async fn list_handler<R: Resource>(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<JsonResponse<Vec<R::Entity>>>, AppError> {
    count_request(R::NAME, "list");

    let query = params
        .resolve(state.list_defaults)
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    let entities = R::list(&state, query)
        .await
        .map_err(|e| R::POLICY.list.reject(e))?;

    Ok(Json(JsonResponse::new("OK", entities)))
}

/// `PUT /v1/{resource}` — replace the mutable fields named in the body.
pub async fn update_handler<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<R::UpdateBody>, JsonRejection>,
) -> Result<Json<JsonResponse<R::Entity>>, AppError> {
    count_request(R::NAME, "update");

    let Json(body) = body.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let entity = R::update(&state, body)
        .await
        .map_err(|e| R::POLICY.update.reject(e))?;

    Ok(Json(JsonResponse::new(
        format!("{} | Updated", R::NAME),
        entity,
    )))
}

/// `DELETE /v1/{resource}/{id}` — delete by identifier.
///
/// A second delete of the same id reports the not-found outcome, never a
/// server fault.
pub async fn delete_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JsonResponse<R::Entity>>, AppError> {
    count_request(R::NAME, "delete");

    let entity = R::delete(&state, &id)
        .await
        .map_err(|e| R::POLICY.delete.reject(e))?;

    Ok(Json(JsonResponse::new(
        format!("{} | Deleted", R::NAME),
        entity,
    )))
}

fn count_request(resource: &'static str, operation: &'static str) {
    metrics::counter!(
        "gateway_requests_total",
        "resource" => resource,
        "operation" => operation,
    )
    .increment(1);
}
